//! Plain-text rendering of a sheet.
//!
//! Column pixel widths become character budgets; values longer than the
//! budget are truncated. This is a stand-in for the real UI layer, which
//! reads the same live store state.

use gridpad_config::Settings;
use gridpad_engine::{GridStore, Sheet};

/// Pixels per character for converting display widths to column budgets.
const PX_PER_CHAR: f32 = 10.0;
const MIN_COL_CHARS: usize = 4;

fn col_chars(width: f32) -> usize {
    ((width / PX_PER_CHAR).round() as usize).max(MIN_COL_CHARS)
}

fn clip(text: &str, budget: usize) -> String {
    let count = text.chars().count();
    if count <= budget {
        let mut s = text.to_string();
        s.extend(std::iter::repeat(' ').take(budget - count));
        s
    } else {
        let mut s: String = text.chars().take(budget.saturating_sub(1)).collect();
        s.push('…');
        s
    }
}

/// Render one sheet as an aligned text grid.
pub fn render_sheet(store: &GridStore, sheet: &Sheet, settings: &Settings) -> String {
    let mut out = String::new();
    let sep = if settings.show_grid_lines { " | " } else { "  " };
    let header_chars = ((settings.row_header_width / PX_PER_CHAR).round() as usize).max(2);

    // Header row: column names
    out.push_str(&" ".repeat(header_chars));
    for col in store.columns() {
        out.push_str(sep);
        out.push_str(&clip(&col.name, col_chars(col.width)));
    }
    out.push('\n');

    if settings.show_grid_lines {
        let line_len = out.lines().next().map(|l| l.chars().count()).unwrap_or(0);
        out.push_str(&"-".repeat(line_len));
        out.push('\n');
    }

    for (index, row) in sheet.data.iter().enumerate() {
        out.push_str(&clip(&(index + 1).to_string(), header_chars));
        for col in store.columns() {
            out.push_str(sep);
            let value = row.get(&col.id).map(|c| c.value.as_str()).unwrap_or("");
            out.push_str(&clip(value, col_chars(col.width)));
        }
        out.push('\n');
    }

    out
}
