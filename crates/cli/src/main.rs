// GridPad CLI - headless grid store operations
//
// Stands in for the UI layer: constructs the store from settings, reads
// live state, mutates cells and the active-sheet reference. The store is
// memory-only; mutations live for one invocation.

mod exit_codes;
mod grid_ref;
mod render;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use gridpad_config::Settings;
use gridpad_engine::{ColumnSpec, GridSession, SeedConfig, SheetId, StyleValue};

use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "gridpad")]
#[command(about = "In-memory grid state store (headless demo consumer)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a sheet as a text grid (default: the active sheet)
    Show {
        /// Sheet name or numeric id
        #[arg(long)]
        sheet: Option<String>,
    },

    /// List sheets with ids, row counts, and the active marker
    Sheets,

    /// Set a cell's value (and optionally style attributes), then render
    #[command(after_help = "\
Examples:
  gridpad set A1 'hello'
  gridpad set B20 '42' --sheet Sheet2
  gridpad set C3 'total' --style bold=true --style fontSize=13")]
    Set {
        /// A1-style cell reference against the column labels
        reference: String,

        /// New display value
        value: String,

        /// Sheet name or numeric id (default: active sheet)
        #[arg(long)]
        sheet: Option<String>,

        /// Style attribute as key=value; repeatable
        #[arg(long)]
        style: Vec<String>,
    },

    /// Demonstrate destructive reseeding: edit a cell, reseed, render
    Reseed,
}

enum CliError {
    Usage(String),
    Other(String),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError::Usage(msg)) => {
            eprintln!("error: {}", msg);
            ExitCode::from(EXIT_USAGE)
        }
        Err(CliError::Other(msg)) => {
            eprintln!("error: {}", msg);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load();
    let mut session = GridSession::with_config(&seed_config(&settings));
    session.subscribe(|event| log::info!("store event: {:?}", event));

    match cli.command.unwrap_or(Commands::Show { sheet: None }) {
        Commands::Show { sheet } => {
            let id = resolve_sheet(&session, sheet.as_deref())?;
            print_sheet(&session, id, &settings);
            Ok(())
        }
        Commands::Sheets => {
            for sheet in session.store().sheets() {
                let marker = if sheet.id == session.store().active_sheet() {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{} [{}] {} ({} rows)",
                    marker,
                    sheet.id,
                    sheet.name,
                    sheet.row_count()
                );
            }
            Ok(())
        }
        Commands::Set {
            reference,
            value,
            sheet,
            style,
        } => {
            let id = resolve_sheet(&session, sheet.as_deref())?;
            if id != session.store().active_sheet() {
                session.set_active_sheet(id);
            }

            let parsed = grid_ref::parse(&reference).map_err(CliError::Usage)?;
            let column = session
                .store()
                .column_by_name(&parsed.column)
                .ok_or_else(|| CliError::Usage(format!("unknown column '{}'", parsed.column)))?
                .id;

            if !session.set_cell_value(id, parsed.row, column, value) {
                return Err(CliError::Usage(format!(
                    "'{}' is outside the sheet ({} rows)",
                    reference,
                    session.store().sheet(id).map(|s| s.row_count()).unwrap_or(0)
                )));
            }

            for attr in &style {
                let (key, raw) = attr.split_once('=').ok_or_else(|| {
                    CliError::Usage(format!("style '{}' is not key=value", attr))
                })?;
                session.set_cell_style(id, parsed.row, column, key, style_value(raw));
            }

            print_sheet(&session, id, &settings);
            Ok(())
        }
        Commands::Reseed => {
            let id = session.store().active_sheet();
            let column = session
                .store()
                .columns()
                .first()
                .map(|c| c.id)
                .ok_or_else(|| CliError::Other("store has no columns".to_string()))?;

            session.set_cell_value(id, 0, column, "edited before reseed");
            println!("before reseed:");
            print_sheet(&session, id, &settings);

            session.reseed();
            println!("after reseed (edit did not survive):");
            print_sheet(&session, id, &settings);
            Ok(())
        }
    }
}

fn seed_config(settings: &Settings) -> SeedConfig {
    SeedConfig {
        rows: settings.seed_rows,
        sheet_names: settings.seed_sheet_names.clone(),
        columns: settings
            .seed_columns
            .iter()
            .map(|c| ColumnSpec::new(&c.name, c.width))
            .collect(),
    }
}

/// Resolve a sheet argument: name first, then numeric id; None = active.
fn resolve_sheet(session: &GridSession, arg: Option<&str>) -> Result<SheetId, CliError> {
    let store = session.store();
    match arg {
        None => Ok(store.active_sheet()),
        Some(name) => {
            if let Some(sheet) = store.sheet_by_name(name) {
                return Ok(sheet.id);
            }
            if let Ok(raw) = name.parse::<u64>() {
                let id = SheetId::from_raw(raw);
                if store.sheet(id).is_some() {
                    return Ok(id);
                }
            }
            Err(CliError::Usage(format!("unknown sheet '{}'", name)))
        }
    }
}

/// Infer a style value from its text form: bool, then number, then text.
fn style_value(raw: &str) -> StyleValue {
    match raw {
        "true" => StyleValue::Bool(true),
        "false" => StyleValue::Bool(false),
        _ => {
            if let Ok(n) = raw.parse::<f64>() {
                StyleValue::Number(n)
            } else {
                StyleValue::Text(raw.to_string())
            }
        }
    }
}

fn print_sheet(session: &GridSession, id: SheetId, settings: &Settings) {
    let store = session.store();
    if let Some(sheet) = store.sheet(id) {
        println!("{} ({} rows)", sheet.name, sheet.row_count());
        print!("{}", render::render_sheet(store, sheet, settings));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_value_inference() {
        assert_eq!(style_value("true"), StyleValue::Bool(true));
        assert_eq!(style_value("13"), StyleValue::Number(13.0));
        assert_eq!(style_value("#fff"), StyleValue::Text("#fff".to_string()));
    }

    #[test]
    fn test_resolve_sheet_by_name_and_id() {
        let session = GridSession::new();

        assert!(resolve_sheet(&session, None).is_ok());
        assert_eq!(
            resolve_sheet(&session, Some("Sheet2")).ok(),
            Some(session.store().sheets()[1].id)
        );
        assert_eq!(
            resolve_sheet(&session, Some("1")).ok(),
            Some(session.store().sheets()[0].id)
        );
        assert!(resolve_sheet(&session, Some("nope")).is_err());
    }
}
