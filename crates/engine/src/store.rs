use serde::{Deserialize, Serialize};

use crate::cell::{Cell, StyleValue};
use crate::column::{Column, ColumnId};
use crate::events::{ActiveSheetChangedEvent, CellChangedEvent, ReseededEvent, StoreEvent};
use crate::sheet::{Row, Sheet, SheetId};

/// Column definition used by the seeder: display name plus width.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub width: f32,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, width: f32) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }
}

/// Configuration for the demonstration seed.
///
/// `Default` reproduces the stock configuration: two sheets, columns
/// A/B/C at widths 100/150/200, twenty rows per sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub rows: usize,
    pub sheet_names: Vec<String>,
    pub columns: Vec<ColumnSpec>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            sheet_names: vec!["Sheet1".to_string(), "Sheet2".to_string()],
            columns: vec![
                ColumnSpec::new("A", 100.0),
                ColumnSpec::new("B", 150.0),
                ColumnSpec::new("C", 200.0),
            ],
        }
    }
}

/// The grid state store: sheets, shared columns, active-sheet reference.
///
/// Single-threaded by contract; readers and writers share one logical
/// thread, so no locking is provided or required. Mutators return the
/// `StoreEvent` describing the change (or `None` when the target does not
/// resolve); event dispatch to subscribers is `GridSession`'s job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridStore {
    sheets: Vec<Sheet>,
    columns: Vec<Column>,
    active_sheet: SheetId,
    /// Row count written by every seeding pass. Fixed at construction.
    seed_rows: usize,
}

impl Default for GridStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GridStore {
    /// Create a store with the stock configuration and run one seeding pass.
    pub fn new() -> Self {
        Self::with_config(&SeedConfig::default())
    }

    /// Create a store from an explicit seed configuration.
    ///
    /// Sheet and column ids are assigned 1-based in declaration order.
    /// The active sheet starts at the first sheet's id.
    pub fn with_config(config: &SeedConfig) -> Self {
        let columns = config
            .columns
            .iter()
            .enumerate()
            .map(|(i, spec)| Column::new(ColumnId::from_raw(i as u64 + 1), &spec.name, spec.width))
            .collect();

        let sheets: Vec<Sheet> = config
            .sheet_names
            .iter()
            .enumerate()
            .map(|(i, name)| Sheet::new(SheetId::from_raw(i as u64 + 1), name))
            .collect();

        let active_sheet = sheets
            .first()
            .map(|s| s.id)
            .unwrap_or_else(|| SheetId::from_raw(1));

        let mut store = Self {
            sheets,
            columns,
            active_sheet,
            seed_rows: config.rows,
        };
        store.reseed();
        store
    }

    /// Regenerate every sheet's `data` from the current column collection.
    ///
    /// Destructive: prior cell content is fully overwritten, never merged.
    /// Safe to call any number of times. Cannot fail; with zero columns the
    /// rows are present but contain no cells.
    pub fn reseed(&mut self) -> StoreEvent {
        let columns = &self.columns;
        let rows = self.seed_rows;
        for sheet in &mut self.sheets {
            sheet.data = (0..rows)
                .map(|row| {
                    columns
                        .iter()
                        .map(|col| {
                            let cell = Cell::new(format!("Cell {}{}", col.name, row + 1));
                            (col.id, cell)
                        })
                        .collect::<Row>()
                })
                .collect();
        }
        StoreEvent::Reseeded(ReseededEvent {
            sheets: self.sheets.iter().map(|s| s.id).collect(),
            rows,
        })
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn sheet(&self, id: SheetId) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.id == id)
    }

    pub fn sheet_mut(&mut self, id: SheetId) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.id == id)
    }

    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Id of the sheet currently selected for display.
    pub fn active_sheet(&self) -> SheetId {
        self.active_sheet
    }

    /// Resolve the active-sheet reference against the sheet collection.
    pub fn active_sheet_ref(&self) -> Option<&Sheet> {
        self.sheet(self.active_sheet)
    }

    /// Row count written by seeding passes.
    pub fn seed_rows(&self) -> usize {
        self.seed_rows
    }

    /// Move the active-sheet reference.
    ///
    /// Unknown ids are rejected (state unchanged, returns `None`) so the
    /// reference always names an existing sheet. Selecting the already
    /// active sheet is a no-op.
    pub fn set_active_sheet(&mut self, id: SheetId) -> Option<StoreEvent> {
        if id == self.active_sheet || self.sheet(id).is_none() {
            return None;
        }
        let previous = self.active_sheet;
        self.active_sheet = id;
        Some(StoreEvent::ActiveSheetChanged(ActiveSheetChangedEvent {
            sheet: id,
            previous,
        }))
    }

    /// Set a cell's display value. Last write wins.
    ///
    /// Returns `None` when the (sheet, row, column) coordinate does not
    /// resolve to an existing cell.
    pub fn set_cell_value(
        &mut self,
        sheet: SheetId,
        row: usize,
        column: ColumnId,
        value: impl Into<String>,
    ) -> Option<StoreEvent> {
        let cell = self.sheet_mut(sheet)?.cell_mut(row, column)?;
        cell.value = value.into();
        Some(StoreEvent::CellChanged(CellChangedEvent { sheet, row, column }))
    }

    /// Set one attribute in a cell's style bag. Last write wins.
    pub fn set_cell_style(
        &mut self,
        sheet: SheetId,
        row: usize,
        column: ColumnId,
        key: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StoreEvent> {
        let cell = self.sheet_mut(sheet)?.cell_mut(row, column)?;
        cell.set_style(key, value);
        Some(StoreEvent::CellChanged(CellChangedEvent { sheet, row, column }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_seed_shape() {
        let store = GridStore::new();

        assert_eq!(store.sheet_count(), 2);
        assert_eq!(store.columns().len(), 3);

        for sheet in store.sheets() {
            assert_eq!(sheet.row_count(), 20);
            for row in &sheet.data {
                assert_eq!(row.len(), 3);
                for col in store.columns() {
                    assert!(row.contains_key(&col.id));
                }
            }
        }
    }

    #[test]
    fn test_seed_values_are_deterministic_literals() {
        let store = GridStore::new();
        let sheet = store.active_sheet_ref().unwrap();
        let col_a = store.column_by_name("A").unwrap().id;
        let col_b = store.column_by_name("B").unwrap().id;

        assert_eq!(sheet.cell(0, col_a).unwrap().value, "Cell A1");
        assert_eq!(sheet.cell(19, col_b).unwrap().value, "Cell B20");
        assert!(sheet.cell(0, col_a).unwrap().style.is_empty());
    }

    #[test]
    fn test_default_columns() {
        let store = GridStore::new();
        let widths: Vec<f32> = store.columns().iter().map(|c| c.width).collect();
        let names: Vec<&str> = store.columns().iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(widths, [100.0, 150.0, 200.0]);
    }

    #[test]
    fn test_id_uniqueness_survives_reseed() {
        let mut store = GridStore::new();

        let check = |store: &GridStore| {
            let sheet_ids: HashSet<_> = store.sheets().iter().map(|s| s.id).collect();
            let col_ids: HashSet<_> = store.columns().iter().map(|c| c.id).collect();
            assert_eq!(sheet_ids.len(), store.sheet_count());
            assert_eq!(col_ids.len(), store.columns().len());
        };

        check(&store);
        store.reseed();
        check(&store);
    }

    #[test]
    fn test_active_sheet_is_first_sheet() {
        let store = GridStore::new();
        assert_eq!(store.active_sheet(), store.sheets()[0].id);
        assert!(store.active_sheet_ref().is_some());
    }

    #[test]
    fn test_reseed_overwrites_manual_mutation() {
        let mut store = GridStore::new();
        let sheet = store.active_sheet();
        let col = store.column_by_name("A").unwrap().id;

        store.set_cell_value(sheet, 0, col, "edited").unwrap();
        assert_eq!(store.sheet(sheet).unwrap().cell(0, col).unwrap().value, "edited");

        store.reseed();
        assert_eq!(store.sheet(sheet).unwrap().cell(0, col).unwrap().value, "Cell A1");
    }

    #[test]
    fn test_zero_columns_yields_empty_rows() {
        let config = SeedConfig {
            columns: Vec::new(),
            ..SeedConfig::default()
        };
        let store = GridStore::with_config(&config);

        for sheet in store.sheets() {
            assert_eq!(sheet.row_count(), 20);
            assert!(sheet.data.iter().all(|row| row.is_empty()));
        }
    }

    #[test]
    fn test_zero_rows_yields_empty_sheets() {
        let config = SeedConfig {
            rows: 0,
            ..SeedConfig::default()
        };
        let store = GridStore::with_config(&config);
        assert!(store.sheets().iter().all(|s| s.row_count() == 0));
    }

    #[test]
    fn test_set_active_sheet() {
        let mut store = GridStore::new();
        let second = store.sheets()[1].id;

        let event = store.set_active_sheet(second).unwrap();
        match event {
            StoreEvent::ActiveSheetChanged(e) => {
                assert_eq!(e.sheet, second);
                assert_eq!(e.previous, store.sheets()[0].id);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(store.active_sheet(), second);

        // Same sheet again: no change, no event
        assert!(store.set_active_sheet(second).is_none());
    }

    #[test]
    fn test_set_active_sheet_rejects_unknown_id() {
        let mut store = GridStore::new();
        let before = store.active_sheet();

        assert!(store.set_active_sheet(SheetId::from_raw(99)).is_none());
        assert_eq!(store.active_sheet(), before);
    }

    #[test]
    fn test_set_cell_value_event_coordinates() {
        let mut store = GridStore::new();
        let sheet = store.active_sheet();
        let col = store.column_by_name("C").unwrap().id;

        let event = store.set_cell_value(sheet, 4, col, "42").unwrap();
        match event {
            StoreEvent::CellChanged(e) => {
                assert_eq!(e.sheet, sheet);
                assert_eq!(e.row, 4);
                assert_eq!(e.column, col);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_set_cell_value_unresolved_coordinate() {
        let mut store = GridStore::new();
        let sheet = store.active_sheet();
        let col = store.column_by_name("A").unwrap().id;

        assert!(store.set_cell_value(sheet, 20, col, "x").is_none());
        assert!(store
            .set_cell_value(SheetId::from_raw(99), 0, col, "x")
            .is_none());
        assert!(store
            .set_cell_value(sheet, 0, ColumnId::from_raw(99), "x")
            .is_none());
    }

    #[test]
    fn test_set_cell_style() {
        let mut store = GridStore::new();
        let sheet = store.active_sheet();
        let col = store.column_by_name("A").unwrap().id;

        store.set_cell_style(sheet, 2, col, "bold", true).unwrap();
        let cell = store.sheet(sheet).unwrap().cell(2, col).unwrap();
        assert_eq!(cell.style_attr("bold"), Some(&StyleValue::Bool(true)));
        // Value untouched by style writes
        assert_eq!(cell.value, "Cell A3");
    }

    #[test]
    fn test_custom_config_non_ascii_names() {
        let config = SeedConfig {
            rows: 3,
            sheet_names: vec!["Лист1".to_string()],
            columns: vec![ColumnSpec::new("Я", 80.0)],
        };
        let store = GridStore::with_config(&config);

        let sheet = store.sheet_by_name("Лист1").unwrap();
        assert_eq!(sheet.row_count(), 3);
        let col = store.column_by_name("Я").unwrap().id;
        assert_eq!(sheet.cell(2, col).unwrap().value, "Cell Я3");
    }
}
