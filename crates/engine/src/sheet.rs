use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::column::ColumnId;

/// Unique identifier for a sheet within a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetId(u64);

impl SheetId {
    pub fn from_raw(raw: u64) -> Self {
        SheetId(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SheetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row entry: column id -> cell content.
pub type Row = FxHashMap<ColumnId, Cell>;

/// A named, ordered collection of rows.
///
/// Row count is fixed at seed time; the store never resizes `data`
/// implicitly. Sheet names are arbitrary UTF-8 and may be non-ASCII.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub id: SheetId,
    pub name: String,
    pub data: Vec<Row>,
}

impl Sheet {
    pub fn new(id: SheetId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            data: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.data.get(index)
    }

    /// Get the cell at (row index, column id), if the coordinate resolves.
    pub fn cell(&self, row: usize, column: ColumnId) -> Option<&Cell> {
        self.data.get(row).and_then(|r| r.get(&column))
    }

    pub fn cell_mut(&mut self, row: usize, column: ColumnId) -> Option<&mut Cell> {
        self.data.get_mut(row).and_then(|r| r.get_mut(&column))
    }
}
