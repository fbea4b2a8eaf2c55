//! Column definitions shared across all sheets.
//!
//! Columns are global to the store: every sheet's rows are keyed by the
//! same `ColumnId` set. Widths are display hints for the UI layer and are
//! not enforced here.

use serde::{Deserialize, Serialize};

/// Unique identifier for a column, stable across all sheets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(u64);

impl ColumnId {
    pub fn from_raw(raw: u64) -> Self {
        ColumnId(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A column definition: identity, display label, display width.
///
/// Created once at store initialization and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    /// Display width in pixels. UI hint only.
    pub width: f32,
}

impl Column {
    pub fn new(id: ColumnId, name: impl Into<String>, width: f32) -> Self {
        Self {
            id,
            name: name.into(),
            width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_id_identity() {
        let a = ColumnId::from_raw(1);
        let b = ColumnId::from_raw(1);
        let c = ColumnId::from_raw(2);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.raw(), 1);
    }

    #[test]
    fn test_column_new() {
        let col = Column::new(ColumnId::from_raw(3), "C", 200.0);
        assert_eq!(col.name, "C");
        assert_eq!(col.width, 200.0);
    }
}
