//! Event types for store change notifications.
//!
//! The store's mutators return these events; `GridSession` dispatches them
//! to subscribers so a rendering layer can re-render on notification
//! instead of polling live state.

use crate::column::ColumnId;
use crate::sheet::SheetId;

/// Events describing a change to the grid state store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// All sheets' cell data was regenerated from the current columns.
    /// Prior cell content did not survive.
    Reseeded(ReseededEvent),

    /// A single cell's value or style changed.
    CellChanged(CellChangedEvent),

    /// The active-sheet reference moved to a different sheet.
    ActiveSheetChanged(ActiveSheetChangedEvent),
}

/// Emitted once per seeding pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ReseededEvent {
    /// Sheets whose `data` was regenerated, in store order.
    pub sheets: Vec<SheetId>,
    /// Row count written to every sheet.
    pub rows: usize,
}

/// Emitted when one cell's value or style bag changed.
#[derive(Debug, Clone, PartialEq)]
pub struct CellChangedEvent {
    pub sheet: SheetId,
    /// Row index (0-based).
    pub row: usize,
    pub column: ColumnId,
}

/// Emitted when the active-sheet reference changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSheetChangedEvent {
    /// The newly active sheet.
    pub sheet: SheetId,
    /// The previously active sheet.
    pub previous: SheetId,
}

/// Callback type for receiving store events.
pub type EventCallback = Box<dyn FnMut(&StoreEvent)>;

/// Simple event collector for testing and diagnostics.
#[derive(Default)]
pub struct EventCollector {
    events: Vec<StoreEvent>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: StoreEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[StoreEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Filter to only Reseeded events.
    pub fn reseeded(&self) -> Vec<&ReseededEvent> {
        self.events
            .iter()
            .filter_map(|e| match e {
                StoreEvent::Reseeded(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    /// Filter to only CellChanged events.
    pub fn cells_changed(&self) -> Vec<&CellChangedEvent> {
        self.events
            .iter()
            .filter_map(|e| match e {
                StoreEvent::CellChanged(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    /// Filter to only ActiveSheetChanged events.
    pub fn active_sheet_changed(&self) -> Vec<&ActiveSheetChangedEvent> {
        self.events
            .iter()
            .filter_map(|e| match e {
                StoreEvent::ActiveSheetChanged(a) => Some(a),
                _ => None,
            })
            .collect()
    }
}
