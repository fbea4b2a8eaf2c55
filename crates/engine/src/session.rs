//! Session wrapper: owns a store and dispatches change events.
//!
//! The store itself stays a plain data structure; `GridSession` is the
//! single top-level context that consumers mutate through. Every mutation
//! is forwarded to the store and the resulting event is handed to all
//! subscribers synchronously, in subscription order, on the caller's
//! thread. Reads go straight to the live store.

use crate::cell::StyleValue;
use crate::column::ColumnId;
use crate::events::{EventCallback, StoreEvent};
use crate::sheet::SheetId;
use crate::store::{GridStore, SeedConfig};

/// A store plus its subscriber list.
pub struct GridSession {
    store: GridStore,
    subscribers: Vec<EventCallback>,
}

impl Default for GridSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSession {
    /// Create a session around a freshly seeded stock store.
    pub fn new() -> Self {
        Self::with_store(GridStore::new())
    }

    pub fn with_config(config: &SeedConfig) -> Self {
        Self::with_store(GridStore::with_config(config))
    }

    /// Wrap an existing store.
    pub fn with_store(store: GridStore) -> Self {
        Self {
            store,
            subscribers: Vec::new(),
        }
    }

    /// Live read access to the store.
    pub fn store(&self) -> &GridStore {
        &self.store
    }

    /// Direct mutable access to the store.
    ///
    /// Mutations made this way bypass notification; use the session's
    /// mutators when subscribers should hear about the change.
    pub fn store_mut(&mut self) -> &mut GridStore {
        &mut self.store
    }

    /// Register a subscriber. Subscribers are invoked in registration order.
    pub fn subscribe(&mut self, callback: impl FnMut(&StoreEvent) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Regenerate all sheets' cell data and notify subscribers.
    pub fn reseed(&mut self) {
        let event = self.store.reseed();
        self.dispatch(&event);
    }

    /// Set a cell's value. Returns false when the coordinate does not
    /// resolve; nothing is dispatched in that case.
    pub fn set_cell_value(
        &mut self,
        sheet: SheetId,
        row: usize,
        column: ColumnId,
        value: impl Into<String>,
    ) -> bool {
        match self.store.set_cell_value(sheet, row, column, value) {
            Some(event) => {
                self.dispatch(&event);
                true
            }
            None => false,
        }
    }

    /// Set one style attribute on a cell.
    pub fn set_cell_style(
        &mut self,
        sheet: SheetId,
        row: usize,
        column: ColumnId,
        key: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> bool {
        match self.store.set_cell_style(sheet, row, column, key, value) {
            Some(event) => {
                self.dispatch(&event);
                true
            }
            None => false,
        }
    }

    /// Move the active-sheet reference. Unknown ids are rejected.
    pub fn set_active_sheet(&mut self, id: SheetId) -> bool {
        match self.store.set_active_sheet(id) {
            Some(event) => {
                self.dispatch(&event);
                true
            }
            None => false,
        }
    }

    fn dispatch(&mut self, event: &StoreEvent) {
        log::debug!(
            "dispatching {:?} to {} subscriber(s)",
            event,
            self.subscribers.len()
        );
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }
}
