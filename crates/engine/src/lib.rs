pub mod cell;
pub mod column;
pub mod events;
pub mod session;
pub mod sheet;
pub mod store;

pub use cell::{Cell, StyleValue};
pub use column::{Column, ColumnId};
pub use session::GridSession;
pub use sheet::{Row, Sheet, SheetId};
pub use store::{ColumnSpec, GridStore, SeedConfig};
