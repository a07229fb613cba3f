//! Turns analysis records into table rows.
//!
//! All columns go through one rule: a value that is absent, empty, or an
//! empty list is replaced by the column's placeholder. Renderers never
//! branch on individual fields.

mod column;
mod table;

pub mod prelude {
    pub use super::column::{Column, Placeholder, CREATED_AT_FORMAT};
    pub use super::table::{ResultTable, TableRow, NO_RESULTS_TEXT};
}
