//! Table components for the users screen.
//!
//! - `columns`: column definitions and widths
//! - `header`: header row with sortable labels
//! - `row`: one row per user
//! - `cells`: per-column cell content

mod cells;
pub mod columns;
pub mod header;
pub mod row;
