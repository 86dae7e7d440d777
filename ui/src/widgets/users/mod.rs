//! Users screen widgets.
//!
//! - `panel`: heading, table and footer, wired to the store
//! - `pagination`: item count and pager
//! - `table`: table rendering components (columns, header, row, cells)

mod pagination;
mod panel;
pub mod table;

pub use panel::users_panel;
