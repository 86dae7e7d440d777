//! Column definitions for the users table.

use egui_extras::Column;

pub const ID_WIDTH: f32 = 50.0;
pub const ACTIVATION_WIDTH: f32 = 100.0;
pub const LANG_KEY_WIDTH: f32 = 80.0;
pub const DATE_WIDTH: f32 = 120.0;
pub const ACTIONS_WIDTH: f32 = 150.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Columns in display order: ID, Login, Email, activation, Lang Key,
/// Profiles, Created Date, Last Modified By, Last Modified Date, actions.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),
        Column::auto().at_least(80.0),
        Column::auto().at_least(140.0),
        Column::exact(ACTIVATION_WIDTH),
        Column::exact(LANG_KEY_WIDTH),
        Column::auto().at_least(100.0),
        Column::exact(DATE_WIDTH),
        Column::auto().at_least(100.0),
        Column::exact(DATE_WIDTH),
        Column::exact(ACTIONS_WIDTH),
    ]
}
