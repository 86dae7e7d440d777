//! Row rendering for the users table.

use egui_extras::TableRow;
use roster_business::{USER_MANAGEMENT_BASE, User, UserRoute, format_date};

pub use super::cells::RowAction;
use super::cells::{
    render_action_links, render_activation_cell, render_authorities_cell, render_link_cell,
    render_text_cell,
};

/// Data needed to render a user row.
pub struct UserRowData<'a> {
    pub user: &'a User,
    pub can_delete: bool,
}

/// Renders one user. Returns the action a click asked for, if any.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, data: &UserRowData<'_>) -> Option<RowAction> {
    let user = data.user;
    let base = USER_MANAGEMENT_BASE;
    let mut action = None;

    row.col(|ui| {
        let id = user.id.map(|id| id.to_string()).unwrap_or_default();
        action = render_link_cell(ui, &id, UserRoute::View(&user.login).path(base));
    });
    row.col(|ui| render_text_cell(ui, &user.login));
    row.col(|ui| render_text_cell(ui, user.email.as_deref().unwrap_or_default()));
    row.col(|ui| {
        if render_activation_cell(ui, user.activated) {
            action = Some(RowAction::ToggleActive);
        }
    });
    row.col(|ui| render_text_cell(ui, user.lang_key.as_deref().unwrap_or_default()));
    row.col(|ui| render_authorities_cell(ui, user));
    row.col(|ui| render_text_cell(ui, &format_date(user.created_date.as_ref())));
    row.col(|ui| render_text_cell(ui, user.last_modified_by.as_deref().unwrap_or_default()));
    row.col(|ui| render_text_cell(ui, &format_date(user.last_modified_date.as_ref())));
    row.col(|ui| {
        let links = render_action_links(
            ui,
            UserRoute::View(&user.login).path(base),
            UserRoute::Edit(&user.login).path(base),
            UserRoute::Delete(&user.login).path(base),
            data.can_delete,
        );
        action = links.or(action.take());
    });

    action
}
