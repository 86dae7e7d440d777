//! The users screen: heading, table, item count and pager.

use egui::{Align, Layout, Response, Ui};
use egui_extras::TableBuilder;
use roster_business::user_management::{
    AccountCompute, UpdateUserInput, UserManagementState, UsersPageCompute, paginate_users,
    sort_users, toggle_active,
};
use roster_business::{Router, SortField, USER_MANAGEMENT_BASE, User, UserRoute, can_delete};
use roster_states::StateCtx;

use super::pagination::render_pagination;
use super::table::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use super::table::header::render_table_header;
use super::table::row::{RowAction, UserRowData, render_user_row};
use crate::utils::colors::COLOR_RED;

enum PanelAction {
    Sort(SortField),
    Page(u32),
    Toggle(User),
    Navigate(String),
}

pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let pagination = state_ctx
        .state::<UserManagementState>()
        .pagination()
        .clone();
    let page = state_ctx
        .cached::<UsersPageCompute>()
        .cloned()
        .unwrap_or_default();
    let account_login = state_ctx
        .cached::<AccountCompute>()
        .and_then(AccountCompute::login)
        .map(str::to_owned);
    let updates = state_ctx.state::<UpdateUserInput>();
    let updating = updates.is_busy();
    let update_failures = updates.failures.clone();

    let mut action = None;

    let response = ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.heading("Users");
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Create a new user").clicked() {
                    action = Some(PanelAction::Navigate(
                        UserRoute::New.path(USER_MANAGEMENT_BASE),
                    ));
                }
                if page.is_loading() || updating {
                    ui.spinner();
                }
            });
        });
        ui.add_space(8.0);

        let mut builder = TableBuilder::new(ui)
            .id_salt("users_table")
            .striped(true)
            .resizable(false)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center));
        for column in table_columns() {
            builder = builder.column(column);
        }
        builder
            .header(HEADER_HEIGHT, |mut header| {
                if let Some(field) = render_table_header(&mut header, &pagination) {
                    action = Some(PanelAction::Sort(field));
                }
            })
            .body(|mut body| {
                for user in &page.users {
                    body.row(ROW_HEIGHT, |mut row| {
                        let data = UserRowData {
                            user,
                            can_delete: can_delete(account_login.as_deref(), user),
                        };
                        match render_user_row(&mut row, &data) {
                            Some(RowAction::ToggleActive) => {
                                action = Some(PanelAction::Toggle(user.clone()));
                            }
                            Some(RowAction::Navigate(href)) => {
                                action = Some(PanelAction::Navigate(href));
                            }
                            None => {}
                        }
                    });
                }
            });

        if let Some(message) = page.error_message() {
            ui.colored_label(COLOR_RED, format!("Error: {message}"));
        }
        for message in &update_failures {
            ui.colored_label(COLOR_RED, format!("Update failed: {message}"));
        }

        if page.has_items() {
            ui.add_space(8.0);
            if let Some(target) = render_pagination(ui, &pagination, page.total_items) {
                action = Some(PanelAction::Page(target));
            }
        }
    });

    match action {
        Some(PanelAction::Sort(field)) => sort_users(state_ctx, field),
        Some(PanelAction::Page(target)) => paginate_users(state_ctx, target),
        Some(PanelAction::Toggle(user)) => toggle_active(state_ctx, &user),
        Some(PanelAction::Navigate(href)) => {
            state_ctx.update::<Router>(|router| router.push(&href));
        }
        None => {}
    }

    response.response
}
