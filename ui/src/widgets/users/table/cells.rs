//! Cell content for the users table.

use egui::{Button, Frame, Link, Margin, RichText, Ui};
use roster_business::User;

use crate::utils::colors::{COLOR_BADGE, COLOR_GREEN, COLOR_ON_FILL, COLOR_RED};

/// What a click inside a row asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    ToggleActive,
    Navigate(String),
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Green "Activated" or red "Deactivated"; clicking toggles.
#[inline]
pub fn render_activation_cell(ui: &mut Ui, activated: bool) -> bool {
    let (label, fill) = if activated {
        ("Activated", COLOR_GREEN)
    } else {
        ("Deactivated", COLOR_RED)
    };
    ui.add(Button::new(RichText::new(label).color(COLOR_ON_FILL)).fill(fill))
        .clicked()
}

#[inline]
pub fn render_authorities_cell(ui: &mut Ui, user: &User) {
    ui.horizontal_wrapped(|ui| {
        for authority in &user.authorities {
            Frame::NONE
                .fill(COLOR_BADGE)
                .corner_radius(4)
                .inner_margin(Margin::symmetric(4, 1))
                .show(ui, |ui| {
                    ui.label(RichText::new(authority).small().color(COLOR_ON_FILL));
                });
        }
    });
}

/// Link that navigates to `href` when clicked.
#[inline]
pub fn render_link_cell(ui: &mut Ui, text: &str, href: String) -> Option<RowAction> {
    ui.link(text).clicked().then_some(RowAction::Navigate(href))
}

/// View, Edit and Delete links. Delete is greyed out when `can_delete` is false.
#[inline]
pub fn render_action_links(
    ui: &mut Ui,
    view: String,
    edit: String,
    delete: String,
    can_delete: bool,
) -> Option<RowAction> {
    ui.horizontal(|ui| {
        let mut action = None;
        if ui.link("View").clicked() {
            action = Some(RowAction::Navigate(view));
        }
        if ui.link("Edit").clicked() {
            action = Some(RowAction::Navigate(edit));
        }
        let delete_link = ui.add_enabled(can_delete, Link::new("Delete"));
        if delete_link.clicked() {
            action = Some(RowAction::Navigate(delete));
        }
        action
    })
    .inner
}
