//! Item count line and pager under the users table.

use egui::{Button, Ui};
use roster_business::pagination::{MAX_PAGE_BUTTONS, page_count, page_window};
use roster_business::{ItemCount, PaginationState};

/// Renders "Showing a - b of n items." and the pager. Returns the page a
/// button asked for.
pub fn render_pagination(
    ui: &mut Ui,
    pagination: &PaginationState,
    total_items: u64,
) -> Option<u32> {
    let active = pagination.active_page;
    let total_pages = page_count(total_items, pagination.items_per_page);

    ui.vertical_centered(|ui| {
        ui.label(ItemCount::new(active, pagination.items_per_page, total_items).to_string());
    });

    ui.horizontal(|ui| {
        let mut target = None;
        let has_previous = active > 1;
        let has_next = active < total_pages;

        if ui
            .add_enabled(has_previous, Button::new("«"))
            .on_hover_text("First page")
            .clicked()
        {
            target = Some(1);
        }
        if ui
            .add_enabled(has_previous, Button::new("‹"))
            .on_hover_text("Previous page")
            .clicked()
        {
            target = Some(active - 1);
        }
        for page in page_window(active, total_pages, MAX_PAGE_BUTTONS) {
            if ui.selectable_label(page == active, page.to_string()).clicked() {
                target = Some(page);
            }
        }
        if ui
            .add_enabled(has_next, Button::new("›"))
            .on_hover_text("Next page")
            .clicked()
        {
            target = Some(active + 1);
        }
        if ui
            .add_enabled(has_next, Button::new("»"))
            .on_hover_text("Last page")
            .clicked()
        {
            target = Some(total_pages);
        }
        target
    })
    .inner
}
