//! Header row of the users table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use roster_business::{PaginationState, SortField, SortOrder};

#[derive(Debug, Clone, Copy)]
enum HeaderCell {
    Sortable(&'static str, SortField),
    Plain(&'static str),
}

const HEADERS: [HeaderCell; 10] = [
    HeaderCell::Sortable("ID", SortField::Id),
    HeaderCell::Sortable("Login", SortField::Login),
    HeaderCell::Sortable("Email", SortField::Email),
    HeaderCell::Plain(""),
    HeaderCell::Sortable("Lang Key", SortField::LangKey),
    HeaderCell::Plain("Profiles"),
    HeaderCell::Sortable("Created Date", SortField::CreatedDate),
    HeaderCell::Sortable("Last Modified By", SortField::LastModifiedBy),
    HeaderCell::Sortable("Last Modified Date", SortField::LastModifiedDate),
    HeaderCell::Plain(""),
];

/// Renders the header and returns the column whose label was clicked.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    pagination: &PaginationState,
) -> Option<SortField> {
    let mut clicked = None;
    for cell in HEADERS {
        header.col(|ui| match cell {
            HeaderCell::Sortable(label, field) => {
                if render_sortable_cell(ui, label, field, pagination) {
                    clicked = Some(field);
                }
            }
            HeaderCell::Plain(label) => {
                ui.strong(label);
            }
        });
    }
    clicked
}

fn render_sortable_cell(
    ui: &mut Ui,
    label: &str,
    field: SortField,
    pagination: &PaginationState,
) -> bool {
    let text = if pagination.sort == field {
        let arrow = match pagination.order {
            SortOrder::Asc => "⬆",
            SortOrder::Desc => "⬇",
        };
        format!("{label} {arrow}")
    } else {
        label.to_owned()
    };

    ui.add(Button::new(RichText::new(text).strong()).frame(false))
        .on_hover_text(format!("Sort by {field}"))
        .clicked()
}
