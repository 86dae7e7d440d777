//! Checkbox demonstration block.

use egui::{Checkbox, Ui};
use roster_business::{CATEGORIES, CITIES, Category, CheckboxDemoState};
use roster_states::StateCtx;

enum DemoChange {
    Checked(bool),
    City(&'static str, bool),
    Category(Category, bool),
}

pub fn checkbox_demo(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let demo = state_ctx.state::<CheckboxDemoState>().clone();
    let mut changes = Vec::new();

    ui.heading("Checkbox");

    ui.label("Basic");
    let mut checked = demo.checked;
    if ui.checkbox(&mut checked, demo.checked_label()).changed() {
        changes.push(DemoChange::Checked(checked));
    }
    ui.add_space(8.0);

    ui.label("Multiple");
    ui.horizontal_wrapped(|ui| {
        for city in CITIES {
            let mut selected = demo.is_city_selected(city);
            if ui.checkbox(&mut selected, city).changed() {
                changes.push(DemoChange::City(city, selected));
            }
        }
    });
    ui.label(format!("Selected cities: {}", demo.selected_cities.join(", ")));
    ui.add_space(8.0);

    ui.label("Dynamic values, preselection, value binding and disabled option");
    ui.horizontal_wrapped(|ui| {
        for category in CATEGORIES {
            let mut selected = demo.is_category_selected(&category);
            let checkbox = Checkbox::new(&mut selected, category.name);
            if ui.add_enabled(!category.is_disabled(), checkbox).changed() {
                changes.push(DemoChange::Category(category, selected));
            }
        }
    });
    let keys: Vec<&str> = demo.selected_categories.iter().map(|c| c.key).collect();
    ui.label(format!("Selected categories: {}", keys.join(", ")));

    if changes.is_empty() {
        return;
    }
    state_ctx.update::<CheckboxDemoState>(|state| {
        for change in changes {
            match change {
                DemoChange::Checked(checked) => state.checked = checked,
                DemoChange::City(city, checked) => state.set_city(city, checked),
                DemoChange::Category(category, checked) => state.set_category(category, checked),
            }
        }
    });
}
