//! State behind the checkbox demonstration block.
//!
//! Three groups that share nothing: a lone boolean, a city multi-select and a
//! category multi-select with one permanently disabled entry.

use std::any::Any;

use roster_states::{SnapshotClone, State, state_assign_impl};

pub const CITIES: [&str; 4] = ["Chicago", "Los Angeles", "New York", "San Francisco"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub key: &'static str,
}

impl Category {
    pub fn is_disabled(&self) -> bool {
        self.key == RESEARCH.key
    }
}

const RESEARCH: Category = Category {
    name: "Research",
    key: "R",
};

pub const CATEGORIES: [Category; 4] = [
    Category {
        name: "Accounting",
        key: "A",
    },
    Category {
        name: "Marketing",
        key: "M",
    },
    Category {
        name: "Production",
        key: "P",
    },
    RESEARCH,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxDemoState {
    pub checked: bool,
    pub selected_cities: Vec<&'static str>,
    pub selected_categories: Vec<Category>,
}

impl Default for CheckboxDemoState {
    fn default() -> Self {
        Self {
            checked: false,
            selected_cities: Vec::new(),
            selected_categories: vec![CATEGORIES[1], CATEGORIES[2]],
        }
    }
}

impl CheckboxDemoState {
    /// Label of the single checkbox.
    pub fn checked_label(&self) -> &'static str {
        if self.checked { "true" } else { "false" }
    }

    pub fn set_city(&mut self, city: &'static str, checked: bool) {
        toggle(&mut self.selected_cities, city, checked, |a, b| a == b);
    }

    pub fn is_city_selected(&self, city: &str) -> bool {
        self.selected_cities.contains(&city)
    }

    /// Categories compare by key. Disabled categories never change.
    pub fn set_category(&mut self, category: Category, checked: bool) {
        if category.is_disabled() {
            log::debug!("ignoring toggle of disabled category {}", category.key);
            return;
        }
        toggle(&mut self.selected_categories, category, checked, |a, b| {
            a.key == b.key
        });
    }

    pub fn is_category_selected(&self, category: &Category) -> bool {
        self.selected_categories
            .iter()
            .any(|selected| selected.key == category.key)
    }
}

/// Appends on check; removes the first matching entry on uncheck. Checking an
/// entry that is already selected, or unchecking one that is not, does nothing.
fn toggle<T>(selection: &mut Vec<T>, item: T, checked: bool, same: impl Fn(&T, &T) -> bool) {
    let position = selection.iter().position(|existing| same(existing, &item));
    match (checked, position) {
        (true, None) => selection.push(item),
        (false, Some(index)) => {
            selection.remove(index);
        }
        _ => {}
    }
}

impl SnapshotClone for CheckboxDemoState {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for CheckboxDemoState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = CheckboxDemoState::default();

        assert_eq!(state.checked_label(), "false");
        assert!(state.selected_cities.is_empty());
        assert_eq!(
            state
                .selected_categories
                .iter()
                .map(|c| c.key)
                .collect::<Vec<_>>(),
            vec!["M", "P"]
        );
    }

    #[test]
    fn city_toggle_pair_is_identity_and_keeps_order() {
        let mut state = CheckboxDemoState::default();
        state.set_city("Chicago", true);
        state.set_city("New York", true);
        state.set_city("San Francisco", true);
        let before = state.clone();

        state.set_city("Los Angeles", true);
        state.set_city("Los Angeles", false);
        assert_eq!(state, before);

        state.set_city("New York", false);
        assert_eq!(state.selected_cities, vec!["Chicago", "San Francisco"]);
    }

    #[test]
    fn unchecking_an_unselected_city_changes_nothing() {
        let mut state = CheckboxDemoState::default();
        state.set_city("Chicago", true);
        state.set_city("New York", false);

        assert_eq!(state.selected_cities, vec!["Chicago"]);
    }

    #[test]
    fn category_toggle_compares_by_key() {
        let mut state = CheckboxDemoState::default();
        let marketing = Category {
            name: "Marketing (renamed)",
            key: "M",
        };

        assert!(state.is_category_selected(&marketing));
        state.set_category(marketing, false);
        assert!(!state.is_category_selected(&CATEGORIES[1]));
        assert_eq!(state.selected_categories, vec![CATEGORIES[2]]);

        state.set_category(CATEGORIES[0], true);
        state.set_category(CATEGORIES[0], false);
        assert_eq!(state.selected_categories, vec![CATEGORIES[2]]);
    }

    #[test]
    fn research_is_disabled() {
        let mut state = CheckboxDemoState::default();
        let research = CATEGORIES[3];

        assert!(research.is_disabled());
        state.set_category(research, true);
        assert!(!state.is_category_selected(&research));
    }
}
