//! In-app location and history stack.

use std::any::Any;

use roster_states::{SnapshotClone, State, state_assign_impl};

use crate::user::USER_MANAGEMENT_BASE;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub pathname: String,
    /// Either empty or starting with `?`.
    pub search: String,
}

impl Location {
    /// Splits `"/path?query"`. A `#fragment` is discarded.
    pub fn parse(href: &str) -> Self {
        let href = href.split_once('#').map_or(href, |(before, _)| before);
        match href.split_once('?') {
            Some((pathname, query)) if !query.is_empty() => Self {
                pathname: pathname.to_owned(),
                search: format!("?{query}"),
            },
            Some((pathname, _)) => Self {
                pathname: pathname.to_owned(),
                search: String::new(),
            },
            None => Self {
                pathname: href.to_owned(),
                search: String::new(),
            },
        }
    }

    pub fn href(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}

/// Browser-style history: a list of entries and a cursor into it.
///
/// `push` drops every entry after the cursor, like a browser does when you
/// navigate after going back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    entries: Vec<Location>,
    index: usize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(USER_MANAGEMENT_BASE)
    }
}

impl Router {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![Location::parse(initial)],
            index: 0,
        }
    }

    pub fn location(&self) -> &Location {
        // `entries` is never empty and `index` always points into it.
        &self.entries[self.index]
    }

    pub fn push(&mut self, href: &str) {
        let location = Location::parse(href);
        if location == *self.location() {
            return;
        }
        log::info!("navigate to {}", location.href());
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.index -= 1;
        log::info!("back to {}", self.location().href());
        true
    }

    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.index += 1;
        log::info!("forward to {}", self.location().href());
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotClone for Router {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for Router {
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
