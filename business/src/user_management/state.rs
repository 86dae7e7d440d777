//! Pagination controller of the users screen.
//!
//! The URL is canonical. Every change goes through
//! [`UserManagementState::transition`], which returns the effects to run
//! (a page fetch, a history push) instead of running them.
//!
//! `reconciled_search` is the last search string the controller has
//! accounted for. Its own pushes are recorded there before they reach the
//! router, so they are not mistaken for back/forward navigation on the next
//! frame.

use std::any::Any;

use roster_states::{SnapshotClone, State, state_assign_impl};

use crate::pagination::{ITEMS_PER_PAGE, PaginationEvent, PaginationState};
use crate::router::Location;
use crate::user_management::api::UsersQuery;

impl From<&PaginationState> for UsersQuery {
    fn from(pagination: &PaginationState) -> Self {
        Self {
            page: pagination.page_index(),
            size: pagination.items_per_page,
            sort: pagination.sort_spec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    /// The users screen became visible.
    Mount,
    /// The users screen was left; local pagination state is dropped.
    Unmount,
    /// Header or pager click.
    Interaction(PaginationEvent),
    /// The router's search string may have changed.
    LocationChanged,
    /// A user update with this generation was saved.
    Saved(u64),
}

/// What the caller must do after a transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    pub fetch: Option<UsersQuery>,
    /// `pathname + search` to push onto the history stack.
    pub navigate: Option<String>,
}

impl Effects {
    pub fn is_empty(&self) -> bool {
        self.fetch.is_none() && self.navigate.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserManagementState {
    pagination: PaginationState,
    items_per_page: usize,
    mounted: bool,
    reconciled_search: Option<String>,
    refreshed_generation: u64,
}

impl Default for UserManagementState {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl UserManagementState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            pagination: PaginationState::new(items_per_page),
            items_per_page,
            mounted: false,
            reconciled_search: None,
            refreshed_generation: 0,
        }
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn transition(&mut self, event: ControllerEvent, location: &Location) -> Effects {
        match event {
            ControllerEvent::Mount => self.mount(location),
            ControllerEvent::Unmount => {
                log::debug!("users screen unmounted");
                *self = Self {
                    refreshed_generation: self.refreshed_generation,
                    ..Self::new(self.items_per_page)
                };
                Effects::default()
            }
            ControllerEvent::Interaction(event) if self.mounted => {
                let next = self.pagination.reduce(event);
                if next == self.pagination {
                    return Effects::default();
                }
                log::debug!("pagination {event:?}: {}", next.to_search());
                self.pagination = next;
                Effects {
                    fetch: Some(UsersQuery::from(&self.pagination)),
                    navigate: self.write_url(location),
                }
            }
            ControllerEvent::LocationChanged if self.mounted => self.location_changed(location),
            ControllerEvent::Saved(generation) if generation > self.refreshed_generation => {
                self.refreshed_generation = generation;
                if !self.mounted {
                    return Effects::default();
                }
                log::debug!("refreshing users after save {generation}");
                Effects {
                    fetch: Some(UsersQuery::from(&self.pagination)),
                    navigate: None,
                }
            }
            ControllerEvent::Interaction(_)
            | ControllerEvent::LocationChanged
            | ControllerEvent::Saved(_) => Effects::default(),
        }
    }

    fn mount(&mut self, location: &Location) -> Effects {
        self.pagination = PaginationState::from_search(&location.search, self.items_per_page);
        self.mounted = true;
        log::debug!("users screen mounted at {}", self.pagination.to_search());
        Effects {
            fetch: Some(UsersQuery::from(&self.pagination)),
            navigate: self.write_url(location),
        }
    }

    fn location_changed(&mut self, location: &Location) -> Effects {
        if self.reconciled_search.as_deref() == Some(location.search.as_str()) {
            return Effects::default();
        }
        self.reconciled_search = Some(location.search.clone());

        let Some(next) = self.pagination.with_search(&location.search) else {
            log::debug!("ignoring non-pagination search {:?}", location.search);
            return Effects::default();
        };
        if next == self.pagination {
            return Effects::default();
        }
        log::debug!("pagination restored from url: {}", next.to_search());
        self.pagination = next;
        Effects {
            fetch: Some(UsersQuery::from(&self.pagination)),
            navigate: None,
        }
    }

    /// Marks the canonical search as reconciled and returns the href to push
    /// when the router is not already there.
    fn write_url(&mut self, location: &Location) -> Option<String> {
        let search = self.pagination.to_search();
        self.reconciled_search = Some(search.clone());
        (location.search != search).then(|| format!("{}{search}", location.pathname))
    }
}

impl SnapshotClone for UserManagementState {}

impl State for UserManagementState {
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
