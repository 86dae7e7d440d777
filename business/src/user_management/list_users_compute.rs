//! "List users" compute plus the command that fills it.
//!
//! The UI never calls the API directly: it writes a [`UsersQuery`] into the
//! store, enqueues [`FetchUsersCommand`] and reads [`UsersPageCompute`] back
//! with `ctx.cached::<UsersPageCompute>()`.

use std::any::Any;

use roster_states::{
    Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, SnapshotClone, State,
    assign_impl, state_assign_impl,
};

use crate::BusinessConfig;
use crate::pagination::ITEMS_PER_PAGE;
use crate::user::User;
use crate::user_management::api::{self, UsersQuery};

impl Default for UsersQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: ITEMS_PER_PAGE,
            sort: "id,asc".to_owned(),
        }
    }
}

impl SnapshotClone for UsersQuery {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for UsersQuery {
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

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UsersPageStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// The users page the table renders.
///
/// While a new page loads, `users` and `total_items` keep the previous page
/// so the table does not flash empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersPageCompute {
    pub users: Vec<User>,
    pub total_items: u64,
    pub status: UsersPageStatus,
    /// Query the current `status` refers to.
    pub query: Option<UsersQuery>,
}

impl UsersPageCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, UsersPageStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            UsersPageStatus::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Whether the item count and pager are shown.
    pub fn has_items(&self) -> bool {
        self.total_items > 0 && !self.users.is_empty()
    }
}

impl SnapshotClone for UsersPageCompute {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for UsersPageCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Loads the page described by the [`UsersQuery`] state.
#[derive(Debug, Default)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(&self, snap: CommandSnapshot, updater: LatestOnlyUpdater) -> CommandFuture {
        let config = snap.state::<BusinessConfig>().clone();
        let query = snap.state::<UsersQuery>().clone();
        let previous = snap
            .try_compute::<UsersPageCompute>()
            .cloned()
            .unwrap_or_default();

        Box::pin(async move {
            log::info!(
                "fetching users page={} size={} sort={}",
                query.page,
                query.size,
                query.sort
            );
            updater.set(UsersPageCompute {
                status: UsersPageStatus::Loading,
                query: Some(query.clone()),
                ..previous.clone()
            });

            match api::list_users(&config, &query).await {
                Ok(page) => {
                    log::debug!(
                        "loaded {} users of {} for page {}",
                        page.users.len(),
                        page.total_items,
                        query.page
                    );
                    updater.set(UsersPageCompute {
                        users: page.users,
                        total_items: page.total_items,
                        status: UsersPageStatus::Loaded,
                        query: Some(query),
                    });
                }
                Err(err) => {
                    log::warn!("fetching users failed: {err}");
                    updater.set(UsersPageCompute {
                        status: UsersPageStatus::Error(err.to_string()),
                        query: Some(query),
                        ..previous
                    });
                }
            }
        })
    }
}
