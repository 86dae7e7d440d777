//! "Update user" compute plus command.
//!
//! Used by the activation toggle. Toggles are queued in [`UpdateUserInput`]
//! and sent one at a time: a new [`UpdateUserCommand`] is only dispatched
//! once the previous one has finished, so no update is ever cancelled by a
//! later one.

use std::any::Any;
use std::collections::VecDeque;

use roster_states::{
    Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, SnapshotClone, State,
    assign_impl, state_assign_impl,
};

use crate::BusinessConfig;
use crate::user::User;
use crate::user_management::api;

/// Input and bookkeeping of the update queue, owned by the UI thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserInput {
    /// Record the next [`UpdateUserCommand`] sends.
    pub user: Option<User>,
    /// Toggled records waiting for the running update to finish.
    pub queued: VecDeque<User>,
    /// Generation of the dispatched update that has not reported back yet.
    pub dispatched: Option<u64>,
    /// One message per failed update, kept until the next toggle that starts
    /// from an empty queue.
    pub failures: Vec<String>,
}

impl UpdateUserInput {
    pub fn is_busy(&self) -> bool {
        self.dispatched.is_some()
    }
}

impl SnapshotClone for UpdateUserInput {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for UpdateUserInput {
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

/// Every variant but `Idle` carries the generation of the run it describes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UpdateUserState {
    #[default]
    Idle,
    InFlight {
        login: String,
        generation: u64,
    },
    Saved {
        login: String,
        generation: u64,
    },
    Error {
        login: String,
        message: String,
        generation: u64,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserCompute {
    pub state: UpdateUserState,
}

impl UpdateUserCompute {
    /// Generation of the run that reported a final outcome, saved or failed.
    pub fn finished_generation(&self) -> Option<u64> {
        match self.state {
            UpdateUserState::Saved { generation, .. } | UpdateUserState::Error { generation, .. } => {
                Some(generation)
            }
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            UpdateUserState::Error { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

impl SnapshotClone for UpdateUserCompute {}

impl Compute for UpdateUserCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// PUTs [`UpdateUserInput::user`].
#[derive(Debug, Default)]
pub struct UpdateUserCommand;

impl Command for UpdateUserCommand {
    fn run(&self, snap: CommandSnapshot, updater: LatestOnlyUpdater) -> CommandFuture {
        let config = snap.state::<BusinessConfig>().clone();
        let user = snap.state::<UpdateUserInput>().user.clone();
        let generation = updater.task_id().generation();

        Box::pin(async move {
            let Some(user) = user else {
                log::warn!("UpdateUserCommand dispatched without a user");
                updater.set(UpdateUserCompute {
                    state: UpdateUserState::Error {
                        login: String::new(),
                        message: "no user to update".to_owned(),
                        generation,
                    },
                });
                return;
            };
            let login = user.login.clone();

            log::info!("updating user {login} (activated={})", user.activated);
            updater.set(UpdateUserCompute {
                state: UpdateUserState::InFlight {
                    login: login.clone(),
                    generation,
                },
            });

            let state = match api::update_user(&config, &user).await {
                Ok(saved) => UpdateUserState::Saved {
                    login: saved.login,
                    generation,
                },
                Err(err) => {
                    log::warn!("updating user {login} failed: {err}");
                    UpdateUserState::Error {
                        login,
                        message: err.to_string(),
                        generation,
                    }
                }
            };
            updater.set(UpdateUserCompute { state });
        })
    }
}
