//! The signed-in account, used to keep admins from deleting themselves.

use std::any::Any;

use roster_states::{
    Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, SnapshotClone, assign_impl,
};

use crate::BusinessConfig;
use crate::user::Account;
use crate::user_management::api;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AccountStatus {
    #[default]
    Unknown,
    Loaded(Account),
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountCompute {
    pub status: AccountStatus,
}

impl AccountCompute {
    pub fn login(&self) -> Option<&str> {
        match &self.status {
            AccountStatus::Loaded(account) => Some(account.login.as_str()),
            _ => None,
        }
    }
}

impl SnapshotClone for AccountCompute {}

impl Compute for AccountCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

#[derive(Debug, Default)]
pub struct FetchAccountCommand;

impl Command for FetchAccountCommand {
    fn run(&self, snap: CommandSnapshot, updater: LatestOnlyUpdater) -> CommandFuture {
        let config = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            let status = match api::get_account(&config).await {
                Ok(account) => {
                    log::info!("signed in as {}", account.login);
                    AccountStatus::Loaded(account)
                }
                Err(err) => {
                    log::warn!("fetching account failed: {err}");
                    AccountStatus::Error(err.to_string())
                }
            };
            updater.set(AccountCompute { status });
        })
    }
}
