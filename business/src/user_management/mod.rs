//! Users screen: admin API client, computes, commands and the pagination
//! controller.
//!
//! UI code reads through `ctx.cached::<T>()` / `ctx.state::<T>()` and changes
//! things only through the functions in [`workflow`].

pub mod account_compute;
pub mod api;
pub mod list_users_compute;
pub mod state;
pub mod update_user_compute;
pub mod workflow;

pub use account_compute::{AccountCompute, AccountStatus, FetchAccountCommand};
pub use api::{ApiError, ApiResult, UsersPage, UsersQuery};
pub use list_users_compute::{FetchUsersCommand, UsersPageCompute, UsersPageStatus};
pub use state::{ControllerEvent, Effects, UserManagementState};
pub use update_user_compute::{
    UpdateUserCommand, UpdateUserCompute, UpdateUserInput, UpdateUserState,
};
pub use workflow::{
    advance_updates, paginate_users, sort_users, sync_location, toggle_active,
};
