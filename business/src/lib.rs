mod checkbox_demo;
mod config;
mod date_format;
pub mod http;
pub mod pagination;
pub mod query;
mod router;
mod user;
pub mod user_management;

#[cfg(test)]
mod test_utils;

use roster_states::StateCtx;

pub use checkbox_demo::{CATEGORIES, CITIES, Category, CheckboxDemoState};
pub use config::BusinessConfig;
pub use date_format::{APP_DATE_FORMAT, format_date};
pub use pagination::{ITEMS_PER_PAGE, ItemCount, PaginationEvent, PaginationState, SortField, SortOrder};
pub use router::{Location, Router};
pub use user::{Account, USER_MANAGEMENT_BASE, User, UserRoute, can_delete};
pub use user_management::{
    AccountCompute, FetchUsersCommand, UpdateUserCommand, UpdateUserCompute, UserManagementState,
    UsersPageCompute, UsersQuery,
};

/// Registers every state and compute the users screen and the checkbox demo
/// need, with the router starting at `initial_href`.
pub fn register_user_management(ctx: &mut StateCtx, config: BusinessConfig, initial_href: &str) {
    let items_per_page = config.items_per_page;
    let query = UsersQuery {
        size: items_per_page,
        ..UsersQuery::default()
    };

    ctx.add_state(config);
    ctx.add_state(Router::new(initial_href));
    ctx.add_state(UserManagementState::new(items_per_page));
    ctx.add_state(query);
    ctx.add_state(user_management::UpdateUserInput::default());
    ctx.add_state(CheckboxDemoState::default());

    ctx.record_compute(UsersPageCompute::default());
    ctx.record_compute(UpdateUserCompute::default());
    ctx.record_compute(AccountCompute::default());
}
