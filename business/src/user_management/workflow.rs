//! Store-level entry points for the users screen.
//!
//! UI code calls these instead of touching [`UserManagementState`] or the
//! router directly:
//! - once per frame: [`sync_location`] then [`advance_updates`]
//! - on clicks: [`sort_users`], [`paginate_users`], [`toggle_active`]

use roster_states::StateCtx;

use super::account_compute::FetchAccountCommand;
use super::api::UsersQuery;
use super::list_users_compute::FetchUsersCommand;
use super::state::{ControllerEvent, Effects, UserManagementState};
use super::update_user_compute::{
    UpdateUserCommand, UpdateUserCompute, UpdateUserInput, UpdateUserState,
};
use crate::pagination::{PaginationEvent, SortField};
use crate::router::Router;
use crate::user::{USER_MANAGEMENT_BASE, User};

fn dispatch(ctx: &mut StateCtx, event: ControllerEvent) {
    let location = ctx.state::<Router>().location().clone();
    let effects = ctx
        .state_mut::<UserManagementState>()
        .transition(event, &location);
    apply(ctx, effects);
}

fn apply(ctx: &mut StateCtx, effects: Effects) {
    let Effects { fetch, navigate } = effects;
    if let Some(href) = navigate {
        ctx.update::<Router>(|router| router.push(&href));
    }
    if let Some(query) = fetch {
        ctx.update::<UsersQuery>(|current| *current = query);
        ctx.enqueue_command::<FetchUsersCommand>();
    }
}

/// Mounts, unmounts or reconciles the users screen with the router.
pub fn sync_location(ctx: &mut StateCtx) {
    let on_users_screen = ctx.state::<Router>().location().pathname == USER_MANAGEMENT_BASE;
    let mounted = ctx.state::<UserManagementState>().is_mounted();

    let event = match (on_users_screen, mounted) {
        (true, false) => {
            ctx.enqueue_command::<FetchAccountCommand>();
            ControllerEvent::Mount
        }
        (true, true) => ControllerEvent::LocationChanged,
        (false, true) => ControllerEvent::Unmount,
        (false, false) => return,
    };
    dispatch(ctx, event);
}

/// Column header click.
pub fn sort_users(ctx: &mut StateCtx, field: SortField) {
    dispatch(ctx, ControllerEvent::Interaction(PaginationEvent::Sort(field)));
}

/// Pager click. `page` is 1-based.
pub fn paginate_users(ctx: &mut StateCtx, page: u32) {
    dispatch(ctx, ControllerEvent::Interaction(PaginationEvent::Page(page)));
}

/// Queues `user` with `activated` inverted and sends it as soon as no other
/// update is running. The table keeps showing the old value until the page
/// is refetched.
pub fn toggle_active(ctx: &mut StateCtx, user: &User) {
    let toggled = user.with_activation_toggled();
    log::debug!("queueing activation toggle for {}", toggled.login);
    ctx.update::<UpdateUserInput>(|input| {
        if !input.is_busy() && input.queued.is_empty() {
            input.failures.clear();
        }
        input.queued.push_back(toggled);
    });
    dispatch_next_update(ctx);
}

/// Records the outcome of the running update, refetches the current page
/// once it saved, then sends the next queued toggle.
pub fn advance_updates(ctx: &mut StateCtx) {
    if let Some(generation) = ctx.state::<UpdateUserInput>().dispatched {
        let outcome = ctx.cached::<UpdateUserCompute>().cloned().unwrap_or_default();
        if outcome.finished_generation() != Some(generation) {
            return;
        }

        let failure = match outcome.state {
            UpdateUserState::Error { login, message, .. } => Some(format!("{login}: {message}")),
            _ => None,
        };
        let saved = failure.is_none();
        ctx.update::<UpdateUserInput>(|input| {
            input.dispatched = None;
            if let Some(message) = failure {
                input.failures.push(message);
            }
        });
        if saved {
            dispatch(ctx, ControllerEvent::Saved(generation));
        }
    }
    dispatch_next_update(ctx);
}

fn dispatch_next_update(ctx: &mut StateCtx) {
    if ctx.state::<UpdateUserInput>().is_busy() {
        return;
    }
    // Nothing else enqueues this command, so the next flush hands out this one.
    let generation = ctx.generation_of::<UpdateUserCommand>() + 1;
    let mut dispatched = false;
    ctx.update::<UpdateUserInput>(|input| {
        if let Some(user) = input.queued.pop_front() {
            log::info!("dispatching update for {} as generation {generation}", user.login);
            input.user = Some(user);
            input.dispatched = Some(generation);
            dispatched = true;
        }
    });
    if dispatched {
        ctx.enqueue_command::<UpdateUserCommand>();
    }
}
