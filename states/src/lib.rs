//! Typed state store used by the roster console.
//!
//! The store holds three kinds of entries:
//! - [`State`]: plain values owned by the UI thread, mutated in place.
//! - [`Compute`]: caches written only by async commands, through a
//!   [`LatestOnlyUpdater`].
//! - [`Command`]: manual-only async work, queued with [`StateCtx::enqueue_command`]
//!   and spawned by [`StateCtx::flush_commands`].
//!
//! Every command type carries a generation. Dispatching a command cancels the
//! previous run of the same type, and updates tagged with an older generation
//! are dropped by [`StateCtx::sync_computes`].

mod command;
mod compute;
mod ctx;
mod error;
mod snapshot;
mod state;
mod task;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, assign_impl};
pub use ctx::StateCtx;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::{SnapshotClone, State, state_assign_impl};
pub use task::{TaskHandle, TaskId};
pub use updater::LatestOnlyUpdater;
