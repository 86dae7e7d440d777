use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use crate::{CommandSnapshot, LatestOnlyUpdater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Manual-only async work. Commands are the only place network IO happens.
///
/// A command reads its inputs from the snapshot taken at flush time and
/// publishes results through the updater. It must not assume it runs to
/// completion: a newer dispatch of the same command type drops its future at
/// the next await point, and anything it published with an older generation
/// is discarded.
pub trait Command: Any + Send {
    fn run(&self, snap: CommandSnapshot, updater: LatestOnlyUpdater) -> CommandFuture;
}
