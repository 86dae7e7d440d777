use std::any::{Any, TypeId, type_name};

use flume::Sender;

use crate::{Compute, TaskId};

/// A pending write to a compute, drained by [`StateCtx::sync_computes`](crate::StateCtx::sync_computes).
pub(crate) struct Update {
    pub(crate) target: TypeId,
    pub(crate) task: TaskId,
    pub(crate) value: Box<dyn Any + Send>,
}

/// Writer handed to a command run. Its updates carry the run's [`TaskId`]
/// and are dropped once a newer run of the same command was dispatched.
#[derive(Clone)]
pub struct LatestOnlyUpdater {
    task: TaskId,
    send: Sender<Update>,
}

impl std::fmt::Debug for LatestOnlyUpdater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LatestOnlyUpdater")
            .field("task", &self.task)
            .finish_non_exhaustive()
    }
}

impl LatestOnlyUpdater {
    pub(crate) fn new(task: TaskId, send: Sender<Update>) -> Self {
        Self { task, send }
    }

    pub fn task_id(&self) -> TaskId {
        self.task
    }

    pub fn set<T: Compute + Send>(&self, value: T) {
        let update = Update {
            target: TypeId::of::<T>(),
            task: self.task,
            value: Box::new(value),
        };
        if self.send.send(update).is_err() {
            // The store was dropped while a command was still running.
            log::debug!("update for {} discarded: store is gone", type_name::<T>());
        }
    }
}
