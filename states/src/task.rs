//! Identity and cancellation for spawned command runs.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// One run of a command: the command's type plus the generation it was
/// dispatched with. Generations start at 1 and only grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `self` was dispatched before `latest` for the same command type.
    pub fn is_older_than(&self, latest: u64) -> bool {
        self.generation < latest
    }
}

/// The running side of a [`TaskId`]. Cancelling is cooperative: the spawned
/// future is raced against [`CancellationToken::cancelled`].
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn older_generation_is_detected() {
        let id = TaskId::new(TypeId::of::<String>(), 3);

        assert!(id.is_older_than(4));
        assert!(!id.is_older_than(3));
        assert!(!id.is_older_than(1));
    }

    #[test]
    fn task_ids_differ_by_type_and_generation() {
        let a = TaskId::new(TypeId::of::<String>(), 1);

        assert_eq!(a, TaskId::new(TypeId::of::<String>(), 1));
        assert_ne!(a, TaskId::new(TypeId::of::<String>(), 2));
        assert_ne!(a, TaskId::new(TypeId::of::<u8>(), 1));
    }

    #[test]
    fn cancelling_a_handle_cancels_its_token() {
        let token = CancellationToken::new();
        let handle = TaskHandle::new(TaskId::new(TypeId::of::<String>(), 1), token.clone());
        let other = handle.clone();

        assert!(!token.is_cancelled());
        other.cancel();
        assert!(token.is_cancelled());
        assert_eq!(handle.id().generation(), 1);
    }
}
