use std::any::{Any, type_name};

use crate::SnapshotClone;

/// A cache that only commands write to, through a
/// [`LatestOnlyUpdater`](crate::LatestOnlyUpdater).
///
/// The UI reads it with [`StateCtx::cached`](crate::StateCtx::cached).
pub trait Compute: Any + SnapshotClone {
    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Replaces `this` with the boxed value when the types match.
pub fn assign_impl<T: Compute>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => log::warn!("assign_impl: type mismatch for {}", type_name::<T>()),
    }
}
