use std::any::{Any, type_name};

/// Copies a value into a [`CommandSnapshot`](crate::CommandSnapshot).
///
/// Values that return `None` are invisible to commands.
pub trait SnapshotClone {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// A value stored in [`StateCtx`](crate::StateCtx) and mutated by the UI thread.
pub trait State: Any + SnapshotClone {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Replaces `this` with the boxed value when the types match.
pub fn state_assign_impl<T: State>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => log::warn!("state_assign_impl: type mismatch for {}", type_name::<T>()),
    }
}
