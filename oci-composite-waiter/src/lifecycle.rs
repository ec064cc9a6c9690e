//! Capability of exposing a lifecycle state to the waiter.

/// A resource that reports a lifecycle state such as `PROVISIONING` or
/// `AVAILABLE`.
///
/// `None` means the value carries no state at all (for example the empty
/// payload of a delete call). State predicates treat such values as not
/// matching rather than failing.
pub trait HasLifecycleState {
    fn lifecycle_state(&self) -> Option<&str>;
}

impl HasLifecycleState for () {
    fn lifecycle_state(&self) -> Option<&str> {
        None
    }
}

impl<T: HasLifecycleState> HasLifecycleState for Option<T> {
    fn lifecycle_state(&self) -> Option<&str> {
        self.as_ref().and_then(HasLifecycleState::lifecycle_state)
    }
}

impl<T: HasLifecycleState + ?Sized> HasLifecycleState for Box<T> {
    fn lifecycle_state(&self) -> Option<&str> {
        (**self).lifecycle_state()
    }
}
