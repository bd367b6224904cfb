use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use crate::core::error::CoreError;

/// Identifies one registration in a [`MulticastDelegate`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DelegateHandle(u64);

impl DelegateHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl Display for DelegateHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One-to-many delegate registry.
///
/// Delegates stay registered until [`remove_delegate`](Self::remove_delegate)
/// is called with their handle. Dropping the caller's own `Arc` does not
/// unregister anything, the registry keeps its clone alive.
pub struct MulticastDelegate<D: ?Sized> {
    delegates: BTreeMap<DelegateHandle, Arc<D>>,
    next_id: u64,
}

impl<D: ?Sized> MulticastDelegate<D> {
    pub fn new() -> Self {
        Self {
            delegates: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Register a delegate. Handles increase monotonically and are never reused.
    pub fn add_delegate(&mut self, delegate: Arc<D>) -> DelegateHandle {
        let handle = DelegateHandle(self.next_id);
        self.next_id += 1;
        self.delegates.insert(handle, delegate);
        handle
    }

    /// Unregister a delegate and hand it back
    pub fn remove_delegate(&mut self, handle: DelegateHandle) -> Result<Arc<D>, CoreError> {
        self.delegates
            .remove(&handle)
            .ok_or(CoreError::UnknownHandle(handle.id()))
    }

    /// Call `f` on every delegate, in registration order
    pub fn invoke_delegates<F: FnMut(&D)>(&self, mut f: F) {
        for delegate in self.delegates.values() {
            f(&**delegate);
        }
    }

    /// Clone out the current delegates, in registration order
    pub fn delegates(&self) -> Vec<Arc<D>> {
        self.delegates.values().cloned().collect()
    }

    pub fn contains(&self, handle: DelegateHandle) -> bool {
        self.delegates.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

impl<D: ?Sized> Default for MulticastDelegate<D> {
    fn default() -> Self {
        Self::new()
    }
}
