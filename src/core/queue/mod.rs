use std::cmp::Ordering;
use std::sync::{Arc, Mutex};
use crate::core::config::CompactionPolicy;

/// FIFO queue backed by a growable array with a lazily advancing head.
///
/// Dequeued slots are tombstoned (`None`) instead of shifting the array, and
/// the tombstoned prefix is dropped in one go when the [`CompactionPolicy`]
/// says so. Enqueue and dequeue are amortized O(1).
#[derive(Clone, Debug)]
pub struct FifoQueue<T> {
    storage: Vec<Option<T>>,
    head: usize,
    policy: CompactionPolicy,
    compactions: u64,
}

impl<T> FifoQueue<T> {
    /// Create a new, empty queue with the default compaction policy
    pub fn new() -> Self {
        Self::with_policy(CompactionPolicy::default())
    }

    pub fn with_policy(policy: CompactionPolicy) -> Self {
        Self {
            storage: Vec::new(),
            head: 0,
            policy,
            compactions: 0,
        }
    }

    /// Enqueue an item at the tail
    pub fn enqueue(&mut self, item: T) {
        let len_before = self.len();
        self.storage.push(Some(item));
        // -- post op assertion
        assert_eq!(self.len(), len_before + 1, "Queue length should grow by 1");
    }

    /// Dequeue the item at the head, `None` when the queue is empty
    pub fn dequeue(&mut self) -> Option<T> {
        let item = self.storage.get_mut(self.head)?.take()?;
        self.head += 1;
        self.compact_if_due();
        Some(item)
    }

    /// Borrow the item at the head without removing it
    pub fn peek(&self) -> Option<&T> {
        self.storage.get(self.head).and_then(Option::as_ref)
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        self.storage.len() - self.head
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Physical slots currently held, tombstones included
    pub fn storage_len(&self) -> usize {
        self.storage.len()
    }

    /// How many times the tombstoned prefix has been dropped
    pub fn compactions(&self) -> u64 {
        self.compactions
    }

    pub fn policy(&self) -> &CompactionPolicy {
        &self.policy
    }

    /// Iterate the live items in FIFO order without consuming them
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.storage[self.head..].iter(),
        }
    }

    /// Clone the live items and stable-sort them with `compare`.
    /// The queue itself keeps its FIFO order.
    pub fn sorted_by<F>(&self, compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items: Vec<T> = self.iter().cloned().collect();
        items.sort_by(compare);
        items
    }

    fn compact_if_due(&mut self) {
        if !self.policy.should_compact(self.head, self.storage.len()) {
            return;
        }
        let len_before = self.len();
        self.storage.drain(..self.head);
        self.head = 0;
        self.compactions += 1;
        // -- post op assertion: compaction never changes the live count
        assert_eq!(self.len(), len_before, "Compaction must not drop live items");
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for FifoQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for FifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Borrowing iterator over the live items of a [`FifoQueue`]
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    // Every slot from head onwards is live, so slots and items line up 1:1
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator, drains the queue in FIFO order
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: std::iter::Flatten<std::vec::IntoIter<Option<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
}

impl<'a, T> IntoIterator for &'a FifoQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for FifoQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.storage.into_iter().flatten(),
        }
    }
}

/// Thread-safe wrapper around the queue
pub type SafeQueue<T> = Arc<Mutex<FifoQueue<T>>>;
