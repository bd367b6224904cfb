use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Serialize, Deserialize};

static EVENT_COUNTER: AtomicU64 = AtomicU64::new(1); // global counter for unique event IDs

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EventOp {
    Enqueue,
    Dequeue,
    /// Tombstoned prefix dropped; `reclaimed` slots were released
    Compact { reclaimed: usize },
}

/// Something that happened to a named queue
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueueEvent<T> {
    pub global_id: u64,           // unique event ID
    pub queue: String,
    pub op: EventOp,
    pub item: Option<T>,
    pub len_after: usize,
}

impl<T> QueueEvent<T> {

    fn next_id() -> u64 {
        EVENT_COUNTER.fetch_add(1, Ordering::SeqCst)
    }

    pub fn new_enqueue(queue: String, item: T, len_after: usize) -> Self {
        Self {
            global_id: Self::next_id(),
            queue,
            op: EventOp::Enqueue,
            item: Some(item),
            len_after,
        }
    }

    pub fn new_dequeue(queue: String, item: Option<T>, len_after: usize) -> Self {
        Self {
            global_id: Self::next_id(),
            queue,
            op: EventOp::Dequeue,
            item,
            len_after,
        }
    }

    pub fn new_compact(queue: String, reclaimed: usize, len_after: usize) -> Self {
        Self {
            global_id: Self::next_id(),
            queue,
            op: EventOp::Compact { reclaimed },
            item: None,
            len_after,
        }
    }

    /// A dequeue that found the queue empty
    pub fn is_miss(&self) -> bool {
        self.op == EventOp::Dequeue && self.item.is_none()
    }
}
