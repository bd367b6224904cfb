pub use crate::core::{
    queue::{FifoQueue, SafeQueue},
    config::CompactionPolicy,
    dispatch::{DelegateHandle, MulticastDelegate},
    error::CoreError,
    log::{LogEntry, Logger, SafeLogger, Outcome},
    event::{QueueEvent, EventOp}
};
use std::cmp::Ordering;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Receives every event emitted by a [`QueueSystem`]
pub trait QueueListener<T>: Send + Sync {
    fn on_event(&self, event: &QueueEvent<T>);
}

type SharedListener<T> = Arc<dyn QueueListener<T>>;

fn lock<V: ?Sized>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Named queue bundled with its operation log and listeners
pub struct QueueSystem<T> {
    name: String,
    queue: SafeQueue<T>,
    logger: SafeLogger<T>,
    listeners: Mutex<MulticastDelegate<dyn QueueListener<T>>>,
}

impl<T: Clone + Send + 'static> QueueSystem<T> {
    /// Create a new QueueSystem with the default compaction policy
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_policy(name, CompactionPolicy::default())
    }

    pub fn with_policy(name: impl Into<String>, policy: CompactionPolicy) -> Self {
        let name = name.into();
        Self {
            queue: Arc::new(Mutex::new(FifoQueue::with_policy(policy))),
            logger: Arc::new(Mutex::new(Logger::new(name.clone()))),
            listeners: Mutex::new(MulticastDelegate::new()),
            name,
        }
    }

    /// Enqueue with logging + broadcast
    pub fn enqueue(&self, item: T) -> QueueEvent<T> {
        let event = {
            // Log under the queue guard so log order is queue order
            let mut queue = self.queue_guard();
            queue.enqueue(item.clone());
            let len_after = queue.len();
            let event = QueueEvent::new_enqueue(self.name.clone(), item.clone(), len_after);
            lock(&self.logger).log(EventOp::Enqueue, Some(item), Outcome::Committed, len_after, Some(event.global_id));
            event
        };
        self.broadcast(&event);
        event
    }

    /// Dequeue an item; an empty queue yields `None` and a miss event
    pub fn dequeue(&self) -> (Option<T>, QueueEvent<T>) {
        let (item, event, compact) = {
            let mut queue = self.queue_guard();
            let storage_before = queue.storage_len();
            let compactions_before = queue.compactions();
            let item = queue.dequeue();
            let len_after = queue.len();

            let mut logger = lock(&self.logger);
            let event = QueueEvent::new_dequeue(self.name.clone(), item.clone(), len_after);
            let outcome = if item.is_some() { Outcome::Delivered } else { Outcome::Empty };
            logger.log(EventOp::Dequeue, item.clone(), outcome, len_after, Some(event.global_id));

            let compact = (queue.compactions() != compactions_before).then(|| {
                let reclaimed = storage_before - queue.storage_len();
                let compact = QueueEvent::new_compact(self.name.clone(), reclaimed, len_after);
                logger.log(compact.op.clone(), None, Outcome::Compacted, len_after, Some(compact.global_id));
                compact
            });
            (item, event, compact)
        };

        self.broadcast(&event);
        if let Some(compact) = compact {
            self.broadcast(&compact);
        }
        (item, event)
    }

    /// Register a listener for every future event
    pub fn subscribe(&self, listener: SharedListener<T>) -> DelegateHandle {
        lock(&self.listeners).add_delegate(listener)
    }

    pub fn unsubscribe(&self, handle: DelegateHandle) -> Result<(), CoreError> {
        lock(&self.listeners).remove_delegate(handle)?;
        Ok(())
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }

    /// Listeners run outside every lock so they may call back into the system
    fn broadcast(&self, event: &QueueEvent<T>) {
        let listeners = lock(&self.listeners).delegates();
        for listener in listeners {
            listener.on_event(event);
        }
    }

    fn queue_guard(&self) -> MutexGuard<'_, FifoQueue<T>> {
        lock(&self.queue)
    }

    /// Get current queue state: (length, is_empty)
    pub fn queue_state(&self) -> (usize, bool) {
        let queue = self.queue_guard();
        (queue.len(), queue.is_empty())
    }

    /// Live items in FIFO order
    pub fn snapshot(&self) -> Vec<T> {
        self.queue_guard().iter().cloned().collect()
    }

    /// Live items stable-sorted by `compare`, queue order untouched
    pub fn sorted_by<F>(&self, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.queue_guard().sorted_by(compare)
    }

    /// Expose logs
    pub fn logs(&self) -> Vec<LogEntry<T>> {
        lock(&self.logger).entries().to_vec()
    }

    /// Shared handle to the underlying queue
    pub fn queue(&self) -> SafeQueue<T> {
        Arc::clone(&self.queue)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
