use std::fmt::{Display, Formatter};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};
use crate::core::error::CoreError;
use crate::core::event::EventOp;
use serde::{Serialize, Deserialize};

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Result of a queue operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Committed,
    Delivered,
    Empty,
    Compacted,
}

/// Log entry recording an operation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub seq: u64,
    pub queue: String,
    pub op: EventOp,
    pub item: Option<T>,      // The item being enqueued/dequeued
    pub outcome: Outcome,
    pub len_after: usize,
    pub event_global_id: Option<u64>,
}

impl <T: std::fmt::Debug> Display for LogEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ seq: {}, queue: {}, op: {:?}, item: {:?}, outcome: {:?}, len_after: {}, event_global_id: {:?} }}",
            self.seq,
            self.queue,
            self.op,
            self.item,
            self.outcome,
            self.len_after,
            self.event_global_id,
        )
    }
}


#[derive(Clone, Debug)]
/// Logger storing all entries of one queue
pub struct Logger<T> {
    entries: Vec<LogEntry<T>>,
    queue: String,
}

impl<T:Clone> Logger<T> {
    pub fn new(queue: String) -> Self {
        Self {entries:Vec::new(), queue}
    }

    /// Log an operation, returns the entry's sequence id
    pub fn log(&mut self, op: EventOp, item: Option<T>, outcome: Outcome, len_after: usize, event_global_id: Option<u64>) -> u64 {
        // --- Negative-space assertion: outcome must match operation ---
        match op {
            EventOp::Enqueue => assert!(
                outcome == Outcome::Committed && item.is_some(),
                "Enqueue must commit an item"
            ),
            EventOp::Dequeue => assert!(
                matches!(
                    (&outcome, item.is_some()),
                    (Outcome::Delivered, true) | (Outcome::Empty, false)
                ),
                "Dequeue must deliver an item or report the queue empty"
            ),
            EventOp::Compact { .. } => assert!(
                outcome == Outcome::Compacted && item.is_none(),
                "Compaction carries no item"
            ),
        }

        let seq = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);

        // --- Log entry insertion ---
        let before = self.entries.len();
        self.entries.push(LogEntry {
            seq,
            queue: self.queue.clone(),
            op,
            item,
            outcome,
            len_after,
            event_global_id,
        });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
        seq
    }

    pub fn entries(&self) -> &[LogEntry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries logged after the given sequence id
    pub fn entries_since(&self, seq: u64) -> Vec<LogEntry<T>> {
        self.entries
            .iter()
            .filter(|entry| entry.seq > seq)
            .cloned()
            .collect()
    }
}


/// Write entries as NDJSON, one JSON object per line
pub fn write_ndjson<T: Serialize, W: Write>(log: &[LogEntry<T>], mut writer: W) -> Result<(), CoreError> {
    for entry in log {
        let json = serde_json::to_string(entry)?;
        writeln!(writer, "{}", json)?;
    }
    writer.flush()?;
    Ok(())
}
/// Thread-safe wrapper
pub type SafeLogger<T> = Arc<Mutex<Logger<T>>>;
