use std::cmp::Ordering;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn sort_index(&self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }
}

/// A support ticket waiting in a queue
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub description: String,
    pub priority: Priority,
}

impl Ticket {
    pub fn new(description: impl Into<String>, priority: Priority) -> Self {
        Self {
            description: description.into(),
            priority,
        }
    }

    pub fn sort_index(&self) -> u8 {
        self.priority.sort_index()
    }

    /// Comparator putting higher priorities first; equal priorities compare equal
    pub fn by_descending_priority(a: &Ticket, b: &Ticket) -> Ordering {
        b.sort_index().cmp(&a.sort_index())
    }
}
