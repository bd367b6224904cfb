use thiserror::Error;
use crate::core::prototype::CreatureKind;

/// Errors raised by the fallible parts of the crate.
///
/// Dequeueing from an empty queue is not one of them: that is a plain `None`.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid compaction policy: {reason}")]
    InvalidPolicy { reason: String },

    #[error("cannot copy a {found} prototype as {expected}")]
    PrototypeMismatch {
        expected: CreatureKind,
        found: CreatureKind,
    },

    #[error("no delegate registered under handle {0}")]
    UnknownHandle(u64),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write log stream: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    pub fn invalid_policy(reason: impl Into<String>) -> Self {
        Self::InvalidPolicy {
            reason: reason.into(),
        }
    }

    pub fn prototype_mismatch(expected: CreatureKind, found: CreatureKind) -> Self {
        Self::PrototypeMismatch { expected, found }
    }
}
