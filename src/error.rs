//! Error types for pod tracking
//!
//! Errors are classified by effect:
//! - UnknownPodKind: the pod is excluded from tracking, other pods continue
//! - Store/Serialize: a session load or save failed and is surfaced to the host

use thiserror::Error;

/// Error types for pod tracking and persistence
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A pod's static name matched no known category. The pod is skipped;
    /// this never aborts registration of the remaining pods.
    #[error("{name} treasure pod has unknown type")]
    UnknownPodKind { name: String },

    /// The backing key-value store failed at the I/O level.
    #[error("Store error: {0}")]
    Store(String),

    /// A value could not be serialized for the store.
    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl TrackerError {
    /// Returns true if this error only excludes a single pod rather than
    /// failing the whole session operation.
    pub fn is_pod_exclusion(&self) -> bool {
        matches!(self, TrackerError::UnknownPodKind { .. })
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Store(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Serialize(err.to_string())
    }
}
