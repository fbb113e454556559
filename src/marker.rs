//! Per-pod map marker state
//!
//! Each tracked pod carries a marker with its category and a one-way
//! "opened" latch. The simulation owns the lock state; the marker only
//! observes it during `refresh` and records the LOCKED → OPEN transition
//! so the renderer can fade the sprite exactly once.

use crate::types::{LockState, MarkerStyle, PodKind, OPENED_MARKER_OPACITY};

/// Map marker state for one tracked pod.
#[derive(Debug, Clone)]
pub struct PodMarker {
    kind: PodKind,
    /// Latches true when the pod is first observed OPEN. Never resets.
    opened: bool,
}

impl PodMarker {
    pub fn new(kind: PodKind) -> Self {
        Self {
            kind,
            opened: false,
        }
    }

    /// Observe the pod's current lock state, called once per pod per
    /// renderer tick. Returns true exactly once, on the tick that first sees
    /// the pod OPEN, so the host can apply the opened sprite fade. No-op
    /// once latched.
    pub fn refresh(&mut self, lock_state: LockState) -> bool {
        if self.opened {
            return false;
        }
        if lock_state == LockState::Open {
            self.opened = true;
            return true;
        }
        false
    }

    /// Whether the pod has ever been observed OPEN.
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn kind(&self) -> PodKind {
        self.kind
    }

    /// Current draw style: full opacity while locked, semi-transparent once
    /// the pod has been opened.
    pub fn style(&self) -> MarkerStyle {
        MarkerStyle {
            kind: self.kind,
            opacity: if self.opened {
                OPENED_MARKER_OPACITY
            } else {
                1.0
            },
        }
    }
}
