//! Map visibility policy
//!
//! Two global toggles layered from most to least permissive:
//! - `show_all` overrides everything: every pod is on the map.
//! - `show_opened` shows any discovered pod, opened or not.
//! - Strict mode (both off) shows only discovered pods that are still
//!   LOCKED — opening a pod removes it from the map immediately, so the map
//!   only ever points at pods worth revisiting. Intentional UX choice.

use serde::{Deserialize, Serialize};

use crate::types::LockState;

/// The two global display preferences, loaded at session start and saved at
/// session end. Absent persisted values fall back to the serde defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapToggles {
    /// Show every pod on the map, discovered or not.
    #[serde(default)]
    pub show_all: bool,
    /// Show already-opened pods (their sprites are faded to distinguish
    /// them).
    #[serde(default = "default_show_opened")]
    pub show_opened: bool,
}

fn default_show_opened() -> bool {
    true
}

impl Default for MapToggles {
    fn default() -> Self {
        Self {
            show_all: false,
            show_opened: true,
        }
    }
}

/// Decide whether a pod's marker is drawn on the map.
///
/// `render_gate` is the external precondition (fog of war); when it fails
/// nothing else is consulted. `discovered` is membership in the
/// [`DiscoverySet`](crate::discovery::DiscoverySet); `lock_state` is the
/// pod's live lock state. Total function, never fails.
pub fn should_show(
    render_gate: bool,
    toggles: MapToggles,
    discovered: bool,
    lock_state: LockState,
) -> bool {
    if !render_gate {
        return false;
    }
    if toggles.show_all {
        return true;
    }
    if toggles.show_opened {
        return discovered;
    }
    discovered && lock_state == LockState::Locked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let toggles = MapToggles::default();
        assert!(!toggles.show_all);
        assert!(toggles.show_opened);
    }

    #[test]
    fn test_gate_failure_hides_everything() {
        let toggles = MapToggles {
            show_all: true,
            show_opened: true,
        };
        assert!(!should_show(false, toggles, true, LockState::Locked));
    }

    #[test]
    fn test_show_all_overrides_discovery() {
        let toggles = MapToggles {
            show_all: true,
            show_opened: false,
        };
        for discovered in [false, true] {
            for lock in [LockState::Locked, LockState::Open] {
                assert!(should_show(true, toggles, discovered, lock));
            }
        }
    }

    #[test]
    fn test_show_opened_equals_discovered() {
        let toggles = MapToggles {
            show_all: false,
            show_opened: true,
        };
        for lock in [LockState::Locked, LockState::Open] {
            assert!(should_show(true, toggles, true, lock));
            assert!(!should_show(true, toggles, false, lock));
        }
    }

    #[test]
    fn test_strict_mode_requires_discovered_and_locked() {
        let toggles = MapToggles {
            show_all: false,
            show_opened: false,
        };
        assert!(should_show(true, toggles, true, LockState::Locked));
        assert!(!should_show(true, toggles, true, LockState::Open));
        assert!(!should_show(true, toggles, false, LockState::Locked));
        assert!(!should_show(true, toggles, false, LockState::Open));
    }
}
