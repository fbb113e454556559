//! User-invocable map commands
//!
//! The three console-facing operations. Each mutates the tracker
//! synchronously, then asks the renderer to recompute all marker
//! visibilities immediately — toggling must be visible on the open map
//! without waiting for the next natural refresh.

use crate::host::MapRenderer;
use crate::tracker::PodTracker;
use crate::types::PodIdentity;

/// Toggle whether every pod is shown on the map. Returns the new value.
pub fn toggle_show_all(tracker: &mut PodTracker, renderer: &mut impl MapRenderer) -> bool {
    let show_all = tracker.toggle_show_all();
    renderer.request_refresh();

    if show_all {
        log::info!("[MapMarkers]: Now showing all treasure pods on the map!");
    } else {
        log::info!("[MapMarkers]: No longer showing all treasure pods on the map!");
    }
    show_all
}

/// Toggle whether already-opened pods are shown on the map. Returns the new
/// value.
pub fn toggle_show_opened(tracker: &mut PodTracker, renderer: &mut impl MapRenderer) -> bool {
    let show_opened = tracker.toggle_show_opened();
    renderer.request_refresh();

    if show_opened {
        log::info!("[MapMarkers]: Now showing opened treasure pods on the map!");
    } else {
        log::info!("[MapMarkers]: No longer showing opened treasure pods on the map!");
    }
    show_opened
}

/// Reset all locked pods to undiscovered. Opened pods stay discovered; the
/// host passes the identities of every pod currently OPEN.
pub fn reset_discovered<I>(
    tracker: &mut PodTracker,
    open_identities: I,
    renderer: &mut impl MapRenderer,
) where
    I: IntoIterator<Item = PodIdentity>,
{
    tracker.reset_discovered(open_identities);
    renderer.request_refresh();

    log::info!("[MapMarkers]: Reset successful!");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LockState;
    use std::time::Instant;

    struct CountingRenderer {
        refreshes: usize,
    }

    impl MapRenderer for CountingRenderer {
        fn base_visibility_gate(&self, _identity: PodIdentity) -> bool {
            true
        }

        fn request_refresh(&mut self) {
            self.refreshes += 1;
        }
    }

    fn pod(x: f32) -> PodIdentity {
        PodIdentity::new(x, 0.0, 0.0)
    }

    #[test]
    fn test_toggles_flip_and_refresh_immediately() {
        let mut tracker = PodTracker::new();
        let mut renderer = CountingRenderer { refreshes: 0 };

        assert!(toggle_show_all(&mut tracker, &mut renderer));
        assert!(!toggle_show_all(&mut tracker, &mut renderer));
        assert!(!toggle_show_opened(&mut tracker, &mut renderer));
        assert_eq!(renderer.refreshes, 3);
    }

    #[test]
    fn test_reset_keeps_open_pods_and_refreshes() {
        let mut tracker = PodTracker::new();
        let mut renderer = CountingRenderer { refreshes: 0 };

        tracker
            .register("treasurePodRank1_01", pod(1.0), LockState::Open)
            .unwrap();
        tracker.observe_candidate(pod(2.0), Instant::now(), |_| {});
        assert_eq!(tracker.discovered().len(), 2);

        reset_discovered(&mut tracker, [pod(1.0)], &mut renderer);

        assert!(tracker.is_discovered(pod(1.0)));
        assert!(!tracker.is_discovered(pod(2.0)));
        assert_eq!(renderer.refreshes, 1);
    }
}
