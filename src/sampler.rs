//! Throttle for the per-frame proximity check
//!
//! The host reports a "closest look-at pod" candidate every frame. Searching
//! the discovered set every frame is wasted work, so the sampler accepts at
//! most one candidate per cooldown window and drops the rest. Pods are
//! spatially far apart, so a dropped frame cannot permanently miss a
//! discovery — the player is still looking at the pod on the next accepted
//! frame.
//!
//! The throttle is a deadline comparison against a monotonic clock passed in
//! by the caller. There is no background timer and at most one pending
//! deadline at a time.

use std::time::{Duration, Instant};

/// Cooldown between accepted discovery attempts. Could be even longer, since
/// no two pods are close enough to be looked at within one window.
pub const COOLDOWN: Duration = Duration::from_secs(5);

/// Throttle state, derived from the pending deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerState {
    /// The next candidate will be accepted.
    Ready,
    /// Candidates are dropped until the cooldown deadline passes.
    Cooling,
}

/// Gate that admits at most one discovery attempt per cooldown window.
#[derive(Debug)]
pub struct ProximitySampler {
    cooldown: Duration,
    /// Deadline after which the sampler is READY again. None = never sampled.
    ready_at: Option<Instant>,
}

impl ProximitySampler {
    pub fn new() -> Self {
        Self::with_cooldown(COOLDOWN)
    }

    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            cooldown,
            ready_at: None,
        }
    }

    pub fn state(&self, now: Instant) -> SamplerState {
        match self.ready_at {
            Some(deadline) if now < deadline => SamplerState::Cooling,
            _ => SamplerState::Ready,
        }
    }

    /// Report a candidate at time `now`.
    ///
    /// Returns true if the candidate is accepted (the caller should attempt
    /// the discovery insertion), false if it is dropped by the cooldown.
    /// Accepting a candidate starts a new cooldown window; a window is never
    /// restarted while one is running.
    pub fn observe(&mut self, now: Instant) -> bool {
        if self.state(now) == SamplerState::Cooling {
            return false;
        }
        self.ready_at = Some(now + self.cooldown);
        true
    }
}

impl Default for ProximitySampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_candidate_is_accepted() {
        let mut sampler = ProximitySampler::new();
        let now = Instant::now();
        assert_eq!(sampler.state(now), SamplerState::Ready);
        assert!(sampler.observe(now));
        assert_eq!(sampler.state(now), SamplerState::Cooling);
    }

    #[test]
    fn test_at_most_one_acceptance_per_window() {
        let mut sampler = ProximitySampler::new();
        let start = Instant::now();

        // Simulate 60fps frames for a full window: only the first is accepted.
        let mut accepted = 0;
        for frame in 0..300 {
            let now = start + Duration::from_millis(frame * 16);
            if sampler.observe(now) {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 1);
    }

    #[test]
    fn test_ready_again_after_cooldown_elapses() {
        let mut sampler = ProximitySampler::new();
        let start = Instant::now();

        assert!(sampler.observe(start));
        assert!(!sampler.observe(start + COOLDOWN - Duration::from_millis(1)));
        assert!(sampler.observe(start + COOLDOWN));
    }

    #[test]
    fn test_window_is_not_extended_by_dropped_candidates() {
        let mut sampler = ProximitySampler::with_cooldown(Duration::from_secs(5));
        let start = Instant::now();

        assert!(sampler.observe(start));
        // Hammering during the window must not push the deadline out.
        for ms in (0..5000).step_by(100) {
            sampler.observe(start + Duration::from_millis(ms));
        }
        assert!(sampler.observe(start + Duration::from_secs(5)));
    }
}
