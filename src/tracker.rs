//! Session-scoped pod tracking context
//!
//! One [`PodTracker`] exists per play session. It owns the discovered set,
//! the two map toggles, the proximity throttle, and one marker per tracked
//! pod. Everything is mutated from the host's single tick thread; a
//! multi-threaded host must wrap the tracker in its own lock.

use std::collections::HashMap;
use std::time::Instant;

use crate::discovery::DiscoverySet;
use crate::error::TrackerError;
use crate::host::MapRenderer;
use crate::marker::PodMarker;
use crate::persistence::{self, KeyValueStore};
use crate::policy::{self, MapToggles};
use crate::sampler::ProximitySampler;
use crate::types::{LockState, MarkerStyle, PodIdentity, PodKind};

/// Discovery and visibility state for one play session.
#[derive(Debug)]
pub struct PodTracker {
    toggles: MapToggles,
    discovered: DiscoverySet,
    sampler: ProximitySampler,
    markers: HashMap<PodIdentity, PodMarker>,
}

impl PodTracker {
    pub fn new() -> Self {
        Self {
            toggles: MapToggles::default(),
            discovered: DiscoverySet::new(),
            sampler: ProximitySampler::new(),
            markers: HashMap::new(),
        }
    }

    /// Build a tracker from persisted session state. Absent keys default;
    /// a store-level failure is surfaced to the host.
    pub fn load_session(store: &impl KeyValueStore) -> Result<Self, TrackerError> {
        let (toggles, discovered) = persistence::load(store)?;
        log::info!(
            "Loaded session: {} discovered pods, showAll={}, showOpened={}",
            discovered.len(),
            toggles.show_all,
            toggles.show_opened
        );
        Ok(Self {
            toggles,
            discovered,
            sampler: ProximitySampler::new(),
            markers: HashMap::new(),
        })
    }

    /// Persist toggles and the discovered set at session end.
    pub fn save_session(&self, store: &mut impl KeyValueStore) -> Result<(), TrackerError> {
        persistence::save(store, self.toggles, &self.discovered)
    }

    /// Register a pod for map tracking when it spawns.
    ///
    /// The category is resolved once from the pod's static name. A name that
    /// matches no category is logged and the pod is excluded from tracking;
    /// registration of other pods continues. A pod that is already OPEN is
    /// seeded into the discovered set, so saves that opened pods before the
    /// tracker existed satisfy the "opened pods are discovered" invariant.
    pub fn register(
        &mut self,
        name: &str,
        identity: PodIdentity,
        lock_state: LockState,
    ) -> Result<PodKind, TrackerError> {
        let kind = match PodKind::classify(name) {
            Ok(kind) => kind,
            Err(e) => {
                log::error!("{}", e);
                return Err(e);
            }
        };

        self.markers.insert(identity, PodMarker::new(kind));

        if lock_state == LockState::Open {
            self.discovered.insert(identity);
        }

        Ok(kind)
    }

    /// Remove a pod's marker when the object leaves the world. Its discovery
    /// record stays.
    pub fn unregister(&mut self, identity: PodIdentity) {
        self.markers.remove(&identity);
    }

    /// Per-frame entry point: the host reports the pod the player is
    /// currently looking at from close enough.
    ///
    /// The throttle admits at most one candidate per cooldown window; the
    /// rest are dropped. When an admitted candidate is a new discovery,
    /// `on_discover` fires once (the host plays the pod's audio cue).
    pub fn observe_candidate(
        &mut self,
        identity: PodIdentity,
        now: Instant,
        on_discover: impl FnOnce(PodIdentity),
    ) {
        if !self.sampler.observe(now) {
            return;
        }
        if self.discovered.insert(identity) {
            log::info!("Discovered treasure pod at {}", identity);
            on_discover(identity);
        }
    }

    /// Observe a pod's live lock state, once per pod per renderer tick.
    /// Returns true exactly once per pod, when the OPEN transition is first
    /// seen, so the host can fade the marker sprite.
    pub fn refresh_marker(&mut self, identity: PodIdentity, lock_state: LockState) -> bool {
        match self.markers.get_mut(&identity) {
            Some(marker) => marker.refresh(lock_state),
            None => false,
        }
    }

    /// Whether the renderer should draw this pod's marker. Queried once per
    /// tracked pod per map refresh.
    pub fn should_show<R: MapRenderer>(
        &self,
        identity: PodIdentity,
        lock_state: LockState,
        renderer: &R,
    ) -> bool {
        policy::should_show(
            renderer.base_visibility_gate(identity),
            self.toggles,
            self.discovered.contains(identity),
            lock_state,
        )
    }

    /// Current draw style for a pod's marker, if the pod is tracked.
    pub fn marker_style(&self, identity: PodIdentity) -> Option<MarkerStyle> {
        self.markers.get(&identity).map(|m| m.style())
    }

    pub fn is_discovered(&self, identity: PodIdentity) -> bool {
        self.discovered.contains(identity)
    }

    pub fn discovered(&self) -> &DiscoverySet {
        &self.discovered
    }

    pub fn toggles(&self) -> MapToggles {
        self.toggles
    }

    /// Flip the show-all toggle, returning the new value.
    pub fn toggle_show_all(&mut self) -> bool {
        self.toggles.show_all = !self.toggles.show_all;
        self.toggles.show_all
    }

    /// Flip the show-opened toggle, returning the new value.
    pub fn toggle_show_opened(&mut self) -> bool {
        self.toggles.show_opened = !self.toggles.show_opened;
        self.toggles.show_opened
    }

    /// Forget all discoveries, then re-add every pod currently OPEN so the
    /// "opened pods are always discovered" invariant holds.
    pub fn reset_discovered<I>(&mut self, open_identities: I)
    where
        I: IntoIterator<Item = PodIdentity>,
    {
        self.discovered.clear();
        self.discovered.reconcile(open_identities);
    }
}

impl Default for PodTracker {
    fn default() -> Self {
        Self::new()
    }
}
