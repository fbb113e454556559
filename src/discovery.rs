//! Set of discovered treasure pods
//!
//! Membership is keyed by pod position (exact-match, see [`PodIdentity`]).
//! The set only ever grows during a session, except through an explicit
//! full reset.

use std::collections::HashSet;

use crate::types::PodIdentity;

/// The set of pods the player has discovered.
///
/// Created empty or rebuilt from persistence at session start, saved at
/// session end. Insertion is idempotent and order-irrelevant.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiscoverySet {
    pods: HashSet<PodIdentity>,
}

impl DiscoverySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pod at this position has been discovered.
    pub fn contains(&self, identity: PodIdentity) -> bool {
        self.pods.contains(&identity)
    }

    /// Add a pod to the discovered set.
    ///
    /// Returns true if this is a newly discovered pod, false if it was
    /// already present. Discovery feedback (audio cue) should fire exactly
    /// when this returns true.
    pub fn insert(&mut self, identity: PodIdentity) -> bool {
        self.pods.insert(identity)
    }

    /// Forget every discovered pod. Irreversible within the session; callers
    /// are expected to follow up with [`reconcile`](Self::reconcile) so
    /// opened pods stay discovered.
    pub fn clear(&mut self) {
        self.pods.clear();
    }

    /// Re-add every pod currently in the OPEN state, restoring the invariant
    /// that opened pods are always discovered. Iteration order does not
    /// matter since insertion is idempotent.
    pub fn reconcile<I>(&mut self, open_identities: I)
    where
        I: IntoIterator<Item = PodIdentity>,
    {
        for identity in open_identities {
            self.pods.insert(identity);
        }
    }

    /// Snapshot of the set for persistence, in a stable order (sorted by
    /// position bit pattern). Reload rebuilds an unordered set, so the
    /// particular order carries no meaning.
    pub fn export(&self) -> Vec<PodIdentity> {
        let mut pods: Vec<PodIdentity> = self.pods.iter().copied().collect();
        pods.sort_by_key(|p| p.bits());
        pods
    }

    pub fn len(&self) -> usize {
        self.pods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pods.is_empty()
    }
}

impl FromIterator<PodIdentity> for DiscoverySet {
    fn from_iter<I: IntoIterator<Item = PodIdentity>>(iter: I) -> Self {
        Self {
            pods: iter.into_iter().collect(),
        }
    }
}
