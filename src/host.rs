//! Collaborator interfaces provided by the host
//!
//! The tracker does not reach into the host's internals; everything it
//! needs from the map surface comes through these traits.

use crate::types::PodIdentity;

/// The external map-rendering surface.
pub trait MapRenderer {
    /// Precondition the renderer applies before the visibility policy is
    /// even consulted (fog of war and similar). When this fails for a pod,
    /// its marker is hidden regardless of toggles or discovery state.
    fn base_visibility_gate(&self, identity: PodIdentity) -> bool;

    /// Recompute all marker visibilities now. Called after every toggle or
    /// reset command; never deferred or batched.
    fn request_refresh(&mut self);
}
