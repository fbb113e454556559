//! Discovery tracking and map visibility for treasure pods
//!
//! Tracks which of a fixed set of discoverable treasure pods the player has
//! encountered and decides, per pod, whether the external map renderer
//! should draw its marker:
//! - [`sampler::ProximitySampler`] throttles the per-frame look-at signal to
//!   one discovery attempt per cooldown window
//! - [`discovery::DiscoverySet`] records discovered pod positions with
//!   idempotent insertion
//! - [`marker::PodMarker`] latches the one-way LOCKED → OPEN transition
//! - [`policy::should_show`] combines the two global toggles with per-pod
//!   state into the show/hide decision
//! - [`persistence`] loads and saves the session state through a key-value
//!   store
//!
//! The host drives everything from its tick loop through a session-scoped
//! [`tracker::PodTracker`]; rendering, asset loading, and the save system
//! stay on the host side behind the [`host::MapRenderer`] trait and the
//! [`persistence::KeyValueStore`] trait.

pub mod commands;
pub mod discovery;
pub mod error;
pub mod host;
pub mod marker;
pub mod persistence;
pub mod policy;
pub mod sampler;
pub mod tracker;
pub mod types;

pub use discovery::DiscoverySet;
pub use error::TrackerError;
pub use host::MapRenderer;
pub use marker::PodMarker;
pub use persistence::{JsonFileStore, KeyValueStore};
pub use policy::{should_show, MapToggles};
pub use sampler::{ProximitySampler, SamplerState, COOLDOWN};
pub use tracker::PodTracker;
pub use types::{LockState, MarkerStyle, PodIdentity, PodKind};
