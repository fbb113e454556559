use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Opacity applied to the map marker of a pod that has been opened,
/// so opened pods are distinguishable from locked ones at a glance.
pub const OPENED_MARKER_OPACITY: f32 = 0.5;

/// Identity of a discoverable treasure pod: its world position.
///
/// Pods are static, so the position is assigned once at spawn and never
/// changes. Equality is exact bit-for-bit on the float components — there is
/// no tolerance, because two pods either are the same object (identical
/// position forever) or they are not. This also gives us a lawful `Eq` and
/// `Hash` despite the `f32` fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PodIdentity {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PodIdentity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Bit pattern of the position, used for equality, hashing, and the
    /// stable export order.
    pub(crate) fn bits(&self) -> (u32, u32, u32) {
        (self.x.to_bits(), self.y.to_bits(), self.z.to_bits())
    }
}

impl PartialEq for PodIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for PodIdentity {}

impl std::hash::Hash for PodIdentity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl std::fmt::Display for PodIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Category of a treasure pod, deciding which marker sprite it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PodKind {
    /// Rank 1 (green) pod
    Green,
    /// Rank 2 (blue) pod
    Blue,
    /// Rank 3 (purple) pod
    Purple,
    /// Cosmetic (DLC) pod
    Cosmetic,
}

impl PodKind {
    /// Classify a pod from its static object name.
    ///
    /// Classification happens once at registration; pods whose name matches
    /// no known category are excluded from tracking.
    pub fn classify(name: &str) -> Result<PodKind, TrackerError> {
        if name.contains("Rank1") {
            Ok(PodKind::Green)
        } else if name.contains("Rank2") {
            Ok(PodKind::Blue)
        } else if name.contains("Rank3") {
            Ok(PodKind::Purple)
        } else if name.contains("Cosmetic") {
            Ok(PodKind::Cosmetic)
        } else {
            Err(TrackerError::UnknownPodKind {
                name: name.to_string(),
            })
        }
    }
}

/// Lock state of a pod, owned and mutated by the external simulation.
/// The tracker only ever reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockState {
    Locked,
    Open,
}

/// How the renderer should draw a pod's map marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub kind: PodKind,
    /// 1.0 for locked pods, [`OPENED_MARKER_OPACITY`] once opened.
    pub opacity: f32,
}
