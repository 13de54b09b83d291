//! Selection between the reference benchmark formulas and the corrected ones
//!
//! The reference benchmark carries three quirks that a conventional particle
//! system would not have. Each one can be switched to the conventional formula
//! independently:
//!
//! | Flag                  | Reference formula                       | Corrected formula                              |
//! |-----------------------|-----------------------------------------|------------------------------------------------|
//! | `ROTATION_DELTA`      | `rotation += rotation * dt`             | `rotation += rotation_delta * dt`              |
//! | `TANGENTIAL_VARIANCE` | `tangential = base + variance`          | `tangential = base + variance * rand(-1, 1)`   |
//! | `RECOMPUTE_TRANSFORM` | `transform = transform * frame_matrix`  | `transform = frame_matrix`                     |
//!
//! The empty set reproduces the reference benchmark exactly.

bitflags::bitflags! {
    /// Corrections applied on top of the reference benchmark behavior
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CorrectedBehavior: u8 {
        /// Integrate rotation with the per-particle rotation delta
        const ROTATION_DELTA = 0x01;
        /// Scale the tangential acceleration variance by a random draw
        const TANGENTIAL_VARIANCE = 0x02;
        /// Rebuild the transform every paint instead of accumulating it
        const RECOMPUTE_TRANSFORM = 0x04;
    }
}

impl CorrectedBehavior {
    /// Reference benchmark behavior, quirks included
    pub const FAITHFUL: Self = Self::empty();

    /// Conventional particle system behavior
    pub const CORRECTED: Self = Self::all();

    /// Whether this set reproduces the reference benchmark exactly
    #[inline]
    pub fn is_faithful(&self) -> bool {
        self.is_empty()
    }

    /// Short human-readable label
    pub fn label(&self) -> &'static str {
        if self.is_empty() {
            "faithful"
        } else if self.is_all() {
            "corrected"
        } else {
            "mixed"
        }
    }
}
