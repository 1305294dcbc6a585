//! Scent sense - smell things in any direction within a radius.

use super::vision::falloff;

/// Odor level of one kind of thing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Odor(pub f32);

impl Odor {
    /// Adds a thing at `distance` to the odor.
    ///
    /// A contribution is only added when it is strictly stronger than the
    /// odor accumulated so far, so an equal or weaker second source leaves
    /// the odor unchanged.
    pub fn observe(&mut self, distance: f32, limit: f32) {
        let intensity = falloff(distance, limit);
        if intensity > self.0 {
            self.0 += intensity;
        }
    }
}
