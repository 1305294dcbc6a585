//! Vision sense - the cone in front of a critter.
//!
//! Only the strongest (nearest) thing of each kind inside the cone is
//! reported. Intensity falls off linearly with distance.

use std::f32::consts::{FRAC_PI_2, TAU};

/// Strongest hit of one kind, with its angle already scaled by the angle limit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sighting {
    /// 1.0 at contact, 0.0 at the limit.
    pub intensity: f32,
    /// Angle relative to the heading divided by the angle limit.
    pub angle: f32,
}

impl Sighting {
    /// Keeps the candidate only if it is strictly stronger than the current one.
    pub fn observe(&mut self, intensity: f32, angle: f32) {
        if intensity > self.intensity {
            self.intensity = intensity;
            self.angle = angle;
        }
    }
}

/// Linear falloff: 1.0 at distance 0, 0.0 at `limit`.
#[inline]
pub fn falloff(distance: f32, limit: f32) -> f32 {
    (limit - distance) * (1.0 / limit)
}

/// Heading representation used to measure bearings without wraparound.
///
/// Headings are stored in `(-pi, pi]`. When a critter looks towards the
/// discontinuity at +-pi, both its heading and the bearings it compares
/// against are moved to `[0, 2 pi)` instead.
#[derive(Debug, Clone, Copy)]
pub struct ViewFrame {
    heading: f32,
    zero_two_pi: bool,
}

impl ViewFrame {
    /// Builds the frame for a heading in `(-pi, pi]`.
    pub fn new(heading: f32) -> Self {
        if heading > FRAC_PI_2 {
            Self {
                heading,
                zero_two_pi: true,
            }
        } else if heading < -FRAC_PI_2 {
            Self {
                heading: heading + TAU,
                zero_two_pi: true,
            }
        } else {
            Self {
                heading,
                zero_two_pi: false,
            }
        }
    }

    /// Heading in this frame's representation.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Signed angle from the heading to a target at offset `(dx, dy)`.
    ///
    /// `dy` is in screen coordinates, so it is negated to get a bearing.
    pub fn view_angle(&self, dx: f32, dy: f32) -> f32 {
        let mut target = (-dy).atan2(dx);
        if self.zero_two_pi && target < 0.0 {
            target += TAU;
        }
        self.heading - target
    }
}
