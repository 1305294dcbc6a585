//! Wall sense - distance along the heading to the arena border.
//!
//! The heading ray is cast against the horizontal wall it points to (top or
//! bottom) and a vertical one (left or right). Only the stronger of the two is
//! reported. Branches and angles work on the heading of the critter's
//! [`ViewFrame`], so a critter looking towards -pi sees through `[pi, 3 pi/2)`:
//! the "top" branch then yields a negative distance, which counts as a very
//! close wall. Evolved genomes depend on these readings.

use std::f32::consts::{FRAC_PI_2, PI};

use super::vision::{Sighting, ViewFrame, falloff};

/// Senses the nearest wall in front of a critter at `(x, y)`.
///
/// Intensity exceeds 1 when the ray distance is negative; the angle is not
/// confined to `[-1, 1]` for headings past `pi/2`.
pub fn sense_wall(x: f32, y: f32, frame: ViewFrame, width: f32, height: f32, limit: f32) -> Sighting {
    let heading = frame.heading();
    let mut wall = Sighting::default();
    let mut observe = |distance: f32, angle: f32| {
        if distance < limit {
            wall.observe(falloff(distance, limit), angle / FRAC_PI_2);
        }
    };

    if heading > 0.0 {
        // top wall, y = 0
        observe(y / heading.sin(), heading - FRAC_PI_2);
    } else if heading < 0.0 {
        // bottom wall, y = height
        observe((y - height) / heading.sin(), FRAC_PI_2 + heading);
    }

    // Frame headings are never below -pi/2, so the left wall is only checked
    // on the far side of pi/2.
    if heading > -FRAC_PI_2 && heading < FRAC_PI_2 {
        // right wall, x = width
        observe((width - x) / heading.cos(), heading);
    } else if heading > FRAC_PI_2 {
        // left wall, x = 0
        observe(-x / heading.cos(), heading + PI);
    }

    wall
}
