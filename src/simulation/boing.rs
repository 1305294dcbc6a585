//! Bouncing diagonal motion shared by food and danger.
//!
//! A boing moves at a fixed speed along one of the four diagonals. When it
//! crosses a wall it is clamped back inside and the matching direction flag
//! flips, so it zig-zags across the arena forever.

use std::f32::consts::FRAC_1_SQRT_2;

use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::locatable::Locatable;

/// Position and diagonal direction of a bouncing object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boing {
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Moving towards decreasing x.
    pub go_left: bool,
    /// Moving towards increasing y (screen coordinates).
    pub go_down: bool,
    /// Per-axis speed, `speed / sqrt(2)` so the diagonal speed is `speed`.
    speed_mult: f32,
    width: f32,
    height: f32,
}

impl Boing {
    /// Creates a boing at a random position heading along a random diagonal.
    pub fn new_random(width: f32, height: f32, speed: f32) -> Self {
        let pos = Array1::random(2, Uniform::new(0., 1.)) * Array1::from_vec(vec![width, height]);

        // One draw split into four equally likely quadrants.
        let (go_left, go_down) = match rand::rng().random::<f32>() {
            r if r < 0.25 => (false, false),
            r if r < 0.5 => (false, true),
            r if r < 0.75 => (true, false),
            _ => (true, true),
        };

        Self {
            pos,
            go_left,
            go_down,
            speed_mult: speed * FRAC_1_SQRT_2,
            width,
            height,
        }
    }

    /// Speed along each axis.
    pub fn speed_mult(&self) -> f32 {
        self.speed_mult
    }

    /// Advances the position by `dt` seconds, bouncing off the walls.
    pub fn update_position(&mut self, dt: f32) {
        let delta = dt * self.speed_mult;

        self.pos[0] += if self.go_left { -delta } else { delta };
        self.pos[1] += if self.go_down { delta } else { -delta };

        if self.pos[0] >= self.width {
            self.pos[0] = self.width - 1.0;
            self.go_left = true;
        } else if self.pos[0] < 0.0 {
            self.pos[0] = 0.0;
            self.go_left = false;
        }

        if self.pos[1] >= self.height {
            self.pos[1] = self.height - 1.0;
            self.go_down = false;
        } else if self.pos[1] < 0.0 {
            self.pos[1] = 0.0;
            self.go_down = true;
        }
    }
}

impl Locatable for Boing {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }
}
