//! Critter state, movement and fitness bookkeeping.
//!
//! Critters move like a differential drive: the mean of both motor outputs
//! drives them forward and their difference turns them.

use std::f32::consts::{PI, TAU};

use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use serde::{Deserialize, Serialize};

use super::brain::{Brain, ControlOutput, Stimuli};
use super::genome::Genome;
use super::locatable::Locatable;
use super::params::Params;

/// A simulated critter driven by the brain encoded in its genome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Critter {
    /// Position in 2D space, clamped to the arena.
    pub pos: Array1<f32>,
    /// Heading in radians, in `(-pi, pi]`. Zero points right, positive turns up.
    pub heading: f32,
    /// Food eaten so far.
    pub ate_food_count: u32,
    /// Times caught by a danger so far.
    pub died_count: u32,
    /// Motor output from the latest brain evaluation.
    pub control: ControlOutput,
    genome: Genome,
}

impl Critter {
    /// Creates a critter at a random position with a random heading.
    pub fn new_random(genome: Genome, width: f32, height: f32) -> Self {
        let pos = Array1::random(2, Uniform::new(0., 1.)) * Array1::from_vec(vec![width, height]);
        let heading = normalize_angle(TAU * (rand::random::<f32>() - 0.5));

        Self::new(genome, pos, heading)
    }

    /// Creates a critter at a given position and heading with zeroed counters.
    pub fn new(genome: Genome, pos: Array1<f32>, heading: f32) -> Self {
        Self {
            pos,
            heading: normalize_angle(heading),
            ate_food_count: 0,
            died_count: 0,
            control: ControlOutput::default(),
            genome,
        }
    }

    /// Genome driving this critter.
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Replaces the genome, keeping position and counters.
    pub fn set_genome(&mut self, genome: Genome) {
        self.genome = genome;
    }

    /// Consumes the critter and returns its genome.
    pub fn into_genome(self) -> Genome {
        self.genome
    }

    /// Records a food capture.
    pub fn eat(&mut self) {
        self.ate_food_count += 1;
    }

    /// Records being caught by a danger.
    pub fn kill(&mut self) {
        self.died_count += 1;
    }

    /// Fitness score from the capture and death counters.
    pub fn compute_fitness(&self, params: &Params) -> f32 {
        params.food_cost * self.ate_food_count as f32 + params.danger_cost * self.died_count as f32
    }

    /// Evaluates the brain and stores the motor output for the next move.
    pub fn update_control(&mut self, stimuli: &Stimuli) {
        self.control = Brain::compute_control(&self.genome, stimuli);
    }

    /// Moves and turns the critter by `dt` seconds using the stored motor output.
    pub fn update_position(&mut self, dt: f32, params: &Params) {
        let ControlOutput {
            left_speed,
            right_speed,
        } = self.control;

        let speed = params.base_speed_forward * (left_speed + right_speed) * 0.5;
        let distance = dt * speed;

        // Screen coordinates: y grows downwards.
        let x = self.pos[0] + self.heading.cos() * distance;
        let y = self.pos[1] - self.heading.sin() * distance;
        self.set_position(
            clamp_to_bound(x, params.scene_width),
            clamp_to_bound(y, params.scene_height),
        );

        let omega = params.base_speed_angular * (right_speed - left_speed);
        self.heading = normalize_angle(self.heading + dt * omega);
    }
}

impl Locatable for Critter {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }
}

/// Clamps a coordinate to `[0, bound - 1]` when it leaves `[0, bound)`.
fn clamp_to_bound(value: f32, bound: f32) -> f32 {
    if value < 0.0 {
        0.0
    } else if value >= bound {
        bound - 1.0
    } else {
        value
    }
}

/// Brings an angle into `(-pi, pi]` by whole turns.
pub fn normalize_angle(mut angle: f32) -> f32 {
    while angle <= -PI {
        angle += TAU;
    }
    while angle > PI {
        angle -= TAU;
    }
    angle
}
