//! Feedforward network evaluating a genome against a stimuli vector.
//!
//! One hidden layer of ReLU units and two output units with a cheap
//! saturating cubic activation. The brain keeps no state between calls:
//! everything it needs lives in the genome.

use ndarray::{Array1, ArrayView2, s};
use serde::{Deserialize, Serialize};

use super::genome::Genome;

/// Number of values in a stimuli vector.
pub const BRAIN_NUM_INPUTS: usize = 8;

/// Number of motor outputs.
pub const BRAIN_NUM_OUTPUTS: usize = 2;

/// Everything a critter perceives in one step.
///
/// Intensities lie in `[0, 1]` (1 is closest), angles in `[-1, 1]` relative
/// to the heading. The wall pair can leave those ranges, see
/// [`sense_wall`](super::scene::sense_wall).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stimuli {
    /// Strongest food seen in the vision cone.
    pub food_intensity: f32,
    /// Angle to that food.
    pub food_angle: f32,
    /// Strongest danger seen in the vision cone.
    pub danger_intensity: f32,
    /// Angle to that danger.
    pub danger_angle: f32,
    /// Nearest wall along the heading.
    pub wall_intensity: f32,
    /// Angle of the heading relative to that wall.
    pub wall_angle: f32,
    /// Food smelled in any direction.
    pub food_odor: f32,
    /// Danger smelled in any direction.
    pub danger_odor: f32,
}

impl Stimuli {
    /// Input vector in the order the hidden weights expect.
    pub fn to_array(&self) -> Array1<f32> {
        Array1::from_vec(vec![
            self.food_intensity,
            self.food_angle,
            self.danger_intensity,
            self.danger_angle,
            self.wall_intensity,
            self.wall_angle,
            self.food_odor,
            self.danger_odor,
        ])
    }
}

/// Motor command for the left and right side, each in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlOutput {
    /// Left side speed.
    pub left_speed: f32,
    /// Right side speed.
    pub right_speed: f32,
}

/// Stateless evaluator for critter genomes.
pub struct Brain;

impl Brain {
    /// Runs a forward pass of `genome` on `stimuli`.
    #[inline]
    pub fn compute_control(genome: &Genome, stimuli: &Stimuli) -> ControlOutput {
        let input = stimuli.to_array();

        let mut hidden = layer(genome.hidden_weights().view(), &input);
        hidden.mapv_inplace(relu);

        let mut output = layer(genome.output_weights().view(), &hidden);
        output.mapv_inplace(sigmoidish);

        ControlOutput {
            left_speed: output[0],
            right_speed: output[1],
        }
    }
}

/// Bias column plus weighted sum of the inputs, one value per row.
fn layer(weights: ArrayView2<'_, f32>, inputs: &Array1<f32>) -> Array1<f32> {
    let mut acc = weights.slice(s![.., 1..]).dot(inputs);
    acc += &weights.column(0);
    acc
}

/// Rectifier activation.
#[inline]
pub fn relu(x: f32) -> f32 {
    x.max(0.0)
}

/// Piecewise cubic approximation of a sigmoid-like curve.
///
/// Saturates at -1 for `x <= -5` and at 1 for `x >= 5`. In between, the cubic
/// `-0.002 x^3 + 0.15 x + 0.5` rises from 0 to 1 and has a zero derivative at
/// both ends.
#[inline]
pub fn sigmoidish(x: f32) -> f32 {
    if x <= -5.0 {
        -1.0
    } else if x >= 5.0 {
        1.0
    } else {
        (-0.002 * x * x + 0.15) * x + 0.5
    }
}
