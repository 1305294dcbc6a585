//! Evolvable critter genome: two weight matrices and a display color.
//!
//! Column 0 of every row holds the bias, the remaining columns the weights
//! of the incoming connections. Shapes never change once a population is
//! created: crossover and mutation only replace values.

use std::fmt;

use ndarray::Array2;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::brain::{BRAIN_NUM_INPUTS, BRAIN_NUM_OUTPUTS};
use super::error::{Error, Result};

/// Hidden rows are inherited in blocks of this many consecutive units.
pub const HIDDEN_BLOCK: usize = 4;

/// Maximum number of mutation attempts per reproduction.
pub const MAX_MUTATIONS: usize = 10;

/// Cosmetic color tag inherited from one parent. Ignored by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Draws a color with every channel in `[50, 250)` so critters stay visible.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self {
            r: rng.random_range(50..250),
            g: rng.random_range(50..250),
            b: rng.random_range(50..250),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Weights of a critter brain plus its color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    color: Color,
    /// Hidden layer weights (`hidden` × `inputs + 1`).
    hidden_weights: Array2<f32>,
    /// Output layer weights (`outputs` × `hidden + 1`).
    output_weights: Array2<f32>,
}

impl Genome {
    /// Builds a genome from explicit weights, checking their shapes.
    pub fn new(color: Color, hidden_weights: Array2<f32>, output_weights: Array2<f32>) -> Result<Self> {
        let genome = Self {
            color,
            hidden_weights,
            output_weights,
        };
        genome.validate()?;
        Ok(genome)
    }

    /// Creates a genome with every weight uniform in `[-amplitude, amplitude)`.
    pub fn random(hidden_units: usize, amplitude: f32) -> Self {
        let weights = Uniform::new(-amplitude, amplitude);
        Self {
            color: Color::random(),
            hidden_weights: Array2::random((hidden_units, BRAIN_NUM_INPUTS + 1), weights),
            output_weights: Array2::random((BRAIN_NUM_OUTPUTS, hidden_units + 1), weights),
        }
    }

    /// Creates `size` independent random genomes.
    pub fn random_population(size: usize, hidden_units: usize, amplitude: f32) -> Vec<Self> {
        (0..size).map(|_| Self::random(hidden_units, amplitude)).collect()
    }

    /// Display color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Hidden layer weights, bias in column 0.
    pub fn hidden_weights(&self) -> &Array2<f32> {
        &self.hidden_weights
    }

    /// Output layer weights, bias in column 0.
    pub fn output_weights(&self) -> &Array2<f32> {
        &self.output_weights
    }

    /// Number of hidden units.
    pub fn hidden_units(&self) -> usize {
        self.hidden_weights.nrows()
    }

    /// Checks that both matrices fit together and match the brain topology.
    pub fn validate(&self) -> Result<()> {
        let (hidden_rows, hidden_cols) = self.hidden_weights.dim();
        let (output_rows, output_cols) = self.output_weights.dim();

        if hidden_rows == 0 || hidden_rows % HIDDEN_BLOCK != 0 {
            return Err(Error::InvalidGenome(format!(
                "hidden unit count must be a non-zero multiple of {}, got {}",
                HIDDEN_BLOCK, hidden_rows
            )));
        }
        if hidden_cols != BRAIN_NUM_INPUTS + 1 {
            return Err(Error::InvalidGenome(format!(
                "hidden weights need {} columns, got {}",
                BRAIN_NUM_INPUTS + 1,
                hidden_cols
            )));
        }
        if output_rows != BRAIN_NUM_OUTPUTS || output_cols != hidden_rows + 1 {
            return Err(Error::InvalidGenome(format!(
                "output weights must be {}x{}, got {}x{}",
                BRAIN_NUM_OUTPUTS,
                hidden_rows + 1,
                output_rows,
                output_cols
            )));
        }
        Ok(())
    }

    /// Creates a child genome by crossover with `partner` followed by mutation.
    ///
    /// Hidden weights are inherited column by column for each block of four
    /// units, so a group of hidden units keeps one parent's view of a given
    /// input. Output weights are inherited one whole column at a time, which
    /// keeps a hidden unit's contribution to both outputs together.
    ///
    /// # Panics
    ///
    /// Panics if the parents have different shapes.
    pub fn reproduce(&self, partner: &Genome, amplitude: f32) -> Genome {
        assert_eq!(
            self.hidden_weights.dim(),
            partner.hidden_weights.dim(),
            "parents must have the same hidden weight shape"
        );
        assert_eq!(
            self.output_weights.dim(),
            partner.output_weights.dim(),
            "parents must have the same output weight shape"
        );
        assert!(
            self.hidden_units() > 0 && self.hidden_units() % HIDDEN_BLOCK == 0,
            "hidden unit count must be a non-zero multiple of {HIDDEN_BLOCK}"
        );

        let mut rng = rand::rng();
        let mut hidden_weights = self.hidden_weights.clone();
        let mut output_weights = self.output_weights.clone();

        for block in 0..self.hidden_units() / HIDDEN_BLOCK {
            let rows = block * HIDDEN_BLOCK..(block + 1) * HIDDEN_BLOCK;
            for col in 0..hidden_weights.ncols() {
                if rng.random::<f32>() >= 0.5 {
                    for row in rows.clone() {
                        hidden_weights[[row, col]] = partner.hidden_weights[[row, col]];
                    }
                }
            }
        }

        for col in 0..output_weights.ncols() {
            if rng.random::<f32>() >= 0.5 {
                output_weights
                    .column_mut(col)
                    .assign(&partner.output_weights.column(col));
            }
        }

        mutate(&mut hidden_weights, &mut output_weights, amplitude, &mut rng);

        let color = if rng.random::<f32>() < 0.5 {
            self.color
        } else {
            partner.color
        };

        Genome {
            color,
            hidden_weights,
            output_weights,
        }
    }
}

/// Replaces a few random weights with fresh values.
///
/// Each attempt stops the loop with probability 1/2. A surviving attempt
/// rewrites a hidden weight with probability 1/32 and an output weight
/// otherwise.
fn mutate(
    hidden_weights: &mut Array2<f32>,
    output_weights: &mut Array2<f32>,
    amplitude: f32,
    rng: &mut impl Rng,
) {
    for _ in 0..MAX_MUTATIONS {
        let r = rng.random::<f32>();
        if r >= 0.5 {
            break;
        }

        // r < 1/2 here, so this branch has probability 1/32.
        let target = if r < 1.0 / 64.0 {
            &mut *hidden_weights
        } else {
            &mut *output_weights
        };
        let row = rng.random_range(0..target.nrows());
        let col = rng.random_range(0..target.ncols());
        target[[row, col]] = rng.random_range(-amplitude..amplitude);
    }
}
