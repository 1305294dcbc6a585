use std::f32::consts::PI;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Simulation parameters that control the arena, the critters and the
/// genetic algorithm.
///
/// A single value is built at startup and threaded into [`Scene`](super::scene::Scene),
/// [`Simulator`](super::simulator::Simulator) and
/// [`GeneticAlgorithm`](super::genetic::GeneticAlgorithm). It never changes during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Arena width in viewbox pixels.
    pub scene_width: f32,
    /// Arena height in viewbox pixels.
    pub scene_height: f32,
    /// Number of food things in each arena.
    pub num_food: usize,
    /// Food speed along its diagonal (pixels per second).
    pub food_speed: f32,
    /// Food display radius.
    pub food_size: f32,
    /// Number of danger things in each arena.
    pub num_danger: usize,
    /// Danger speed along its diagonal (pixels per second).
    pub danger_speed: f32,
    /// Danger display size.
    pub danger_size: f32,
    /// Number of critters sharing one arena (batch size of the simulator).
    pub num_critters: usize,
    /// Critter collision radius. Things closer than this are eaten or kill.
    pub critter_size: f32,
    /// Maximum distance at which critters see things and walls.
    pub vision_distance_limit: f32,
    /// Half-angle of the vision cone in radians.
    pub vision_angle_limit: f32,
    /// Maximum distance at which critters smell things.
    pub scent_distance_limit: f32,
    /// Forward speed at full throttle (pixels per second).
    pub base_speed_forward: f32,
    /// Turn rate at full differential (radians per second).
    pub base_speed_angular: f32,
    /// Number of ReLU units in the hidden layer. Must be a multiple of four.
    pub genome_hidden_relu: usize,
    /// All weights are drawn between plus and minus this value.
    pub genome_weight_amplitude: f32,
    /// Number of genomes in a generation.
    pub population_size: usize,
    /// Number of top-fitness genomes added to the breeding pool.
    pub best_keep: usize,
    /// Number of randomly picked survivors added to the breeding pool.
    pub rand_keep: usize,
    /// Number of novel random genomes added to the breeding pool.
    pub rand_new: usize,
    /// How many times each top-fitness genome is added to the pool.
    pub best_priority: usize,
    /// Number of lowest-fitness genomes discarded before selection.
    pub worst_discard: usize,
    /// Simulated seconds per batch.
    pub sim_time: f32,
    /// Simulation time step in milliseconds.
    pub time_step: f32,
    /// Fitness points gained each time food is captured.
    pub food_cost: f32,
    /// Fitness points gained (negative for loss) each time a critter is caught.
    pub danger_cost: f32,
    /// Seconds before the first genome update is published.
    pub first_update: f32,
    /// Seconds between genome updates.
    pub update_interval: f32,
    /// Generations between two log lines.
    pub log_interval: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            scene_width: 800.0,
            scene_height: 500.0,
            num_food: 4,
            food_speed: 10.0,
            food_size: 6.0,
            num_danger: 2,
            danger_speed: 40.0,
            danger_size: 16.0,
            num_critters: 5,
            critter_size: 10.0,
            vision_distance_limit: 600.0,
            vision_angle_limit: 0.7 * PI / 2.0,
            scent_distance_limit: 250.0,
            base_speed_forward: 100.0,
            base_speed_angular: 0.2 * PI,
            genome_hidden_relu: 8,
            genome_weight_amplitude: 20.0,
            population_size: 200,
            best_keep: 9,
            rand_keep: 48,
            rand_new: 6,
            best_priority: 4,
            worst_discard: 50,
            sim_time: 40.0,
            time_step: 200.0,
            food_cost: 1.0,
            danger_cost: -50.0,
            first_update: 2.0,
            update_interval: 20.0,
            log_interval: 50,
        }
    }
}

impl Params {
    /// Number of fixed steps in one simulated batch, rounded up so a
    /// partial last step still runs.
    pub fn sim_steps(&self) -> usize {
        (self.sim_time * 1000.0 / self.time_step).ceil() as usize
    }

    /// Duration of one step in seconds.
    pub fn time_delta(&self) -> f32 {
        self.time_step / 1000.0
    }

    /// Size of the breeding pool built each generation.
    pub fn pool_size(&self) -> usize {
        self.best_keep * self.best_priority + self.rand_keep + self.rand_new
    }

    /// Checks the invariants the simulation relies on.
    pub fn validate(&self) -> Result<()> {
        fn invalid(message: impl Into<String>) -> Result<()> {
            Err(Error::InvalidParams(message.into()))
        }

        if !(self.scene_width >= 1.0 && self.scene_height >= 1.0) {
            return invalid(format!(
                "scene must be at least 1x1, got {}x{}",
                self.scene_width, self.scene_height
            ));
        }
        if self.genome_hidden_relu == 0 || self.genome_hidden_relu % 4 != 0 {
            return invalid(format!(
                "genome_hidden_relu must be a non-zero multiple of 4, got {}",
                self.genome_hidden_relu
            ));
        }
        if !(self.genome_weight_amplitude > 0.0) {
            return invalid("genome_weight_amplitude must be positive");
        }
        if self.num_critters == 0 {
            return invalid("num_critters must be at least 1");
        }
        if self.population_size == 0 {
            return invalid("population_size must be at least 1");
        }
        if self.worst_discard + self.best_keep.max(1) > self.population_size {
            return invalid(format!(
                "population of {} cannot discard {} and still keep {} best",
                self.population_size, self.worst_discard, self.best_keep
            ));
        }
        if self.pool_size() == 0 {
            return invalid("breeding pool would be empty");
        }
        if !(self.time_step > 0.0) || !(self.sim_time >= 0.0) {
            return invalid("time_step must be positive and sim_time non-negative");
        }
        if !(self.vision_distance_limit > 0.0)
            || !(self.scent_distance_limit > 0.0)
            || !(self.vision_angle_limit > 0.0)
        {
            return invalid("vision and scent limits must be positive");
        }
        if !(self.first_update.is_finite() && self.first_update >= 0.0)
            || !(self.update_interval.is_finite() && self.update_interval >= 0.0)
        {
            return invalid("first_update and update_interval must be finite and non-negative");
        }
        Ok(())
    }

    /// Loads parameters from a JSON file and validates them.
    ///
    /// Missing fields fall back to their default values.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Saves parameters to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
