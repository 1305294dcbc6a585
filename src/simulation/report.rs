//! Per-generation summaries and the genome updates published to a display.

use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::genome::Genome;
use super::params::Params;
use super::simulator::SimulationResult;

/// Mean fitness of the first `n` results (all of them if there are fewer).
///
/// Returns 0 for an empty selection.
pub fn average_fitness_top(results: &[SimulationResult], n: usize) -> f32 {
    let top = &results[..n.min(results.len())];
    if top.is_empty() {
        return 0.0;
    }
    top.iter().map(|r| r.fitness).sum::<f32>() / top.len() as f32
}

/// What happened in one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    /// 1-based generation index.
    pub generation: u64,
    /// Wall-clock time spent simulating and breeding.
    pub duration: Duration,
    /// Mean fitness of the `best_keep` best genomes.
    pub fitness: f32,
}

impl GenerationSummary {
    /// Summarizes sorted results.
    pub fn new(generation: u64, duration: Duration, results: &[SimulationResult], params: &Params) -> Self {
        Self {
            generation,
            duration,
            fitness: average_fitness_top(results, params.best_keep),
        }
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation: {} Duration (ms): {} Fitness: {:.3}",
            self.generation,
            self.duration.as_millis(),
            self.fitness
        )
    }
}

/// Best genomes of a generation, as sent to the display process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenomeUpdate {
    /// Generation the genomes come from.
    pub generation: u64,
    /// Mean fitness of the generation's best genomes.
    pub fitness: f32,
    /// When the update was produced.
    pub saved_at: DateTime<Utc>,
    /// Best genomes, best first, one per displayed critter.
    pub genomes: Vec<Genome>,
}

impl GenomeUpdate {
    /// Takes the `num_critters` best genomes of sorted results.
    pub fn from_results(summary: &GenerationSummary, results: &[SimulationResult], params: &Params) -> Self {
        Self {
            generation: summary.generation,
            fitness: summary.fitness,
            saved_at: Utc::now(),
            genomes: results
                .iter()
                .take(params.num_critters)
                .map(|r| r.genome.clone())
                .collect(),
        }
    }

    /// Saves the update to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads an update from a JSON file, rejecting malformed genomes.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let update: Self = serde_json::from_str(&json)?;
        for genome in &update.genomes {
            genome.validate()?;
        }
        Ok(update)
    }
}

/// Decides when to publish genome updates and log lines.
#[derive(Debug, Clone)]
pub struct UpdateSchedule {
    update_due: Instant,
    update_interval: Duration,
    log_interval: u64,
}

impl UpdateSchedule {
    /// First update is due `first_update` seconds after `start`.
    pub fn new(params: &Params, start: Instant) -> Self {
        Self {
            update_due: start + Duration::from_secs_f32(params.first_update.max(0.0)),
            update_interval: Duration::from_secs_f32(params.update_interval.max(0.0)),
            log_interval: params.log_interval,
        }
    }

    /// Whether an update should be published at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now > self.update_due
    }

    /// Records an update published at `now`; the next one is due an interval later.
    pub fn mark_sent(&mut self, now: Instant) {
        self.update_due = now + self.update_interval;
    }

    /// Whether `generation` should be logged.
    pub fn should_log(&self, generation: u64) -> bool {
        self.log_interval != 0 && generation % self.log_interval == 0
    }
}
