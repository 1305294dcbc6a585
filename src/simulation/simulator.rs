//! Batched fitness evaluation of a population.
//!
//! Genomes are simulated `num_critters` at a time. Critters of a batch share
//! one arena; batches never interact, so they run in parallel with rayon.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::genome::Genome;
use super::params::Params;
use super::scene::Scene;

/// Fitness reached by one genome during a simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Fitness score.
    pub fitness: f32,
    /// Genome that reached it.
    pub genome: Genome,
}

/// Runs populations through arena simulations.
#[derive(Debug, Clone)]
pub struct Simulator {
    params: Params,
}

impl Simulator {
    /// Creates a simulator after validating `params`.
    pub fn new(params: Params) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Parameters used for every batch.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Simulates every genome and returns the results sorted by fitness, best first.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty.
    pub fn run(&self, population: &[Genome]) -> Vec<SimulationResult> {
        assert!(!population.is_empty(), "cannot simulate an empty population");

        let mut results: Vec<SimulationResult> = population
            .par_chunks(self.params.num_critters)
            .flat_map_iter(|batch| self.run_batch(batch))
            .collect();

        sort_by_fitness(&mut results);
        results
    }

    /// Simulates one batch in a fresh arena and harvests it in insertion order.
    pub fn run_batch(&self, batch: &[Genome]) -> Vec<SimulationResult> {
        let mut scene = Scene::new(&self.params);
        for genome in batch {
            scene.add_critter(genome.clone());
        }

        let dt = self.params.time_delta();
        for _ in 0..self.params.sim_steps() {
            scene.step(dt);
        }

        let mut results = Vec::with_capacity(batch.len());
        while let Some(critter) = scene.harvest_critter() {
            let fitness = critter.compute_fitness(&self.params);
            results.push(SimulationResult {
                fitness,
                genome: critter.into_genome(),
            });
        }

        tracing::trace!(
            critters = results.len(),
            best = results.iter().map(|r| r.fitness).fold(f32::NEG_INFINITY, f32::max),
            "batch simulated"
        );

        results
    }
}

/// Sorts results by descending fitness.
pub fn sort_by_fitness(results: &mut [SimulationResult]) {
    results.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
}
