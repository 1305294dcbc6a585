//! Generational genetic algorithm.
//!
//! Each generation is simulated, the weakest genomes are dropped, and the
//! rest feed a breeding pool of elites, random survivors and fresh random
//! genomes. The next population is bred from random pairs of the pool.

use rand::Rng;

use super::error::Result;
use super::genome::Genome;
use super::params::Params;
use super::simulator::{SimulationResult, Simulator};

/// Drives successive generations of critter genomes.
///
/// Starts without a population; [`start`](Self::start) or the first
/// [`run`](Self::run) seeds one. From then on every `run` replaces the
/// population with the next generation.
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm {
    simulator: Simulator,
    population: Vec<Genome>,
    generation: u64,
}

impl GeneticAlgorithm {
    /// Creates an orchestrator after validating `params`.
    pub fn new(params: Params) -> Result<Self> {
        Ok(Self {
            simulator: Simulator::new(params)?,
            population: Vec::new(),
            generation: 0,
        })
    }

    /// Parameters shared with the simulator.
    pub fn params(&self) -> &Params {
        self.simulator.params()
    }

    /// Number of generations run since the last [`start`](Self::start).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Population that the next [`run`](Self::run) will simulate.
    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    /// Whether a population has been seeded.
    pub fn is_started(&self) -> bool {
        !self.population.is_empty()
    }

    /// Seeds a random population and resets the generation counter.
    pub fn start(&mut self) {
        let params = self.simulator.params();
        self.population = Genome::random_population(
            params.population_size,
            params.genome_hidden_relu,
            params.genome_weight_amplitude,
        );
        self.generation = 0;
    }

    /// Simulates the current population and breeds the next one.
    ///
    /// Returns this generation's results sorted by fitness, best first.
    pub fn run(&mut self) -> Vec<SimulationResult> {
        if !self.is_started() {
            self.start();
        }

        let results = self.simulator.run(&self.population);
        let pool = self.select_pool(&results);
        self.population = self.generate_next_population(&pool);
        self.generation += 1;

        tracing::debug!(
            generation = self.generation,
            pool = pool.len(),
            best = ?results.first().map(|r| r.fitness),
            "generation complete"
        );

        results
    }

    /// Builds the breeding pool from results sorted best first.
    ///
    /// The `worst_discard` last results are ignored. Each of the `best_keep`
    /// first genomes is added `best_priority` times, then `rand_keep`
    /// survivors drawn with replacement, then `rand_new` random genomes.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `best_keep` results survive the discard, or if
    /// none survive while survivors must be drawn.
    pub fn select_pool(&self, results: &[SimulationResult]) -> Vec<Genome> {
        let params = self.simulator.params();
        let survivors = &results[..results.len().saturating_sub(params.worst_discard)];

        assert!(
            survivors.len() >= params.best_keep,
            "only {} results left after discarding, need {} best",
            survivors.len(),
            params.best_keep
        );
        assert!(
            params.rand_keep == 0 || !survivors.is_empty(),
            "no results left to draw random survivors from"
        );

        let mut rng = rand::rng();
        let mut pool = Vec::with_capacity(params.pool_size());

        for result in &survivors[..params.best_keep] {
            for _ in 0..params.best_priority {
                pool.push(result.genome.clone());
            }
        }

        for _ in 0..params.rand_keep {
            let index = rng.random_range(0..survivors.len());
            pool.push(survivors[index].genome.clone());
        }

        pool.extend(Genome::random_population(
            params.rand_new,
            params.genome_hidden_relu,
            params.genome_weight_amplitude,
        ));

        pool
    }

    /// Breeds `population_size` children from random pairs of the pool.
    ///
    /// Parents are drawn with replacement, so a genome may mate with itself.
    ///
    /// # Panics
    ///
    /// Panics if `pool` is empty.
    pub fn generate_next_population(&self, pool: &[Genome]) -> Vec<Genome> {
        assert!(!pool.is_empty(), "cannot breed from an empty pool");

        let params = self.simulator.params();
        let mut rng = rand::rng();

        (0..params.population_size)
            .map(|_| {
                let mommy = &pool[rng.random_range(0..pool.len())];
                let daddy = &pool[rng.random_range(0..pool.len())];
                mommy.reproduce(daddy, params.genome_weight_amplitude)
            })
            .collect()
    }
}
