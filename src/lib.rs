//! # Critters - Evolving Neural Critters
//!
//! A population of critters learns to chase food and avoid danger in a 2D
//! arena. Each critter is steered by a small feedforward network whose
//! weights are evolved by a genetic algorithm.
//!
//! ## Features
//!
//! - Genomes of two weight matrices with block-wise crossover and sparse mutation
//! - Stateless brain: ReLU hidden layer and a saturating cubic output
//! - Vision cone, scent radius and wall proximity senses
//! - Bouncing food and danger that respawn instead of disappearing
//! - Batched, parallel fitness evaluation
//! - Elitist breeding pool with random survivors and fresh genomes
//!
//! ## Core Modules
//!
//! - [`simulation::genome`] - Genome representation and genetic operators
//! - [`simulation::brain`] - Network evaluation
//! - [`simulation::scene`] - Arena sensing and physics step
//! - [`simulation::simulator`] - Batched fitness evaluation
//! - [`simulation::genetic`] - Generation loop

/// Core simulation logic and data structures.
pub mod simulation {
    /// Bouncing diagonal motion of food and danger.
    pub mod boing;
    /// Neural network evaluation of genomes.
    pub mod brain;
    /// Critter state, movement and fitness.
    pub mod critter;
    /// Error types.
    pub mod error;
    /// Genetic algorithm orchestration.
    pub mod genetic;
    /// Genome representation, crossover and mutation.
    pub mod genome;
    /// Trait for entities with a position.
    ///
    /// The [`locatable::Locatable`] trait is implemented by every entity the
    /// scene senses or respawns ([`thing::Thing`], [`critter::Critter`]).
    pub mod locatable;
    /// Simulation parameters.
    pub mod params;
    /// Generation summaries and genome updates.
    pub mod report;
    /// Arena with sensing and the physics step.
    pub mod scene;
    /// Batched population simulation.
    pub mod simulator;
    /// Food and danger items.
    pub mod thing;
}
