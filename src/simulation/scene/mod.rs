//! One arena: its things, its critters, and the sense/move step.
//!
//! Each step advances every thing, then moves every critter with the motor
//! output computed in the previous step, then senses and evaluates the
//! brains again. Movement therefore always lags perception by one step.

mod scent;
mod vision;
mod wall;

use std::collections::VecDeque;

use super::brain::Stimuli;
use super::critter::Critter;
use super::genome::Genome;
use super::locatable::Locatable;
use super::params::Params;
use super::thing::{Thing, ThingKind};

pub use scent::Odor;
pub use vision::{Sighting, ViewFrame, falloff};
pub use wall::sense_wall;

/// An arena with a fixed set of things and a queue of critters.
#[derive(Debug, Clone)]
pub struct Scene {
    params: Params,
    things: Vec<Thing>,
    critters: VecDeque<Critter>,
}

impl Scene {
    /// Creates an arena with `num_food` food and `num_danger` dangers and no critters.
    ///
    /// Training scenes start empty: critters are added, simulated, then
    /// harvested batch after batch.
    pub fn new(params: &Params) -> Self {
        let things = (0..params.num_food)
            .map(|_| Thing::new_food(params))
            .chain((0..params.num_danger).map(|_| Thing::new_danger(params)))
            .collect();

        Self {
            params: params.clone(),
            things,
            critters: VecDeque::new(),
        }
    }

    /// Creates an arena populated with `num_critters` random critters, as shown live.
    pub fn with_random_critters(params: &Params) -> Self {
        let mut scene = Self::new(params);
        for genome in Genome::random_population(
            params.num_critters,
            params.genome_hidden_relu,
            params.genome_weight_amplitude,
        ) {
            scene.add_critter(genome);
        }
        scene
    }

    /// Parameters of this arena.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Things in the arena, food first.
    pub fn things(&self) -> &[Thing] {
        &self.things
    }

    /// Mutable access to the things, e.g. to place them.
    pub fn things_mut(&mut self) -> &mut [Thing] {
        &mut self.things
    }

    /// Critters in insertion order.
    pub fn critters(&self) -> &VecDeque<Critter> {
        &self.critters
    }

    /// Mutable access to the critters.
    pub fn critters_mut(&mut self) -> &mut VecDeque<Critter> {
        &mut self.critters
    }

    /// Places a new critter driven by `genome` at a random position.
    pub fn add_critter(&mut self, genome: Genome) {
        let critter = Critter::new_random(genome, self.params.scene_width, self.params.scene_height);
        self.critters.push_back(critter);
    }

    /// Removes and returns the oldest critter.
    pub fn harvest_critter(&mut self) -> Option<Critter> {
        self.critters.pop_front()
    }

    /// Swaps new genomes into the existing critters, first to last.
    ///
    /// Critters keep their position and heading. Genomes beyond the number
    /// of critters are ignored; critters beyond the number of genomes keep
    /// their current genome.
    pub fn update_critter_genomes(&mut self, genomes: impl IntoIterator<Item = Genome>) {
        for (critter, genome) in self.critters.iter_mut().zip(genomes) {
            critter.set_genome(genome);
        }
    }

    /// Advances the arena by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        for thing in &mut self.things {
            thing.update_position(dt);
        }

        for critter in &mut self.critters {
            critter.update_position(dt, &self.params);
        }

        for critter in &mut self.critters {
            // No stimuli if the critter was caught this step.
            if let Some(stimuli) = compute_stimuli(critter, &mut self.things, &self.params) {
                critter.update_control(&stimuli);
            }
        }
    }

    /// Senses the arena for the critter at `index`, resolving its collisions.
    ///
    /// Returns `None` if there is no such critter or if it was caught.
    pub fn compute_stimuli(&mut self, index: usize) -> Option<Stimuli> {
        let critter = self.critters.get_mut(index)?;
        compute_stimuli(critter, &mut self.things, &self.params)
    }
}

/// Computes what `critter` perceives and resolves its collisions with things.
///
/// Touching food counts a capture and moves the food elsewhere; sensing goes
/// on. Touching a danger counts a death, moves the critter elsewhere and
/// returns `None` right away: the critter senses nothing else this step.
pub fn compute_stimuli(critter: &mut Critter, things: &mut [Thing], params: &Params) -> Option<Stimuli> {
    let frame = ViewFrame::new(critter.heading);
    let size_squared = params.critter_size * params.critter_size;
    let vision_squared = params.vision_distance_limit * params.vision_distance_limit;
    let scent_squared = params.scent_distance_limit * params.scent_distance_limit;

    let mut food = Sighting::default();
    let mut danger = Sighting::default();
    let mut food_odor = Odor::default();
    let mut danger_odor = Odor::default();

    for thing in things.iter_mut() {
        let dx = thing.x() - critter.x();
        let dy = thing.y() - critter.y();
        let distance_squared = dx * dx + dy * dy;

        if distance_squared < size_squared {
            match thing.kind {
                ThingKind::Food => {
                    critter.eat();
                    thing.set_random_position(params.scene_width, params.scene_height);
                    continue;
                }
                ThingKind::Danger => {
                    critter.kill();
                    critter.set_random_position(params.scene_width, params.scene_height);
                    return None;
                }
            }
        }

        if distance_squared >= vision_squared && distance_squared >= scent_squared {
            continue;
        }

        let distance = distance_squared.sqrt();
        let (sighting, odor) = match thing.kind {
            ThingKind::Food => (&mut food, &mut food_odor),
            ThingKind::Danger => (&mut danger, &mut danger_odor),
        };

        if distance < params.vision_distance_limit {
            let view_angle = frame.view_angle(dx, dy);
            if view_angle.abs() < params.vision_angle_limit {
                sighting.observe(
                    falloff(distance, params.vision_distance_limit),
                    view_angle / params.vision_angle_limit,
                );
            }
        }

        if distance < params.scent_distance_limit {
            odor.observe(distance, params.scent_distance_limit);
        }
    }

    let wall = sense_wall(
        critter.x(),
        critter.y(),
        frame,
        params.scene_width,
        params.scene_height,
        params.vision_distance_limit,
    );

    Some(Stimuli {
        food_intensity: food.intensity,
        food_angle: food.angle,
        danger_intensity: danger.intensity,
        danger_angle: danger.angle,
        wall_intensity: wall.intensity,
        wall_angle: wall.angle,
        food_odor: food_odor.0,
        danger_odor: danger_odor.0,
    })
}
