//! Food and danger: the mobile things critters sense.
//!
//! Things are never removed from an arena. An eaten food is moved somewhere
//! else instead, so the number of things stays constant during a run.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::boing::Boing;
use super::locatable::Locatable;
use super::params::Params;

/// What a thing does to a critter that touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThingKind {
    /// Eaten on contact, raises fitness.
    Food,
    /// Kills on contact, lowers fitness.
    Danger,
}

/// A bouncing food or danger item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thing {
    /// Food or danger.
    pub kind: ThingKind,
    /// Motion state.
    pub boing: Boing,
}

impl Thing {
    /// Creates a food item at a random position.
    pub fn new_food(params: &Params) -> Self {
        Self {
            kind: ThingKind::Food,
            boing: Boing::new_random(params.scene_width, params.scene_height, params.food_speed),
        }
    }

    /// Creates a danger item at a random position.
    pub fn new_danger(params: &Params) -> Self {
        Self {
            kind: ThingKind::Danger,
            boing: Boing::new_random(params.scene_width, params.scene_height, params.danger_speed),
        }
    }

    /// Advances the thing by `dt` seconds.
    pub fn update_position(&mut self, dt: f32) {
        self.boing.update_position(dt);
    }

    /// Whether critters eat this thing.
    pub fn is_food(&self) -> bool {
        self.kind == ThingKind::Food
    }
}

impl Locatable for Thing {
    fn pos(&self) -> &Array1<f32> {
        self.boing.pos()
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        self.boing.pos_mut()
    }
}
