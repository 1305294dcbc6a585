//! Trait for arena entities that have a position.
//!
//! Things and critters implement it so the scene can sense and respawn them
//! uniformly.

use ndarray::Array1;
use rand::Rng;

/// Trait for entities with a position inside the arena.
pub trait Locatable {
    /// Returns a reference to the entity's position.
    ///
    /// # Returns
    ///
    /// A reference to the 2D position vector `[x, y]`.
    fn pos(&self) -> &Array1<f32>;

    /// Returns a mutable reference to the entity's position.
    fn pos_mut(&mut self) -> &mut Array1<f32>;

    /// Horizontal coordinate.
    fn x(&self) -> f32 {
        self.pos()[0]
    }

    /// Vertical coordinate (grows downwards).
    fn y(&self) -> f32 {
        self.pos()[1]
    }

    /// Moves the entity to `(x, y)`.
    fn set_position(&mut self, x: f32, y: f32) {
        let pos = self.pos_mut();
        pos[0] = x;
        pos[1] = y;
    }

    /// Moves the entity to a uniform random position in `[0, width) x [0, height)`.
    ///
    /// Used to simulate an entity disappearing and a new one appearing elsewhere.
    fn set_random_position(&mut self, width: f32, height: f32) {
        let mut rng = rand::rng();
        let x = width * rng.random::<f32>();
        let y = height * rng.random::<f32>();
        self.set_position(x, y);
    }
}
