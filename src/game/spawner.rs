//! Random placement of food and obstacles.
//!
//! Positions are drawn uniformly from the step lattice inside a square range.
//! Placement does not avoid the snake or other obstacles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::geometry::Position;
use super::state::{Food, FoodColor, Obstacle};

pub struct Spawner {
    rng: StdRng,
    step: i32,
}

impl Spawner {
    pub fn new(step: i32) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            step,
        }
    }

    /// Deterministic spawner for reproducible games and tests
    pub fn seeded(step: i32, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            step,
        }
    }

    /// Uniform position on the lattice within `±range` on both axes
    pub fn random_position(&mut self, range: i32) -> Position {
        let cells = range / self.step;
        let x = self.rng.gen_range(-cells..=cells) * self.step;
        let y = self.rng.gen_range(-cells..=cells) * self.step;
        Position::new(x, y)
    }

    /// Food for the start of a game: fixed position, random colour
    pub fn initial_food(&mut self, position: Position) -> Food {
        Food {
            position,
            color: FoodColor::random(&mut self.rng),
        }
    }

    /// Food moved to a new random spot with a different colour
    pub fn relocate_food(&mut self, food: &Food, range: i32) -> Food {
        Food {
            position: self.random_position(range),
            color: food.color.random_other(&mut self.rng),
        }
    }

    pub fn obstacle(&mut self, range: i32) -> Obstacle {
        Obstacle::new(self.random_position(range))
    }
}
