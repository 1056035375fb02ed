//! Coordinate space shared by every entity on the board.
//!
//! Positions are measured in board units with the origin at the centre of the
//! play area, x growing right and y growing up. Movement happens in whole steps,
//! collisions are decided by Euclidean distance.

use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A position on the board, in units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one `step` in a direction. `Stopped` leaves it unchanged.
    pub fn moved_in_direction(&self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * step, dy * step)
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// True if `other` is strictly closer than `threshold` units
    pub fn is_within(&self, other: Position, threshold: f64) -> bool {
        self.distance(other) < threshold
    }
}

/// The square play area, centred on the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    half_width: i32,
}

impl Board {
    pub fn new(half_width: i32) -> Self {
        assert!(half_width > 0, "board half-width must be positive");
        Self { half_width }
    }

    pub fn half_width(&self) -> i32 {
        self.half_width
    }

    /// True if the position lies on or inside the boundary on both axes
    pub fn contains(&self, pos: Position) -> bool {
        pos.x.abs() <= self.half_width && pos.y.abs() <= self.half_width
    }

    /// Reflect a coordinate that crossed the boundary to the opposite edge.
    /// Coordinates inside the boundary are returned unchanged.
    pub fn wrap_coordinate(&self, value: i32) -> i32 {
        if value > self.half_width {
            -self.half_width
        } else if value < -self.half_width {
            self.half_width
        } else {
            value
        }
    }
}
