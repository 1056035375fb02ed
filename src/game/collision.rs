//! Collision predicates.
//!
//! Each check is a pure function of the current positions. The engine decides
//! the order they run in and what happens when one fires.

use super::geometry::{Board, Position};
use super::snake::Snake;

/// Type of terminal collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the board in bounded mode
    Wall,
    /// Head touched its own body
    SelfCollision,
    /// Head touched a survival obstacle
    Obstacle,
}

impl CollisionType {
    pub fn describe(&self) -> &'static str {
        match self {
            CollisionType::Wall => "hit the wall",
            CollisionType::SelfCollision => "bit its own tail",
            CollisionType::Obstacle => "crashed into an obstacle",
        }
    }
}

/// True if the head is outside the board on either axis
pub fn hits_wall(head: Position, board: &Board) -> bool {
    head.x.abs() > board.half_width() || head.y.abs() > board.half_width()
}

/// Teleport a head that crossed the boundary to the opposite edge.
///
/// Returns `None` when the head is already inside the board.
pub fn wrap_correction(head: Position, board: &Board) -> Option<Position> {
    let wrapped = Position::new(board.wrap_coordinate(head.x), board.wrap_coordinate(head.y));
    (wrapped != head).then_some(wrapped)
}

/// True if the head is closer than `radius` to any non-head segment
pub fn hits_self(snake: &Snake, radius: f64) -> bool {
    let head = snake.head();
    snake
        .body_segments()
        .iter()
        .any(|segment| head.is_within(*segment, radius))
}

/// True if the head is closer than `radius` to any obstacle
pub fn hits_obstacle<'a, I>(head: Position, obstacles: I, radius: f64) -> bool
where
    I: IntoIterator<Item = &'a Position>,
{
    obstacles
        .into_iter()
        .any(|obstacle| head.is_within(*obstacle, radius))
}

/// True if the head is close enough to eat the food
pub fn reaches_food(head: Position, food: Position, radius: f64) -> bool {
    head.is_within(food, radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(290)
    }

    #[test]
    fn test_wall_boundary_is_inclusive() {
        assert!(!hits_wall(Position::new(290, 290), &board()));
        assert!(!hits_wall(Position::new(-290, 0), &board()));
        assert!(hits_wall(Position::new(300, 0), &board()));
        assert!(hits_wall(Position::new(0, -291), &board()));
    }

    #[test]
    fn test_wrap_correction() {
        assert_eq!(
            wrap_correction(Position::new(295, 40), &board()),
            Some(Position::new(-290, 40))
        );
        assert_eq!(
            wrap_correction(Position::new(-300, 40), &board()),
            Some(Position::new(290, 40))
        );
        assert_eq!(
            wrap_correction(Position::new(0, 310), &board()),
            Some(Position::new(0, -290))
        );
        assert_eq!(
            wrap_correction(Position::new(0, -310), &board()),
            Some(Position::new(0, 290))
        );
        assert_eq!(wrap_correction(Position::new(100, 100), &board()), None);
    }

    #[test]
    fn test_self_collision_threshold() {
        // Neck at exactly 18 units does not count
        let snake = Snake::new(Position::new(0, 0), 3, 18);
        assert!(!hits_self(&snake, 18.0));

        let snake = Snake::from_segments(vec![
            Position::new(0, 0),
            Position::new(20, 0),
            Position::new(20, 20),
            Position::new(0, 17),
        ]);
        assert!(hits_self(&snake, 18.0));
    }

    #[test]
    fn test_obstacle_collision() {
        let obstacles = vec![Position::new(100, 100), Position::new(-40, 0)];
        assert!(hits_obstacle(Position::new(-40, 19), &obstacles, 20.0));
        assert!(!hits_obstacle(Position::new(-40, 20), &obstacles, 20.0));
        assert!(!hits_obstacle(Position::new(0, 0), &Vec::new(), 20.0));
    }

    #[test]
    fn test_food_reach() {
        let food = Position::new(0, 100);
        assert!(!reaches_food(Position::new(0, 80), food, 20.0));
        assert!(reaches_food(Position::new(0, 100), food, 20.0));
        assert!(reaches_food(Position::new(10, 90), food, 20.0));
    }
}
