use rand::Rng;
use std::time::Instant;

use super::action::Direction;
use super::geometry::Position;
use super::settings::GameSettings;
use super::snake::Snake;

/// Colour tag carried by the food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodColor {
    Red,
    Blue,
    Yellow,
    Green,
}

impl FoodColor {
    pub const ALL: [FoodColor; 4] = [
        FoodColor::Red,
        FoodColor::Blue,
        FoodColor::Yellow,
        FoodColor::Green,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Pick a colour other than `self`
    pub fn random_other<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let others: Vec<FoodColor> = Self::ALL.into_iter().filter(|c| c != self).collect();
        others[rng.gen_range(0..others.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
    pub color: FoodColor,
}

/// Footprint of an obstacle in board units. Only used for drawing;
/// collisions measure from the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleSize {
    pub width: i32,
    pub height: i32,
}

impl ObstacleSize {
    pub const BLOCK: ObstacleSize = ObstacleSize {
        width: 40,
        height: 20,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub position: Position,
    pub size: ObstacleSize,
}

impl Obstacle {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            size: ObstacleSize::BLOCK,
        }
    }
}

/// Current score and the best score seen by this process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreState {
    pub score: u32,
    pub high_score: u32,
}

impl ScoreState {
    /// Start a fresh game, keeping the high score
    pub fn carry_over(high_score: u32) -> Self {
        Self {
            score: 0,
            high_score,
        }
    }

    pub fn record_food_eaten(&mut self, reward: u32) {
        self.score += reward;
        self.high_score = self.high_score.max(self.score);
    }
}

/// Where a game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first direction key; the snake does not move
    Idle,
    Running,
    /// A terminal collision happened; waiting for the replay decision
    GameOver,
    /// The player declined to play again
    Terminated,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Food,
    pub obstacles: Vec<Obstacle>,
    pub score: ScoreState,
    pub settings: GameSettings,
    pub phase: GamePhase,
    pub ticks: u32,
    /// When the last survival obstacle spawned; armed on the first running tick
    pub last_obstacle_spawn: Option<Instant>,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food, settings: GameSettings, high_score: u32) -> Self {
        Self {
            snake,
            direction: Direction::Stopped,
            food,
            obstacles: Vec::new(),
            score: ScoreState::carry_over(high_score),
            settings,
            phase: GamePhase::Idle,
            ticks: 0,
            last_obstacle_spawn: None,
        }
    }

    /// Apply a direction request.
    ///
    /// Reversals and `Stopped` are rejected. An accepted request moves an idle
    /// game into `Running`. Returns whether the direction was accepted.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if !requested.is_moving() || self.direction.is_opposite(requested) {
            return false;
        }
        if !matches!(self.phase, GamePhase::Idle | GamePhase::Running) {
            return false;
        }

        self.direction = requested;
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Running;
        }
        true
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver | GamePhase::Terminated)
    }

    pub fn obstacle_positions(&self) -> impl Iterator<Item = &Position> {
        self.obstacles.iter().map(|o| &o.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::settings::{Level, WallMode};
    use rand::{SeedableRng, rngs::StdRng};

    fn idle_state() -> GameState {
        GameState::new(
            Snake::new(Position::new(0, 0), 3, 18),
            Food {
                position: Position::new(0, 100),
                color: FoodColor::Red,
            },
            GameSettings::new(Level::Easy, WallMode::Bounded, false),
            0,
        )
    }

    #[test]
    fn test_first_input_starts_game() {
        let mut state = idle_state();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.direction, Direction::Stopped);

        assert!(state.set_direction(Direction::Left));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.direction, Direction::Left);
    }

    #[test]
    fn test_reversal_rejected() {
        for (first, reverse) in [
            (Direction::Up, Direction::Down),
            (Direction::Down, Direction::Up),
            (Direction::Left, Direction::Right),
            (Direction::Right, Direction::Left),
        ] {
            let mut state = idle_state();
            assert!(state.set_direction(first));
            assert!(!state.set_direction(reverse));
            assert_eq!(state.direction, first);
        }
    }

    #[test]
    fn test_stopped_request_rejected() {
        let mut state = idle_state();
        assert!(!state.set_direction(Direction::Stopped));
        assert_eq!(state.phase, GamePhase::Idle);
    }

    #[test]
    fn test_no_steering_after_game_over() {
        let mut state = idle_state();
        state.set_direction(Direction::Up);
        state.phase = GamePhase::GameOver;
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.direction, Direction::Up);
    }

    #[test]
    fn test_score_tracking() {
        let mut score = ScoreState::carry_over(30);
        score.record_food_eaten(10);
        assert_eq!(score.score, 10);
        assert_eq!(score.high_score, 30);

        for _ in 0..3 {
            score.record_food_eaten(10);
        }
        assert_eq!(score.score, 40);
        assert_eq!(score.high_score, 40);
    }

    #[test]
    fn test_random_other_color_differs() {
        let mut rng = StdRng::seed_from_u64(7);
        for color in FoodColor::ALL {
            for _ in 0..20 {
                assert_ne!(color.random_other(&mut rng), color);
            }
        }
    }
}
