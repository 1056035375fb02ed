use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::geometry::{Board, Position};

/// Largest accepted board, keeping every position sum well inside `i32`
pub const MAX_BOARD_HALF_WIDTH: i32 = 1_000_000;

/// Most cells the renderer will draw along one axis
pub const MAX_BOARD_CELLS: i32 = 201;

/// Tunable constants of the simulation.
///
/// Every field has a default matching the classic arcade feel, so a config file
/// only needs to list the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distance the head travels per tick, in units
    pub step: i32,
    /// Half the side length of the square board
    pub board_half_width: i32,
    /// Food spawns within `±food_spawn_range` on both axes
    pub food_spawn_range: i32,
    /// Obstacles spawn within `±obstacle_spawn_range` on both axes
    pub obstacle_spawn_range: i32,

    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Horizontal gap between the segments of a freshly created snake
    pub initial_segment_spacing: i32,
    /// Where the food sits at the start of every game
    pub initial_food: Position,

    // Contact thresholds (strict `<` on Euclidean distance)
    pub food_radius: f64,
    pub self_radius: f64,
    pub obstacle_radius: f64,

    /// Points awarded per food
    pub food_reward: u32,
    /// Seconds between obstacle spawns in survival mode
    pub obstacle_interval_secs: u64,
    /// How long the game-over banner stays up before the replay prompt
    pub game_over_pause_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            step: 20,
            board_half_width: 290,
            food_spawn_range: 280,
            obstacle_spawn_range: 260,
            initial_snake_length: 3,
            initial_segment_spacing: 18,
            initial_food: Position::new(0, 100),
            food_radius: 20.0,
            self_radius: 18.0,
            obstacle_radius: 20.0,
            food_reward: 10,
            obstacle_interval_secs: 30,
            game_over_pause_ms: 1500,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file; missing fields fall back to defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        config
            .validate()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Invalid config in {:?}", path))?;
        Ok(config)
    }

    /// Validate configuration parameters
    ///
    /// # Returns
    ///
    /// `Ok(())` if all parameters are valid, `Err(String)` with an error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if self.board_half_width <= 0 || self.board_half_width > MAX_BOARD_HALF_WIDTH {
            return Err(format!(
                "board_half_width must be in [1, {}], got {}",
                MAX_BOARD_HALF_WIDTH, self.board_half_width
            ));
        }

        if self.step <= 0 || self.step > self.board_half_width {
            return Err(format!(
                "step must be in [1, {}], got {}",
                self.board_half_width, self.step
            ));
        }

        let cells = 2 * self.board_half_width / self.step + 1;
        if cells > MAX_BOARD_CELLS {
            return Err(format!(
                "board is {} cells across, at most {} fit on screen",
                cells, MAX_BOARD_CELLS
            ));
        }

        for (name, range) in [
            ("food_spawn_range", self.food_spawn_range),
            ("obstacle_spawn_range", self.obstacle_spawn_range),
        ] {
            if range <= 0 || range > self.board_half_width {
                return Err(format!(
                    "{} must be in [1, {}], got {}",
                    name, self.board_half_width, range
                ));
            }
        }

        if self.initial_snake_length == 0 {
            return Err("initial_snake_length must be at least 1".to_string());
        }

        if self.initial_segment_spacing <= 0 || self.initial_segment_spacing > self.step {
            return Err(format!(
                "initial_segment_spacing must be in [1, {}], got {}",
                self.step, self.initial_segment_spacing
            ));
        }

        // The tail of a fresh snake must still be on the board
        let reach = (self.initial_snake_length - 1)
            .checked_mul(self.initial_segment_spacing as usize)
            .filter(|&reach| reach <= self.board_half_width as usize);
        if reach.is_none() {
            return Err(format!(
                "a snake of {} segments spaced {} apart does not fit on the board",
                self.initial_snake_length, self.initial_segment_spacing
            ));
        }

        if !self.board().contains(self.initial_food) {
            return Err(format!(
                "initial_food {:?} lies outside the board",
                self.initial_food
            ));
        }

        for (name, radius) in [
            ("food_radius", self.food_radius),
            ("self_radius", self.self_radius),
            ("obstacle_radius", self.obstacle_radius),
        ] {
            if radius.is_nan() || radius <= 0.0 {
                return Err(format!("{} must be positive, got {}", name, radius));
            }
        }

        if self.obstacle_interval_secs == 0 {
            return Err("obstacle_interval_secs must be at least 1".to_string());
        }

        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.board_half_width)
    }

    pub fn obstacle_interval(&self) -> Duration {
        Duration::from_secs(self.obstacle_interval_secs)
    }

    pub fn game_over_pause(&self) -> Duration {
        Duration::from_millis(self.game_over_pause_ms)
    }
}
