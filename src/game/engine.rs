use std::time::Instant;
use tracing::{debug, info};

use super::{
    action::Action,
    collision::{self, CollisionType},
    config::GameConfig,
    geometry::Position,
    settings::{GameSettings, WallMode},
    snake::Snake,
    spawner::Spawner,
    state::{Food, FoodColor, GamePhase, GameState},
};

/// Information about a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Whether the head was teleported across the board edge
    pub wrapped: bool,
    /// Whether a survival obstacle appeared this step
    pub obstacle_spawned: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the snake actually moved
    pub moved: bool,
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle(terminated: bool) -> Self {
        Self {
            moved: false,
            terminated,
            info: StepInfo::default(),
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    spawner: Spawner,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let spawner = Spawner::new(config.step);
        Self { config, spawner }
    }

    /// Engine whose food and obstacle placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        let spawner = Spawner::seeded(config.step, seed);
        Self { config, spawner }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Create a fresh idle game, carrying over the high score
    pub fn new_game(&mut self, settings: GameSettings, high_score: u32) -> GameState {
        let snake = Snake::new(
            Position::ORIGIN,
            self.config.initial_snake_length,
            self.config.initial_segment_spacing,
        );
        let food = self.spawner.initial_food(self.config.initial_food);

        info!(%settings, high_score, "new game");
        GameState::new(snake, food, settings, high_score)
    }

    /// The board shown behind the first settings prompt, before any game has
    /// been chosen. Leaves the spawner untouched and logs nothing.
    pub fn preview_game(&self) -> GameState {
        let snake = Snake::new(
            Position::ORIGIN,
            self.config.initial_snake_length,
            self.config.initial_segment_spacing,
        );
        let food = Food {
            position: self.config.initial_food,
            color: FoodColor::Red,
        };
        GameState::new(snake, food, GameSettings::default(), 0)
    }

    /// Execute one tick of the game.
    ///
    /// `now` drives the survival obstacle timer.
    pub fn step(&mut self, state: &mut GameState, action: Action, now: Instant) -> StepResult {
        if state.is_over() {
            return StepResult::idle(true);
        }

        if let Action::Move(direction) = action {
            if state.set_direction(direction) {
                debug!(?direction, "direction changed");
            }
        }

        if !state.is_running() {
            return StepResult::idle(false);
        }

        if state.last_obstacle_spawn.is_none() {
            state.last_obstacle_spawn = Some(now);
        }

        debug_assert!(!state.snake.is_empty(), "snake has no segments");

        // Body first so every segment reads its predecessor's pre-tick position
        state.snake.follow_body();
        state.snake.advance_head(state.direction, self.config.step);
        state.ticks += 1;

        let mut info = StepInfo::default();

        if let Some(collision_type) = self.check_collision(state, &mut info) {
            state.phase = GamePhase::GameOver;
            info!(
                cause = collision_type.describe(),
                score = state.score.score,
                high_score = state.score.high_score,
                ticks = state.ticks,
                "game over"
            );

            info.collision_type = Some(collision_type);
            return StepResult {
                moved: true,
                terminated: true,
                info,
            };
        }

        info.ate_food = self.check_food(state);
        info.obstacle_spawned = self.check_obstacle_timer(state, now);

        StepResult {
            moved: true,
            terminated: false,
            info,
        }
    }

    /// Run the terminal checks in priority order: wall (or wrap), self, obstacle
    fn check_collision(&self, state: &mut GameState, info: &mut StepInfo) -> Option<CollisionType> {
        let board = self.config.board();
        let head = state.snake.head();

        match state.settings.wall_mode {
            WallMode::Bounded => {
                if collision::hits_wall(head, &board) {
                    return Some(CollisionType::Wall);
                }
            }
            WallMode::Wrap => {
                if let Some(wrapped) = collision::wrap_correction(head, &board) {
                    state.snake.set_head(wrapped);
                    info.wrapped = true;
                }
            }
        }

        let head = state.snake.head();
        debug_assert!(board.contains(head), "head {:?} escaped the board", head);

        if collision::hits_self(&state.snake, self.config.self_radius) {
            return Some(CollisionType::SelfCollision);
        }

        if collision::hits_obstacle(head, state.obstacle_positions(), self.config.obstacle_radius) {
            return Some(CollisionType::Obstacle);
        }

        None
    }

    fn check_food(&mut self, state: &mut GameState) -> bool {
        if !collision::reaches_food(state.snake.head(), state.food.position, self.config.food_radius)
        {
            return false;
        }

        state.food = self
            .spawner
            .relocate_food(&state.food, self.config.food_spawn_range);
        state.snake.grow();
        state.score.record_food_eaten(self.config.food_reward);

        debug!(
            score = state.score.score,
            length = state.snake.len(),
            food = ?state.food.position,
            "food eaten"
        );
        true
    }

    fn check_obstacle_timer(&mut self, state: &mut GameState, now: Instant) -> bool {
        if !state.settings.survival_mode {
            return false;
        }

        let Some(last) = state.last_obstacle_spawn else {
            return false;
        };
        if now.saturating_duration_since(last) <= self.config.obstacle_interval() {
            return false;
        }

        let obstacle = self.spawner.obstacle(self.config.obstacle_spawn_range);
        state.obstacles.push(obstacle);
        state.last_obstacle_spawn = Some(now);

        info!(
            position = ?obstacle.position,
            total = state.obstacles.len(),
            "obstacle spawned"
        );
        true
    }
}
