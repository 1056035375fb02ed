//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end drives it one tick at a time.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod settings;
pub mod snake;
pub mod spawner;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use collision::CollisionType;
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use geometry::{Board, Position};
pub use settings::{GameSettings, Level, Prompt, SettingsFlow, WallMode};
pub use snake::Snake;
pub use state::{Food, FoodColor, GamePhase, GameState, Obstacle, ObstacleSize, ScoreState};
