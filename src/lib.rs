//! Snake Arcade - a terminal Snake game with wrap-around and survival modes
//!
//! This library provides:
//! - Core game logic (game module), free of I/O and rendering
//! - Session control: settings prompts, scores and the restart cycle (session module)
//! - TUI rendering and keyboard handling (render and input modules)
//! - The interactive run loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod session;
