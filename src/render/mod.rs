pub mod renderer;

pub use renderer::{BoardView, Renderer};
