pub mod handler;
pub mod text_input;

pub use handler::{InputHandler, KeyAction, PromptKey};
pub use text_input::{PromptEvent, TextInput};
