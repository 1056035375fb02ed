//! Session controller: settings prompts, score carry-over and the restart
//! cycle around individual games.

pub mod controller;
pub mod mailbox;

pub use controller::{Screen, Session};
pub use mailbox::DirectionMailbox;
