use crate::game::{Action, Direction};

/// Single-slot buffer between keyboard input and the tick loop.
///
/// Input handlers only ever post here; the tick takes the pending direction
/// once. A newer key press replaces an older one that has not been consumed.
#[derive(Debug, Default)]
pub struct DirectionMailbox {
    pending: Option<Direction>,
}

impl DirectionMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Take the pending request as the action for this tick
    pub fn take(&mut self) -> Action {
        Action::from(self.pending.take())
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
