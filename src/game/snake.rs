use super::action::Direction;
use super::geometry::Position;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// Create a horizontal snake of `length` segments trailing to the left of
    /// `head`, `spacing` units apart
    pub fn new(head: Position, length: usize, spacing: i32) -> Self {
        assert!(length >= 1, "a snake needs at least one segment");

        let body = (0..length as i32)
            .map(|i| head.moved_by(-spacing * i, 0))
            .collect();

        Self { body }
    }

    /// Build a snake from explicit segment positions (head first)
    pub fn from_segments(body: Vec<Position>) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Shift every non-head segment onto the position its predecessor held.
    ///
    /// Runs from the tail towards the head so each source is read before it is
    /// overwritten. Call this before [`Snake::advance_head`] within a tick.
    pub fn follow_body(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
    }

    /// Move the head one `step` in `direction`, returning the new head
    pub fn advance_head(&mut self, direction: Direction, step: i32) -> Position {
        let head = self.head().moved_in_direction(direction, step);
        self.body[0] = head;
        head
    }

    /// Replace the head position (used by wrap-around correction)
    pub fn set_head(&mut self, head: Position) {
        self.body[0] = head;
    }

    /// Append one segment at the current tail position
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
