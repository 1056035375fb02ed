use super::handler::PromptKey;

const MAX_LEN: usize = 32;

/// Outcome of feeding one key into a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    /// Still typing
    Editing,
    /// Enter pressed; carries the typed text
    Submitted(String),
    /// Esc pressed
    Cancelled,
    Quit,
}

/// Line buffer behind the modal text prompt
#[derive(Debug, Default)]
pub struct TextInput {
    buffer: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn apply(&mut self, key: PromptKey) -> PromptEvent {
        match key {
            PromptKey::Char(c) => {
                if self.buffer.chars().count() < MAX_LEN && !c.is_control() {
                    self.buffer.push(c);
                }
                PromptEvent::Editing
            }
            PromptKey::Backspace => {
                self.buffer.pop();
                PromptEvent::Editing
            }
            PromptKey::Submit => PromptEvent::Submitted(std::mem::take(&mut self.buffer)),
            PromptKey::Cancel => {
                self.buffer.clear();
                PromptEvent::Cancelled
            }
            PromptKey::Quit => PromptEvent::Quit,
            PromptKey::None => PromptEvent::Editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_submit() {
        let mut input = TextInput::new();
        for c in "Hardd".chars() {
            input.apply(PromptKey::Char(c));
        }
        input.apply(PromptKey::Backspace);
        assert_eq!(input.as_str(), "Hard");

        assert_eq!(
            input.apply(PromptKey::Submit),
            PromptEvent::Submitted("Hard".to_string())
        );
        assert_eq!(input.as_str(), "");
    }

    #[test]
    fn test_cancel_clears() {
        let mut input = TextInput::new();
        input.apply(PromptKey::Char('y'));
        assert_eq!(input.apply(PromptKey::Cancel), PromptEvent::Cancelled);
        assert_eq!(input.as_str(), "");
    }

    #[test]
    fn test_length_limit() {
        let mut input = TextInput::new();
        for _ in 0..100 {
            input.apply(PromptKey::Char('x'));
        }
        assert_eq!(input.as_str().len(), MAX_LEN);
    }
}
