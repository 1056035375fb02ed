//! Per-game settings and the prompt flow that collects them.
//!
//! Answers are matched case-insensitively on their first letter. Empty,
//! cancelled or unrecognised answers fall back to the defaults, so choosing
//! settings can never fail.

use std::fmt;
use std::time::Duration;

/// Difficulty level; controls the delay between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub fn tick_delay(&self) -> Duration {
        match self {
            Level::Easy => Duration::from_millis(150),
            Level::Medium => Duration::from_millis(100),
            Level::Hard => Duration::from_millis(70),
        }
    }

    /// `"m…"` selects Medium, `"h…"` selects Hard, anything else is Easy
    pub fn from_answer(answer: Option<&str>) -> Self {
        match first_letter(answer) {
            Some('m') => Level::Medium,
            Some('h') => Level::Hard,
            _ => Level::Easy,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
        };
        f.write_str(name)
    }
}

/// What happens when the head crosses the board edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallMode {
    /// Crossing the edge ends the game
    #[default]
    Bounded,
    /// Crossing the edge teleports to the opposite edge
    Wrap,
}

impl WallMode {
    /// `"i…"` (infinite) selects Wrap, anything else is Bounded
    pub fn from_answer(answer: Option<&str>) -> Self {
        match first_letter(answer) {
            Some('i') => WallMode::Wrap,
            _ => WallMode::Bounded,
        }
    }
}

impl fmt::Display for WallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallMode::Bounded => f.write_str("Classic"),
            WallMode::Wrap => f.write_str("Infinite"),
        }
    }
}

/// Settings fixed for the duration of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameSettings {
    pub level: Level,
    pub wall_mode: WallMode,
    pub survival_mode: bool,
}

impl GameSettings {
    /// Build settings, dropping survival mode unless walls wrap
    pub fn new(level: Level, wall_mode: WallMode, survival_mode: bool) -> Self {
        Self {
            level,
            wall_mode,
            survival_mode: survival_mode && wall_mode == WallMode::Wrap,
        }
    }

    pub fn tick_delay(&self) -> Duration {
        self.level.tick_delay()
    }
}

impl fmt::Display for GameSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.level, self.wall_mode)?;
        if self.survival_mode {
            f.write_str(" / Survival")?;
        }
        Ok(())
    }
}

/// `"y…"` is yes, anything else (including no answer) is no
pub fn is_yes(answer: Option<&str>) -> bool {
    first_letter(answer) == Some('y')
}

fn first_letter(answer: Option<&str>) -> Option<char> {
    answer
        .and_then(|s| s.chars().next())
        .map(|c| c.to_ascii_lowercase())
}

/// One question shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Level,
    WallMode,
    Survival,
    PlayAgain,
}

impl Prompt {
    pub fn title(&self) -> &'static str {
        match self {
            Prompt::Level => "Choose Level",
            Prompt::WallMode => "Game Mode",
            Prompt::Survival => "Survival Mode",
            Prompt::PlayAgain => "Game Over",
        }
    }

    pub fn question(&self) -> &'static str {
        match self {
            Prompt::Level => "Enter Easy / Medium / Hard:",
            Prompt::WallMode => "Choose Mode: Classic (with walls) / Infinite (no walls):",
            Prompt::Survival => "Enable Survival Mode? (y/n):",
            Prompt::PlayAgain => "Play again? (y/n):",
        }
    }
}

/// Walks the player through level, wall mode and (for wrap mode) survival
#[derive(Debug, Clone, Default)]
pub struct SettingsFlow {
    level: Option<Level>,
    wall_mode: Option<WallMode>,
    survival_mode: Option<bool>,
}

impl SettingsFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question still waiting for an answer, or `None` once complete
    pub fn current_prompt(&self) -> Option<Prompt> {
        match (self.level, self.wall_mode, self.survival_mode) {
            (None, _, _) => Some(Prompt::Level),
            (Some(_), None, _) => Some(Prompt::WallMode),
            (Some(_), Some(WallMode::Wrap), None) => Some(Prompt::Survival),
            _ => None,
        }
    }

    /// Record the answer to the current prompt. `None` means cancelled.
    pub fn answer(&mut self, answer: Option<&str>) {
        match self.current_prompt() {
            Some(Prompt::Level) => self.level = Some(Level::from_answer(answer)),
            Some(Prompt::WallMode) => self.wall_mode = Some(WallMode::from_answer(answer)),
            Some(Prompt::Survival) => self.survival_mode = Some(is_yes(answer)),
            Some(Prompt::PlayAgain) | None => {}
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_prompt().is_none()
    }

    /// The chosen settings, with defaults for anything left unanswered
    pub fn settings(&self) -> GameSettings {
        GameSettings::new(
            self.level.unwrap_or_default(),
            self.wall_mode.unwrap_or_default(),
            self.survival_mode.unwrap_or(false),
        )
    }
}
