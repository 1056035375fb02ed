use std::time::{Duration, Instant};
use tracing::info;

use super::mailbox::DirectionMailbox;
use crate::game::settings::is_yes;
use crate::game::{
    Direction, GameEngine, GamePhase, GameSettings, GameState, Prompt, SettingsFlow, StepResult,
};
use crate::metrics::GameMetrics;

/// What the player is looking at
#[derive(Debug, Clone)]
pub enum Screen {
    /// Settings prompts are open; the simulation is suspended
    Settings(SettingsFlow),
    /// The board is live (idle until the first direction key, then running)
    Playing,
    /// Final score banner, shown for a short pause before the replay prompt
    GameOver { since: Instant },
    /// Waiting for the play-again answer
    PlayAgain,
    /// The player is done; the run loop should stop
    Exit,
}

/// Owns one game at a time plus everything that outlives it: the high score,
/// the settings flow and the restart cycle.
pub struct Session {
    engine: GameEngine,
    state: GameState,
    screen: Screen,
    mailbox: DirectionMailbox,
    metrics: GameMetrics,
}

impl Session {
    /// Start a session at the settings prompts
    pub fn new(engine: GameEngine) -> Self {
        let state = engine.preview_game();
        Self {
            engine,
            state,
            screen: Screen::Settings(SettingsFlow::new()),
            mailbox: DirectionMailbox::new(),
            metrics: GameMetrics::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut GameMetrics {
        &mut self.metrics
    }

    pub fn high_score(&self) -> u32 {
        self.state.score.high_score
    }

    /// Delay between ticks for the current game's level
    pub fn tick_delay(&self) -> Duration {
        self.state.settings.tick_delay()
    }

    /// The question currently waiting for the player, if any
    pub fn active_prompt(&self) -> Option<Prompt> {
        match &self.screen {
            Screen::Settings(flow) => flow.current_prompt(),
            Screen::PlayAgain => Some(Prompt::PlayAgain),
            _ => None,
        }
    }

    /// Ticks only advance the simulation while the board is live
    pub fn is_ticking(&self) -> bool {
        matches!(self.screen, Screen::Playing)
    }

    pub fn should_exit(&self) -> bool {
        matches!(self.screen, Screen::Exit)
    }

    /// Queue a direction for the next tick. Ignored outside play.
    pub fn steer(&mut self, direction: Direction) {
        if self.is_ticking() {
            self.mailbox.post(direction);
        }
    }

    /// Answer the active prompt. `None` means the prompt was cancelled.
    pub fn answer_prompt(&mut self, answer: Option<&str>) {
        match &mut self.screen {
            Screen::Settings(flow) => {
                flow.answer(answer);
                if flow.is_complete() {
                    let settings = flow.settings();
                    self.reset(settings);
                }
            }
            Screen::PlayAgain => {
                if is_yes(answer) {
                    info!(high_score = self.high_score(), "player chose to play again");
                    self.screen = Screen::Settings(SettingsFlow::new());
                } else {
                    info!(high_score = self.high_score(), "player declined to play again");
                    self.quit();
                }
            }
            Screen::Playing | Screen::GameOver { .. } | Screen::Exit => {}
        }
    }

    /// Run one tick if the board is live
    pub fn tick(&mut self, now: Instant) -> Option<StepResult> {
        if !self.is_ticking() {
            return None;
        }

        let action = self.mailbox.take();
        let result = self.engine.step(&mut self.state, action, now);
        self.metrics.on_step(&result, now);

        if result.terminated {
            self.metrics.on_game_over(now);
            info!(
                games_played = self.metrics.games_played,
                foods = self.metrics.foods_eaten,
                obstacles = self.metrics.obstacles_spawned,
                time = %self.metrics.format_time(),
                "game finished"
            );
            self.screen = Screen::GameOver { since: now };
        }

        Some(result)
    }

    /// Advance time-based screen changes (game-over banner to replay prompt)
    pub fn poll(&mut self, now: Instant) {
        if let Screen::GameOver { since } = self.screen {
            if now.saturating_duration_since(since) >= self.engine.config().game_over_pause() {
                self.screen = Screen::PlayAgain;
            }
        }
    }

    /// Start a fresh game with new settings, keeping the high score
    pub fn reset(&mut self, settings: GameSettings) {
        let high_score = self.high_score();
        self.state = self.engine.new_game(settings, high_score);
        self.mailbox.clear();
        self.metrics.on_game_start();
        self.screen = Screen::Playing;
    }

    pub fn quit(&mut self) {
        self.state.phase = GamePhase::Terminated;
        self.screen = Screen::Exit;
    }
}
