use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::{Interval, MissedTickBehavior, interval, interval_at};
use tracing::{info, warn};

use crate::game::GameEngine;
use crate::input::{InputHandler, KeyAction, PromptEvent, TextInput};
use crate::render::{BoardView, Renderer};
use crate::session::Session;

/// Redraw at ~30 FPS, independent of the game speed
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

pub struct HumanMode {
    session: Session,
    renderer: Renderer,
    input_handler: InputHandler,
    text_input: TextInput,
}

impl HumanMode {
    pub fn new(engine: GameEngine) -> Self {
        let config = engine.config();
        let view = BoardView::new(config.board(), config.step);

        Self {
            session: Session::new(engine),
            renderer: Renderer::new(view),
            input_handler: InputHandler::new(),
            text_input: TextInput::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut render_timer = interval(RENDER_INTERVAL);

        // Re-armed every time a game (re)starts so the new level's delay applies
        let mut tick_timer = new_tick_timer(self.session.tick_delay());
        let mut was_ticking = false;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => {
                            warn!("terminal event stream closed");
                            self.session.quit();
                        }
                    }
                }

                // Game logic tick; suspended while a prompt or banner is up
                _ = tick_timer.tick(), if self.session.is_ticking() => {
                    self.session.tick(Instant::now());
                }

                // Render frame
                _ = render_timer.tick() => {
                    let now = Instant::now();
                    self.session.poll(now);
                    self.session.metrics_mut().update(now);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.session, self.text_input.as_str());
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupted");
                    self.session.quit();
                }
            }

            let ticking = self.session.is_ticking();
            if ticking && !was_ticking {
                tick_timer = new_tick_timer(self.session.tick_delay());
            }
            was_ticking = ticking;

            if self.session.should_exit() {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.session.active_prompt().is_some() {
            let key = self.input_handler.handle_prompt_key(key);
            match self.text_input.apply(key) {
                PromptEvent::Editing => {}
                PromptEvent::Submitted(answer) => self.session.answer_prompt(Some(&answer)),
                PromptEvent::Cancelled => self.session.answer_prompt(None),
                PromptEvent::Quit => self.session.quit(),
            }
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => self.session.steer(direction),
            KeyAction::Quit => self.session.quit(),
            KeyAction::None => {}
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Periodic tick whose first firing is one full delay away
fn new_tick_timer(delay: Duration) -> Interval {
    let mut timer = interval_at(tokio::time::Instant::now() + delay, delay);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}
