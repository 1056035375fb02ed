use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Board, FoodColor, GamePhase, GameState, Position, Prompt};
use crate::session::{Screen, Session};

/// Maps board units onto terminal cells, one cell per step
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    half_width: i32,
    step: i32,
}

impl BoardView {
    pub fn new(board: Board, step: i32) -> Self {
        Self {
            half_width: board.half_width(),
            step,
        }
    }

    /// Number of cells along each axis
    pub fn cells(&self) -> usize {
        (2 * self.half_width / self.step + 1) as usize
    }

    /// Column and row of a position; row 0 is the top edge
    pub fn cell_of(&self, pos: Position) -> Option<(usize, usize)> {
        let half_step = self.step / 2;
        let col = (pos.x + self.half_width + half_step).div_euclid(self.step);
        let row = (self.half_width - pos.y + half_step).div_euclid(self.step);
        let n = self.cells() as i32;
        if (0..n).contains(&col) && (0..n).contains(&row) {
            Some((col as usize, row as usize))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Empty,
    Head,
    Body,
    Food(FoodColor),
    Obstacle,
}

pub struct Renderer {
    view: BoardView,
}

impl Renderer {
    pub fn new(view: BoardView) -> Self {
        Self { view }
    }

    pub fn render(&self, frame: &mut Frame, session: &Session, prompt_text: &str) {
        let state = session.state();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(2), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(session), chunks[0]);

        let game_area = chunks[1];
        frame.render_widget(self.render_grid(state), game_area);

        match session.screen() {
            Screen::Settings(_) | Screen::PlayAgain => {
                if let Some(prompt) = session.active_prompt() {
                    let height = if prompt == Prompt::PlayAgain { 9 } else { 7 };
                    let area = centered_rect(62, height, game_area);
                    frame.render_widget(Clear, area);
                    frame.render_widget(self.render_prompt(prompt, prompt_text, state), area);
                }
            }
            Screen::GameOver { .. } => {
                let area = centered_rect(40, 6, game_area);
                frame.render_widget(Clear, area);
                frame.render_widget(self.render_game_over(state), area);
            }
            Screen::Playing | Screen::Exit => {}
        }

        frame.render_widget(self.render_controls(session), chunks[2]);
    }

    fn grid_cells(&self, state: &GameState) -> Vec<Vec<Cell>> {
        let n = self.view.cells();
        let mut cells = vec![vec![Cell::Empty; n]; n];
        let mut put = |pos: Position, cell: Cell| {
            if let Some((col, row)) = self.view.cell_of(pos) {
                cells[row][col] = cell;
            }
        };

        for obstacle in &state.obstacles {
            let reach = (obstacle.size.width - self.view.step) / 2;
            let mut dx = -reach;
            while dx <= reach {
                put(obstacle.position.moved_by(dx, 0), Cell::Obstacle);
                dx += self.view.step;
            }
        }
        put(state.food.position, Cell::Food(state.food.color));
        for segment in state.snake.body_segments().iter().rev() {
            put(*segment, Cell::Body);
        }
        put(state.snake.head(), Cell::Head);

        cells
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let lines: Vec<Line> = self
            .grid_cells(state)
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|cell| match cell {
                        Cell::Head => Span::styled(
                            "● ",
                            Style::default()
                                .fg(Color::LightGreen)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Cell::Body => Span::styled("● ", Style::default().fg(Color::Green)),
                        Cell::Food(color) => Span::styled(
                            "● ",
                            Style::default()
                                .fg(food_color(color))
                                .add_modifier(Modifier::BOLD),
                        ),
                        Cell::Obstacle => Span::styled("██", Style::default().fg(Color::Gray)),
                        Cell::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let title = format!(" Snake - {} ", state.settings);

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, session: &Session) -> Paragraph<'_> {
        let state = session.state();
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(session.metrics().format_time(), Style::default().fg(Color::White)),
        ];
        if state.settings.survival_mode {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("Obstacles: ", Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(
                state.obstacles.len().to_string(),
                Style::default().fg(Color::White),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        Paragraph::new(game_over_lines(state))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
    }

    fn render_prompt(&self, prompt: Prompt, text: &str, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::new();
        if prompt == Prompt::PlayAgain {
            lines.extend(game_over_lines(state));
        }
        lines.push(Line::from(prompt.question()));
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{}_", text),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter to confirm, Esc to skip",
            Style::default().fg(Color::Gray),
        )));

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", prompt.title())),
        )
    }

    fn render_controls(&self, session: &Session) -> Paragraph<'_> {
        let text = if session.is_ticking() && session.state().phase == GamePhase::Idle {
            Line::from(vec![
                Span::styled("Press an arrow key", Style::default().fg(Color::Cyan)),
                Span::raw(" to start"),
            ])
        } else {
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

fn game_over_lines(state: &GameState) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Game Over!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ]
}

fn food_color(color: FoodColor) -> Color {
    match color {
        FoodColor::Red => Color::Red,
        FoodColor::Blue => Color::Blue,
        FoodColor::Yellow => Color::Yellow,
        FoodColor::Green => Color::Green,
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameEngine, Obstacle};
    use ratatui::{Terminal, backend::TestBackend};

    fn view() -> BoardView {
        BoardView::new(Board::new(290), 20)
    }

    fn screen_text(session: &Session, prompt_text: &str) -> String {
        let renderer = Renderer::new(view());
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| renderer.render(frame, session, prompt_text))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_cell_mapping() {
        let view = view();
        assert_eq!(view.cells(), 30);
        assert_eq!(view.cell_of(Position::new(-290, 290)), Some((0, 0)));
        assert_eq!(view.cell_of(Position::new(290, -290)), Some((29, 29)));
        assert_eq!(view.cell_of(Position::new(0, 0)), Some((15, 15)));
        assert_eq!(view.cell_of(Position::new(300, 0)), None);
    }

    #[test]
    fn test_grid_marks_entities() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 5);
        let mut state = engine.new_game(Default::default(), 0);
        state.obstacles.push(Obstacle::new(Position::new(-100, -100)));
        let renderer = Renderer::new(view());

        let cells = renderer.grid_cells(&state);
        let (col, row) = view().cell_of(Position::ORIGIN).unwrap();
        assert_eq!(cells[row][col], Cell::Head);

        let (col, row) = view().cell_of(Position::new(0, 100)).unwrap();
        assert_eq!(cells[row][col], Cell::Food(state.food.color));

        let obstacle_cells = cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Obstacle)
            .count();
        assert_eq!(obstacle_cells, 2);
    }

    #[test]
    fn test_renders_prompt_and_scores() {
        let session = Session::new(GameEngine::with_seed(GameConfig::default(), 5));
        let text = screen_text(&session, "med");
        assert!(text.contains("Score: 0"));
        assert!(text.contains("High Score: 0"));
        assert!(text.contains("Choose Level"));
        assert!(text.contains("> med_"));
    }

    #[test]
    fn test_renders_idle_hint() {
        let mut session = Session::new(GameEngine::with_seed(GameConfig::default(), 5));
        session.answer_prompt(None);
        session.answer_prompt(None);
        let text = screen_text(&session, "");
        assert!(text.contains("Press an arrow key"));
    }
}
