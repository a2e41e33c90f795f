use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::autopilot::Route;
use crate::game::{GameEngine, Summary, TileCode};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the board, the HUD and, when enabled, the debug panel
    pub fn render(&self, frame: &mut Frame, engine: &GameEngine, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(engine), chunks[0]);

        let board_width = (engine.grid().side() * 2 + 2) as u16;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(board_width), Constraint::Min(0)])
            .split(chunks[1]);

        frame.render_widget(self.render_grid(engine), columns[0]);
        if engine.flags().debug {
            frame.render_widget(self.render_debug(engine, metrics), columns[1]);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, engine: &GameEngine) -> Paragraph<'_> {
        let grid = engine.grid();
        let side = grid.side();
        let mut lines = Vec::with_capacity(side);

        // larger y is drawn higher up
        for by in (0..side).rev() {
            let spans: Vec<Span> = (0..side)
                .map(|bx| Self::tile_span(grid.buffer_tile(bx, by)))
                .collect();
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Snek "),
        )
    }

    fn tile_span(tile: TileCode) -> Span<'static> {
        match tile {
            TileCode::Empty => Span::raw("  "),
            TileCode::Food => Span::styled(
                "@ ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            TileCode::SnakeBody | TileCode::SnakeTailNonColliding => {
                Span::styled("# ", Style::default().fg(Color::Green))
            }
            TileCode::SnakeHead => Span::styled(
                "# ",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            TileCode::Barrier => Span::styled("* ", Style::default().fg(Color::Gray)),
            TileCode::OutOfBounds => Span::styled("* ", Style::default().fg(Color::Yellow)),
            TileCode::Void => Span::styled("? ", Style::default().fg(Color::Magenta)),
        }
    }

    fn render_stats(&self, engine: &GameEngine) -> Paragraph<'_> {
        let flags = engine.flags();
        let mut spans = vec![
            Span::styled("Size: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                engine.snake().size().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Time (s): ", Style::default().fg(Color::Yellow)),
            Span::styled(
                GameMetrics::format_seconds(engine.elapsed()),
                Style::default().fg(Color::White),
            ),
        ];
        if flags.autopilot {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("AUTOPILOT", Style::default().fg(Color::Cyan)));
        }
        if flags.time_warp {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("TIME WARP", Style::default().fg(Color::Magenta)));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_debug(&self, engine: &GameEngine, metrics: &GameMetrics) -> Paragraph<'_> {
        let head = engine.snake().head();
        let food = engine.grid().food_pos();
        let route = match engine.last_plan().map(|plan| plan.route) {
            Some(Route::ToFood { distance }) => format!("food in {distance}"),
            Some(Route::Fallback) => "no path, avoiding".to_string(),
            Some(Route::Boxed) => "boxed in".to_string(),
            None => "-".to_string(),
        };

        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(label, Style::default().fg(Color::Yellow)),
                Span::raw(value),
            ])
        };

        let lines = vec![
            row("Snake Pos: ", format!("({}, {})", head.x, head.y)),
            row("Apple Pos: ", format!("({}, {})", food.x, food.y)),
            row("Direction: ", format!("{:?}", engine.snake().direction())),
            row(
                "Target FT (ms): ",
                GameMetrics::format_millis(engine.tick_interval()),
            ),
            row("Avg FT (ms): ", GameMetrics::format_millis(metrics.average_tick())),
            row("Real FT (ms): ", GameMetrics::format_millis(metrics.last_tick)),
            row("Route: ", route),
            row("Ticks: ", engine.ticks().to_string()),
        ];

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Debug "),
        )
    }

    /// Final score and survival time, shown until a key is pressed
    pub fn render_game_over(&self, frame: &mut Frame, summary: &Summary) {
        let area = Self::centered(frame.area(), 44, 9);
        let headline = if summary.won { "ARENA FILLED" } else { "GAME OVER" };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                headline,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    summary.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Time played: ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("{} seconds", GameMetrics::format_seconds(summary.elapsed))),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to continue...",
                Style::default().fg(Color::Gray),
            )),
        ];

        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            ),
            area,
        );
    }

    pub fn render_prompt(&self, frame: &mut Frame) {
        let area = Self::centered(frame.area(), 44, 5);
        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("Would you like to play again? ("),
                Span::styled(
                    "Y",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("/"),
                Span::styled(
                    "N",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(")"),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Cyan)),
            Span::raw(" autopilot | "),
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" debug | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
