//! Stateless UI rendering for the board, scoreboard and menus.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe_core::{Position, Square};

use super::app::App;
use crate::theme::{Rgb, Theme};

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 13;
/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board width including the two separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Board height including the two separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Where each part of the screen goes for a given terminal area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Menu line.
    pub menu: Rect,
    /// Area the board is centred in.
    pub board_area: Rect,
    /// Cell rectangles in row-major order.
    pub cells: [Rect; 9],
    /// Scoreboard line.
    pub score: Rect,
    /// Mode and theme labels.
    pub status: Rect,
    /// Message box.
    pub message: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the screen sections.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),            // Title
                Constraint::Length(1),            // Menu
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(1),            // Score
                Constraint::Length(1),            // Mode / theme
                Constraint::Length(3),            // Message
                Constraint::Length(1),            // Help
            ])
            .split(area);

        Self {
            title: chunks[0],
            menu: chunks[1],
            board_area: chunks[2],
            cells: cell_rects(chunks[2]),
            score: chunks[3],
            status: chunks[4],
            message: chunks[5],
            help: chunks[6],
        }
    }

    /// The cell under a terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|cell| {
                column >= cell.x
                    && column < cell.x + cell.width
                    && row >= cell.y
                    && row < cell.y + cell.height
            })
            .and_then(Position::from_index)
    }
}

/// Cell rectangles for a board centred in `area`, clipped to it.
fn cell_rects(area: Rect) -> [Rect; 9] {
    let origin_x = area.x + area.width.saturating_sub(BOARD_WIDTH) / 2;
    let origin_y = area.y + area.height.saturating_sub(BOARD_HEIGHT) / 2;
    Position::ALL.map(|pos| {
        let x = origin_x + pos.col() as u16 * (CELL_WIDTH + 1);
        let y = origin_y + pos.row() as u16 * (CELL_HEIGHT + 1);
        Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area)
    })
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let session = app.session();

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    frame.render_widget(menu_line(session.theme()), layout.menu);

    draw_board(frame, &layout, app);

    let score = Paragraph::new(session.score_text())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(score, layout.score);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout.status);
    frame.render_widget(
        Paragraph::new(session.mode_text()).alignment(Alignment::Left),
        halves[0],
    );
    frame.render_widget(
        Paragraph::new(session.theme_text()).alignment(Alignment::Right),
        halves[1],
    );

    let message = Paragraph::new(session.message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, layout.message);

    let help = Paragraph::new("Arrows/Enter or 1-9 or click: move | q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn menu_line(active: Theme) -> Paragraph<'static> {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut spans = vec![
        Span::raw("Options: "),
        Span::styled("r", key),
        Span::raw(" Reset  "),
        Span::styled("t", key),
        Span::raw(" Two Player  "),
        Span::styled("a", key),
        Span::raw(" AI Mode   Themes: "),
    ];
    for (n, theme) in Theme::iter().enumerate() {
        let label_style = if theme == active {
            Style::default().add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("F{}", n + 1), key));
        spans.push(Span::styled(format!(" {}  ", theme.label()), label_style));
    }
    spans.push(Span::styled("c", key));
    spans.push(Span::raw(" cycle"));
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let session = app.session();
    let palette = session.theme().palette();
    let base = Style::default()
        .bg(color(palette.background))
        .fg(color(palette.foreground))
        .add_modifier(Modifier::BOLD);

    for (pos, cell) in Position::ALL.into_iter().zip(layout.cells) {
        let symbol = match session.game().board().get(pos) {
            Square::Empty => " ".to_string(),
            Square::Occupied(player) => player.to_string(),
        };
        let style = if pos == app.cursor() {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        };
        let paragraph = Paragraph::new(vec![Line::from(""), Line::from(symbol), Line::from("")])
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, cell);
    }

    draw_separators(frame, layout);
}

fn draw_separators(frame: &mut Frame, layout: &ScreenLayout) {
    let sep = Style::default().fg(Color::DarkGray);
    let top_left = layout.cells[0];
    let full = Rect::new(top_left.x, top_left.y, BOARD_WIDTH, BOARD_HEIGHT)
        .intersection(layout.board_area);

    let cell = "─".repeat(CELL_WIDTH as usize);
    let horizontal = format!("{cell}┼{cell}┼{cell}");
    for row in 1..3u16 {
        let y = full.y + row * (CELL_HEIGHT + 1) - 1;
        let area = Rect::new(full.x, y, full.width, 1).intersection(full);
        frame.render_widget(Paragraph::new(horizontal.clone()).style(sep), area);
    }
    for col in 1..3u16 {
        let x = full.x + col * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let y = full.y + row * (CELL_HEIGHT + 1);
            let area = Rect::new(x, y, 1, CELL_HEIGHT).intersection(full);
            frame.render_widget(Paragraph::new("│\n│\n│").style(sep), area);
        }
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
