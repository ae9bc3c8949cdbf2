//! Screen geometry: a fixed-size board column, a HUD column on the right and
//! a two-line status bar, all inside one outer border.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const HUD_WIDTH: u16 = 32;
const STATUS_ROWS: u16 = 2;

/// Where each part of the screen goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub board: Rect,
    pub status_bar: Rect,
    pub hud: Rect,
}

/// Terminal columns and rows needed to show a `grid_cells` board uncropped.
///
/// The raster is two pixels per cell each way; a terminal row holds two pixel
/// rows. The board gets its own border, and the screen has an outer one.
pub fn min_screen_size(grid_cells: i16) -> (u16, u16) {
    let side = 2 * grid_cells.max(0) as u16;
    let board_w = side + 2;
    let board_h = side.div_ceil(2) + 2;
    (board_w + HUD_WIDTH + 2, board_h + STATUS_ROWS + 2)
}

/// Split `area` for a `grid_cells` board, or `None` when it would not fit.
pub fn screen_layout(area: Rect, grid_cells: i16) -> Option<ScreenLayout> {
    let (need_w, need_h) = min_screen_size(grid_cells);
    if area.width < need_w || area.height < need_h {
        return None;
    }
    let inner = Rect::new(area.x + 1, area.y + 1, area.width - 2, area.height - 2);
    let left_w = inner.width - HUD_WIDTH;
    let board_h = inner.height - STATUS_ROWS;
    Some(ScreenLayout {
        board: Rect::new(inner.x, inner.y, left_w, board_h),
        status_bar: Rect::new(inner.x, inner.y + board_h, left_w, STATUS_ROWS),
        hud: Rect::new(inner.x + left_w, inner.y, HUD_WIDTH, inner.height),
    })
}

pub fn render_outer_border(frame: &mut Frame, area: Rect, title: &str, color: Color) {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
        area,
    );
}

const KEY_HINTS: [(&str, &str); 5] = [
    ("Arrows/WASD", "move"),
    ("R", "restart"),
    ("M", "speed"),
    ("T", "theme"),
    ("Q", "quit"),
];

/// Play state on the first line, key hints on the second.
pub fn render_status_bar(frame: &mut Frame, area: Rect, game_over: bool) {
    let (text, color) = if game_over {
        ("Game over - press R to restart", Color::LightRed)
    } else {
        ("Slither!", Color::Green)
    };
    let hints: Vec<Span> = KEY_HINTS
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!("[{key}]"), Style::default().fg(Color::White)),
                Span::styled(format!(" {action}  "), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    let lines = vec![
        Line::from(Span::styled(text, Style::default().fg(color))),
        Line::from(hints),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Bordered HUD panel; returns the inner area.
pub fn render_hud_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" HUD ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Shown instead of the game while the terminal cannot fit the whole board.
pub fn render_too_small(frame: &mut Frame, area: Rect, need: (u16, u16)) {
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                need.0, need.1, area.width, area.height
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Game paused. Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
