//! Terminal UI: board, status bar and HUD.

pub mod board;
pub mod layout;

use crate::game::event_log::FoodEvent;
use crate::game::session::GameSession;
use crate::render::commands::{render_scene, Geometry};
use crate::render::palette::Theme;
use crate::render::raster::rasterize;
use board::{render_board, rgba_to_color, BoardGeometry};
use layout::{
    min_screen_size, render_hud_frame, render_outer_border, render_status_bar, render_too_small,
    screen_layout,
};
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const RECENT_EVENTS: usize = 8;

/// True when `area` shows a `grid_cells` board without cropping. The host
/// holds the session still while this is false.
pub fn board_fits(area: Rect, grid_cells: i16) -> bool {
    screen_layout(area, grid_cells).is_some()
}

/// Draw the whole screen. Returns where the board landed, or `None` when the
/// terminal is too small and the resize prompt was drawn instead.
pub fn draw_ui<R: Rng>(
    frame: &mut Frame,
    session: &GameSession<R>,
    theme: Theme,
) -> Option<BoardGeometry> {
    let config = session.config();
    let area = frame.size();
    let Some(screen) = screen_layout(area, config.grid_cells) else {
        render_too_small(frame, area, min_screen_size(config.grid_cells));
        return None;
    };

    let geometry = Geometry::new(config.grid_cells, config.cell_pixels);
    let palette = theme.palette();
    let commands = render_scene(&session.scene(), palette, &geometry);
    let raster = rasterize(&commands, &geometry);

    render_outer_border(frame, area, " Grid Snake ", rgba_to_color(palette.snake));
    let board = render_board(frame, screen.board, &raster, session.score());
    render_status_bar(frame, screen.status_bar, session.is_game_over());
    render_hud(frame, screen.hud, session, theme);
    Some(board)
}

fn stat_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn render_hud<R: Rng>(frame: &mut Frame, area: Rect, session: &GameSession<R>, theme: Theme) {
    let inner = render_hud_frame(frame, area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                session.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        stat_line("Speed", format!("{}ms", session.current_interval_ms())),
        stat_line("Mode", session.speed_mode().name().to_string()),
        stat_line("Theme", theme.name().to_string()),
        stat_line("Length", session.snake().len().to_string()),
        stat_line(
            "Food memory",
            format!(
                "{}/{}",
                session.food_history().len(),
                session.food_history().capacity()
            ),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Food log:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    for entry in session.events().recent(RECENT_EVENTS) {
        let color = match entry.event {
            FoodEvent::Spawned { .. } => Color::DarkGray,
            FoodEvent::Eaten { .. } => Color::LightRed,
        };
        lines.push(Line::from(vec![
            Span::styled(
                entry.at.format("%H:%M:%S ").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(entry.event.describe(), Style::default().fg(color)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
