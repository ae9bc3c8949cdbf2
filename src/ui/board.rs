//! Half-block painter for the board raster.
//!
//! Each raster pixel is one terminal column wide; two pixel rows share one
//! terminal row through `▀` (fg = top pixel, bg = bottom pixel).

use crate::render::palette::Rgba;
use crate::render::raster::Raster;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀

const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// Where the raster landed on screen, for mapping mouse positions back to
/// canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    /// Pixel area inside the border.
    pub inner: Rect,
    /// Canvas units per raster pixel.
    pub pixel_size: f64,
}

impl BoardGeometry {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.inner.x
            && column < self.inner.x + self.inner.width
            && row >= self.inner.y
            && row < self.inner.y + self.inner.height
    }

    /// Centre of the terminal cell in canvas units. A terminal row spans two
    /// raster pixels.
    pub fn to_canvas(&self, column: u16, row: u16) -> (f64, f64) {
        let col = f64::from(column.saturating_sub(self.inner.x)) + 0.5;
        let row = f64::from(row.saturating_sub(self.inner.y)) + 0.5;
        (col * self.pixel_size, row * 2.0 * self.pixel_size)
    }
}

pub fn rgba_to_color(color: Rgba) -> Color {
    let (r, g, b) = color.to_rgb8();
    Color::Rgb(r, g, b)
}

/// Paint `raster` framed by a border whose top edge carries `score`.
pub fn render_board(frame: &mut Frame, area: Rect, raster: &Raster, score: u32) -> BoardGeometry {
    let pixel_w = raster.width();
    let content_rows = raster.height().div_ceil(2);
    let render_w = ((pixel_w + 2) as u16).min(area.width);
    let inner_w = (render_w as usize).saturating_sub(2);

    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;
    let visible_rows = (content_rows as u16).min(area.height.saturating_sub(1));
    let geometry = BoardGeometry {
        inner: Rect::new(x_off + 1, y_off + 1, inner_w as u16, visible_rows),
        pixel_size: raster.pixel_size(),
    };
    if area.height < 3 || area.width < 5 {
        return geometry;
    }

    // Top border with score
    {
        let score_val = score.to_string();
        let label = " Score: ";
        let full_len = label.len() + score_val.len() + 1;
        let pad_before = inner_w.saturating_sub(full_len + 1);
        let pad_after = inner_w.saturating_sub(pad_before + full_len);
        let border = Style::default().fg(BORDER_COLOR);

        let spans = vec![
            Span::styled(BORDER_TL.to_string(), border),
            Span::styled(
                std::iter::repeat_n(BORDER_H, pad_before).collect::<String>(),
                border,
            ),
            Span::styled(label, border),
            Span::styled(score_val, Style::default().fg(Color::White)),
            Span::styled(" ", border),
            Span::styled(
                std::iter::repeat_n(BORDER_H, pad_after).collect::<String>(),
                border,
            ),
            Span::styled(BORDER_TR.to_string(), border),
        ];
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off, render_w, 1),
        );
    }

    let background = Rgba::rgb(0, 0, 0);
    let pixel_color = |col: usize, row: usize| {
        rgba_to_color(raster.pixel(col, row).unwrap_or(background).over(background))
    };

    for term_row in 0..content_rows {
        let row_y = y_off + 1 + term_row as u16;
        if row_y >= area.y + area.height {
            break;
        }
        let (top_y, bot_y) = (term_row * 2, term_row * 2 + 1);

        let mut spans: Vec<Span> = vec![Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(BORDER_COLOR),
        )];

        // Batch runs of identical styles.
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();
        for col in 0..inner_w.min(pixel_w) {
            let fg = pixel_color(col, top_y);
            let bg = pixel_color(col, bot_y);
            if fg != cur_fg || bg != cur_bg {
                if !cur_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut cur_text),
                        Style::default().fg(cur_fg).bg(cur_bg),
                    ));
                }
                cur_fg = fg;
                cur_bg = bg;
            }
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }
        spans.push(Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(BORDER_COLOR),
        ));

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, row_y, render_w, 1),
        );
    }

    // Bottom border
    let bottom_y = y_off + 1 + content_rows as u16;
    if bottom_y < area.y + area.height {
        let mut s = String::with_capacity(inner_w + 2);
        s.push(BORDER_BL);
        s.extend(std::iter::repeat_n(BORDER_H, inner_w));
        s.push(BORDER_BR);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                s,
                Style::default().fg(BORDER_COLOR),
            ))),
            Rect::new(x_off, bottom_y, render_w, 1),
        );
    }

    // Labels sit on top of the pixels they cover.
    for label in raster.labels() {
        let row_y = y_off + 1 + (label.row / 2) as u16;
        if row_y >= y_off + 1 + visible_rows {
            continue;
        }
        let width = (label.text.chars().count() as u16).min(inner_w as u16);
        let start = (label.col as u16).saturating_sub(width / 2).min(inner_w as u16 - width);
        let mut style = Style::default()
            .fg(rgba_to_color(label.color))
            .bg(pixel_color(label.col, label.row));
        if label.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        frame.render_widget(
            Paragraph::new(Span::styled(label.text.clone(), style)),
            Rect::new(x_off + 1 + start, row_y, width, 1),
        );
    }

    geometry
}
