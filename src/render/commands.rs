//! Scene to draw-command translation. Pure: same scene and palette always
//! give the same command list.

use super::palette::{Palette, Rgba};
use crate::constants::{
    BODY_CORNER_RADIUS, FOOD_CORNER_RADIUS, GAME_OVER_FONT_PX, GAME_OVER_TEXT, GRID_LINE_WIDTH,
    HEAD_CORNER_RADIUS,
};
use crate::game::grid::Cell;
use crate::game::snake::Snake;

/// Axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectF {
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: RectF,
        color: Rgba,
    },
    StrokeLine {
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Rgba,
    },
    FillRoundedRect {
        rect: RectF,
        radius: f64,
        color: Rgba,
    },
    /// Centre-aligned on (x, y).
    FillText {
        text: String,
        x: f64,
        y: f64,
        size_px: f64,
        bold: bool,
        color: Rgba,
    },
}

/// Read-only view of what is on the board.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub snake: &'a Snake,
    pub foods: &'a [Cell],
    pub game_over: bool,
}

/// Canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub grid_cells: i16,
    pub cell_px: f64,
}

impl Geometry {
    pub fn new(grid_cells: i16, cell_px: u32) -> Self {
        Self {
            grid_cells,
            cell_px: f64::from(cell_px),
        }
    }

    /// Side of the square canvas.
    pub fn canvas_size(&self) -> f64 {
        f64::from(self.grid_cells) * self.cell_px
    }

    /// Raster pixels are half a cell.
    pub fn pixel_size(&self) -> f64 {
        self.cell_px / 2.0
    }

    pub fn cell_rect(&self, cell: Cell) -> RectF {
        RectF {
            x: f64::from(cell.x) * self.cell_px,
            y: f64::from(cell.y) * self.cell_px,
            w: self.cell_px,
            h: self.cell_px,
        }
    }
}

pub fn render_scene(scene: &Scene<'_>, palette: &Palette, geometry: &Geometry) -> Vec<DrawCommand> {
    let size = geometry.canvas_size();
    let full = RectF {
        x: 0.0,
        y: 0.0,
        w: size,
        h: size,
    };
    let mut commands = Vec::with_capacity(
        2 * (geometry.grid_cells.max(0) as usize + 1) + scene.foods.len() + scene.snake.len() + 3,
    );

    commands.push(DrawCommand::FillRect {
        rect: full,
        color: palette.background,
    });

    for i in 0..=geometry.grid_cells {
        let p = f64::from(i) * geometry.cell_px + 0.5;
        commands.push(DrawCommand::StrokeLine {
            from: (p, 0.0),
            to: (p, size),
            width: GRID_LINE_WIDTH,
            color: palette.grid_line,
        });
        commands.push(DrawCommand::StrokeLine {
            from: (0.0, p),
            to: (size, p),
            width: GRID_LINE_WIDTH,
            color: palette.grid_line,
        });
    }

    for &food in scene.foods {
        commands.push(DrawCommand::FillRoundedRect {
            rect: geometry.cell_rect(food),
            radius: FOOD_CORNER_RADIUS,
            color: palette.food,
        });
    }

    for (index, &segment) in scene.snake.iter().enumerate() {
        let radius = if index == 0 {
            HEAD_CORNER_RADIUS
        } else {
            BODY_CORNER_RADIUS
        };
        commands.push(DrawCommand::FillRoundedRect {
            rect: geometry.cell_rect(segment),
            radius,
            color: palette.snake,
        });
    }

    if scene.game_over {
        commands.push(DrawCommand::FillRect {
            rect: full,
            color: palette.overlay,
        });
        commands.push(DrawCommand::FillText {
            text: GAME_OVER_TEXT.to_string(),
            x: size / 2.0,
            y: size / 2.0,
            size_px: GAME_OVER_FONT_PX,
            bold: true,
            color: palette.overlay_text,
        });
    }

    commands
}
