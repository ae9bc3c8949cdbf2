//! Turns draw commands into a coarse pixel grid for the terminal painter.

use super::commands::{DrawCommand, Geometry, RectF};
use super::palette::Rgba;

/// Text placed on the raster, centred on a pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub col: usize,
    pub row: usize,
    pub text: String,
    pub bold: bool,
    pub color: Rgba,
}

#[derive(Debug, Clone)]
pub struct Raster {
    width: usize,
    height: usize,
    pixel_size: f64,
    pixels: Vec<Rgba>,
    labels: Vec<Label>,
}

impl Raster {
    /// Transparent raster of `width` x `height` pixels, each `pixel_size`
    /// canvas units square.
    pub fn new(width: usize, height: usize, pixel_size: f64) -> Self {
        Self {
            width,
            height,
            pixel_size,
            pixels: vec![Rgba::rgba(0, 0, 0, 0.0); width * height],
            labels: Vec::new(),
        }
    }

    pub fn for_geometry(geometry: &Geometry) -> Self {
        let pixel_size = geometry.pixel_size();
        let side = (geometry.canvas_size() / pixel_size).ceil().max(0.0) as usize;
        Self::new(side, side, pixel_size)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Canvas units per pixel.
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    pub fn pixel(&self, col: usize, row: usize) -> Option<Rgba> {
        if col < self.width && row < self.height {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn paint(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            match command {
                DrawCommand::FillRect { rect, color } => self.fill(*color, |x, y| rect.contains(x, y)),
                DrawCommand::FillRoundedRect {
                    rect,
                    radius,
                    color,
                } => self.fill(*color, |x, y| rounded_contains(rect, *radius, x, y)),
                DrawCommand::StrokeLine {
                    from,
                    to,
                    width: _,
                    color,
                } => self.stroke(*from, *to, *color),
                DrawCommand::FillText {
                    text,
                    x,
                    y,
                    bold,
                    color,
                    ..
                } => {
                    let col = (x / self.pixel_size).floor().max(0.0) as usize;
                    let row = (y / self.pixel_size).floor().max(0.0) as usize;
                    self.labels.push(Label {
                        col,
                        row,
                        text: text.clone(),
                        bold: *bold,
                        color: *color,
                    });
                }
            }
        }
    }

    /// Composite `color` onto every pixel whose centre passes `inside`.
    fn fill(&mut self, color: Rgba, inside: impl Fn(f64, f64) -> bool) {
        for row in 0..self.height {
            let cy = (row as f64 + 0.5) * self.pixel_size;
            for col in 0..self.width {
                let cx = (col as f64 + 0.5) * self.pixel_size;
                if inside(cx, cy) {
                    let idx = row * self.width + col;
                    self.pixels[idx] = color.over(self.pixels[idx]);
                }
            }
        }
    }

    /// Composite `color` once onto each pixel the segment passes through.
    fn stroke(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let length = (dx * dx + dy * dy).sqrt();
        let steps = ((length / (self.pixel_size / 2.0)).ceil() as usize).max(1);
        let mut touched = vec![false; self.pixels.len()];
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let (x, y) = (from.0 + dx * t, from.1 + dy * t);
            if x < 0.0 || y < 0.0 {
                continue;
            }
            let col = (x / self.pixel_size).floor() as usize;
            let row = (y / self.pixel_size).floor() as usize;
            if col >= self.width || row >= self.height {
                continue;
            }
            let idx = row * self.width + col;
            if !touched[idx] {
                touched[idx] = true;
                self.pixels[idx] = color.over(self.pixels[idx]);
            }
        }
    }
}

fn rounded_contains(rect: &RectF, radius: f64, x: f64, y: f64) -> bool {
    if !rect.contains(x, y) {
        return false;
    }
    let r = radius.min(rect.w / 2.0).min(rect.h / 2.0).max(0.0);
    let cx = x.clamp(rect.x + r, rect.x + rect.w - r);
    let cy = y.clamp(rect.y + r, rect.y + rect.h - r);
    let (ex, ey) = (x - cx, y - cy);
    ex * ex + ey * ey <= r * r
}

/// Rasterize a full command list onto a raster sized for `geometry`.
pub fn rasterize(commands: &[DrawCommand], geometry: &Geometry) -> Raster {
    let mut raster = Raster::for_geometry(geometry);
    raster.paint(commands);
    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> RectF {
        RectF { x, y, w, h }
    }

    #[test]
    fn test_fill_rect_samples_centres() {
        let mut raster = Raster::new(4, 4, 10.0);
        let red = Rgba::rgb(255, 0, 0);
        raster.paint(&[DrawCommand::FillRect {
            rect: rect(0.0, 0.0, 16.0, 40.0),
            color: red,
        }]);
        assert_eq!(raster.pixel(0, 3), Some(red));
        assert_eq!(raster.pixel(1, 0), Some(red));
        // Centre at x=25 lies outside.
        assert_eq!(raster.pixel(2, 0).map(|p| p.a), Some(0.0));
        assert_eq!(raster.pixel(4, 0), None);
    }

    #[test]
    fn test_rounded_corner_cuts_far_corner() {
        assert!(rounded_contains(&rect(0.0, 0.0, 20.0, 20.0), 6.0, 5.0, 5.0));
        assert!(!rounded_contains(&rect(0.0, 0.0, 20.0, 20.0), 6.0, 0.2, 0.2));
        assert!(rounded_contains(&rect(0.0, 0.0, 20.0, 20.0), 6.0, 10.0, 0.2));
    }

    #[test]
    fn test_stroke_composites_once_per_pixel() {
        let mut raster = Raster::new(3, 3, 10.0);
        let white = Rgba::rgb(255, 255, 255);
        let black = Rgba::rgba(0, 0, 0, 0.5);
        raster.paint(&[
            DrawCommand::FillRect {
                rect: rect(0.0, 0.0, 30.0, 30.0),
                color: white,
            },
            DrawCommand::StrokeLine {
                from: (10.5, 0.0),
                to: (10.5, 30.0),
                width: 1.0,
                color: black,
            },
        ]);
        for row in 0..3 {
            assert_eq!(raster.pixel(1, row).unwrap().to_rgb8(), (128, 128, 128));
            assert_eq!(raster.pixel(0, row), Some(white));
            assert_eq!(raster.pixel(2, row), Some(white));
        }
    }

    #[test]
    fn test_text_becomes_label() {
        let mut raster = Raster::new(60, 60, 10.0);
        raster.paint(&[DrawCommand::FillText {
            text: "hi".into(),
            x: 300.0,
            y: 300.0,
            size_px: 24.0,
            bold: true,
            color: Rgba::rgb(1, 2, 3),
        }]);
        let label = &raster.labels()[0];
        assert_eq!((label.col, label.row), (30, 30));
        assert!(label.bold);
    }

    #[test]
    fn test_for_geometry_size() {
        let raster = Raster::for_geometry(&Geometry::new(30, 20));
        assert_eq!((raster.width(), raster.height()), (60, 60));
    }
}
