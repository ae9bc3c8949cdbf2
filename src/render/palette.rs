//! Colours and the two board themes.

use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) colour with alpha in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Source-over compositing of `self` onto `below`.
    pub fn over(self, below: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        if a >= 1.0 {
            return self;
        }
        let out_a = a + below.a * (1.0 - a);
        if out_a <= 0.0 {
            return Rgba::rgba(0, 0, 0, 0.0);
        }
        let mix = |top: u8, bottom: u8| {
            let v = (f64::from(top) * a + f64::from(bottom) * below.a * (1.0 - a)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgba {
            r: mix(self.r, below.r),
            g: mix(self.g, below.g),
            b: mix(self.b, below.b),
            a: out_a,
        }
    }

    /// Colour channels, alpha dropped.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// The six colours a board is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgba,
    pub grid_line: Rgba,
    pub food: Rgba,
    pub snake: Rgba,
    pub overlay: Rgba,
    pub overlay_text: Rgba,
}

pub const DARK: Palette = Palette {
    background: Rgba::rgb(0x0f, 0x17, 0x2a),
    grid_line: Rgba::rgba(255, 255, 255, 0.05),
    food: Rgba::rgb(0xef, 0x44, 0x44),
    snake: Rgba::rgb(0x22, 0xc5, 0x5e),
    overlay: Rgba::rgba(0, 0, 0, 0.5),
    overlay_text: Rgba::rgb(0xe5, 0xe7, 0xeb),
};

pub const LIGHT: Palette = Palette {
    background: Rgba::rgb(0xf1, 0xf5, 0xf9),
    grid_line: Rgba::rgba(0, 0, 0, 0.1),
    food: Rgba::rgb(0xdc, 0x26, 0x26),
    snake: Rgba::rgb(0x16, 0xa3, 0x4a),
    overlay: Rgba::rgba(255, 255, 255, 0.7),
    overlay_text: Rgba::rgb(0x1e, 0x29, 0x3b),
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_over_replaces() {
        let top = Rgba::rgb(10, 20, 30);
        assert_eq!(top.over(DARK.background), top);
    }

    #[test]
    fn test_half_black_over_white() {
        let out = Rgba::rgba(0, 0, 0, 0.5).over(Rgba::rgb(255, 255, 255));
        assert_eq!(out.to_rgb8(), (128, 128, 128));
        assert!(out.is_opaque());
    }

    #[test]
    fn test_faint_grid_line_barely_changes_background() {
        let out = DARK.grid_line.over(DARK.background);
        let (r, g, b) = out.to_rgb8();
        assert!(r > 0x0f && r < 0x0f + 20);
        assert!(g > 0x17 && b > 0x2a);
    }

    #[test]
    fn test_theme_toggle_and_names() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.name(), "light");
        assert_eq!(Theme::Light.palette().food, Rgba::rgb(0xdc, 0x26, 0x26));
    }

    #[test]
    fn test_theme_serde_lowercase() {
        let json = serde_json::to_string(&Theme::Light).unwrap();
        assert_eq!(json, "\"light\"");
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
    }
}
