//! Board rendering: draw commands, palettes and the pixel raster.

pub mod commands;
pub mod palette;
pub mod raster;

pub use commands::{render_scene, DrawCommand, Geometry, Scene};
pub use palette::{Palette, Rgba, Theme};
pub use raster::{rasterize, Label, Raster};
