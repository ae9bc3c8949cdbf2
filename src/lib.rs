//! Grid Snake - terminal snake game library.
//!
//! The game model and loop driver live in `game`; `render` turns a game
//! scene into draw commands and a pixel raster; `ui` paints that raster
//! with ratatui.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod ui;
