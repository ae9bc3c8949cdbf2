//! Built-in gameplay and rendering defaults. The config file can override
//! everything in the first three groups.

// Board geometry
pub const GRID_CELLS: i16 = 30;
/// Largest board the config accepts. Bounds raster and terminal sizes.
pub const MAX_GRID_CELLS: i16 = 100;
pub const CELL_PIXELS: u32 = 20;
pub const START_X: i16 = 15;
pub const START_Y: i16 = 15;

// Pacing
pub const BASE_SPEED_MS: u64 = 120;
pub const MIN_SPEED_MS: u64 = 60;
/// Milliseconds shaved off the dynamic interval per food eaten.
pub const SPEED_STEP_MS: u64 = 2;

// Food and logging
pub const FOOD_COUNT: usize = 1;
pub const FOOD_HISTORY_CAPACITY: usize = 5;
pub const FOOD_RESPAWN_DELAY_MS: u64 = 0;
pub const EVENT_LOG_CAPACITY: usize = 50;

/// Minimum |dx| + |dy| (canvas units) before a drag counts as a swipe.
pub const SWIPE_DEAD_ZONE: f64 = 10.0;

// Host loop
/// Poll budget per animation frame (~60 fps).
pub const FRAME_INTERVAL_MS: u64 = 16;
/// Poll budget once no frame is requested (game over).
pub const IDLE_POLL_MS: u64 = 250;

// Rendering
pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const FOOD_CORNER_RADIUS: f64 = 4.0;
pub const HEAD_CORNER_RADIUS: f64 = 6.0;
pub const BODY_CORNER_RADIUS: f64 = 4.0;
pub const GAME_OVER_TEXT: &str = "Game Over - Press Restart";
pub const GAME_OVER_FONT_PX: f64 = 24.0;

// Files under ~/.gridsnake
pub const APP_DIR_NAME: &str = ".gridsnake";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "gridsnake.log";
pub const LOG_ENV_VAR: &str = "GRIDSNAKE_LOG";
