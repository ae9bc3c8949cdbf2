//! Game configuration: JSON file under `~/.gridsnake/`, CLI overrides, validation.

use crate::constants::*;
use crate::game::grid::{Cell, Grid};
use crate::game::speed::{SpeedController, SpeedMode};
use crate::render::palette::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FoodConfig {
    /// Live food cells kept on the board.
    pub count: usize,
    /// Recently spawned cells excluded from the next spawn.
    pub history_capacity: usize,
    /// 0 replaces eaten food in the same tick.
    pub respawn_delay_ms: u64,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            count: FOOD_COUNT,
            history_capacity: FOOD_HISTORY_CAPACITY,
            respawn_delay_ms: FOOD_RESPAWN_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid_cells: i16,
    pub cell_pixels: u32,
    pub base_speed_ms: u64,
    pub min_speed_ms: u64,
    pub speed_step_ms: u64,
    pub start: Cell,
    pub food: FoodConfig,
    pub swipe_dead_zone: f64,
    pub speed_mode: SpeedMode,
    pub theme: Theme,
    pub event_log_capacity: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_cells: GRID_CELLS,
            cell_pixels: CELL_PIXELS,
            base_speed_ms: BASE_SPEED_MS,
            min_speed_ms: MIN_SPEED_MS,
            speed_step_ms: SPEED_STEP_MS,
            start: Cell::new(START_X, START_Y),
            food: FoodConfig::default(),
            swipe_dead_zone: SWIPE_DEAD_ZONE,
            speed_mode: SpeedMode::default(),
            theme: Theme::default(),
            event_log_capacity: EVENT_LOG_CAPACITY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Explicit path if given, else `~/.gridsnake/config.json` when present,
    /// else defaults. A missing explicit path is an error.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_GRID_CELLS).contains(&self.grid_cells) {
            return Err(ConfigError::Invalid(format!(
                "grid_cells must be in 2..={}, got {}",
                MAX_GRID_CELLS, self.grid_cells
            )));
        }
        if !self.grid().in_bounds(self.start) {
            return Err(ConfigError::Invalid(format!(
                "start ({}, {}) is outside a {}x{} grid",
                self.start.x, self.start.y, self.grid_cells, self.grid_cells
            )));
        }
        if self.cell_pixels < 2 {
            return Err(ConfigError::Invalid(format!(
                "cell_pixels must be at least 2, got {}",
                self.cell_pixels
            )));
        }
        if self.min_speed_ms == 0 || self.min_speed_ms > self.base_speed_ms {
            return Err(ConfigError::Invalid(format!(
                "min_speed_ms must be in 1..={}, got {}",
                self.base_speed_ms, self.min_speed_ms
            )));
        }
        if self.food.count == 0 {
            return Err(ConfigError::Invalid("food.count must be at least 1".into()));
        }
        // One cell for the snake, the rest must fit food plus history with room to spare.
        let area = self.grid().area();
        if 1 + self.food.count + self.food.history_capacity > area {
            return Err(ConfigError::Invalid(format!(
                "food.count + food.history_capacity leaves no free cell on a {}-cell grid",
                area
            )));
        }
        if !self.swipe_dead_zone.is_finite() || self.swipe_dead_zone < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "swipe_dead_zone must be a finite non-negative number, got {}",
                self.swipe_dead_zone
            )));
        }
        if self.event_log_capacity == 0 {
            return Err(ConfigError::Invalid(
                "event_log_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_cells)
    }

    pub fn speed_controller(&self) -> SpeedController {
        SpeedController::new(self.base_speed_ms, self.min_speed_ms, self.speed_step_ms)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Get the ~/.gridsnake/ directory path, creating it if needed.
pub fn app_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(APP_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// `~/.gridsnake/config.json`, without creating anything.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_cells, 30);
        assert_eq!(config.start, Cell::new(15, 15));
        assert_eq!(config.food.history_capacity, 5);
    }

    #[test]
    fn test_largest_grid_is_valid() {
        let config = GameConfig {
            grid_cells: MAX_GRID_CELLS,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"grid_cells": 12, "start": {"x": 3, "y": 4}, "food": {"count": 2}}"#)
                .unwrap();
        assert_eq!(config.grid_cells, 12);
        assert_eq!(config.start, Cell::new(3, 4));
        assert_eq!(config.food.count, 2);
        assert_eq!(config.food.history_capacity, FOOD_HISTORY_CAPACITY);
        assert_eq!(config.base_speed_ms, BASE_SPEED_MS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<GameConfig, _> = serde_json::from_str(r#"{"grid_size": 10}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_enum_fields_parse_lowercase() {
        let config: GameConfig =
            serde_json::from_str(r#"{"speed_mode": "fast", "theme": "light"}"#).unwrap();
        assert_eq!(config.speed_mode, SpeedMode::Fast);
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn test_invalid_values() {
        let cases: Vec<GameConfig> = vec![
            GameConfig {
                grid_cells: 1,
                start: Cell::new(0, 0),
                ..GameConfig::default()
            },
            GameConfig {
                grid_cells: MAX_GRID_CELLS + 1,
                ..GameConfig::default()
            },
            GameConfig {
                grid_cells: i16::MAX,
                ..GameConfig::default()
            },
            GameConfig {
                start: Cell::new(30, 0),
                ..GameConfig::default()
            },
            GameConfig {
                cell_pixels: 1,
                ..GameConfig::default()
            },
            GameConfig {
                min_speed_ms: 0,
                ..GameConfig::default()
            },
            GameConfig {
                min_speed_ms: 200,
                ..GameConfig::default()
            },
            GameConfig {
                food: FoodConfig {
                    count: 0,
                    ..FoodConfig::default()
                },
                ..GameConfig::default()
            },
            GameConfig {
                grid_cells: 2,
                start: Cell::new(0, 0),
                food: FoodConfig {
                    count: 1,
                    history_capacity: 3,
                    respawn_delay_ms: 0,
                },
                ..GameConfig::default()
            },
            GameConfig {
                swipe_dead_zone: f64::NAN,
                ..GameConfig::default()
            },
            GameConfig {
                swipe_dead_zone: -1.0,
                ..GameConfig::default()
            },
            GameConfig {
                event_log_capacity: 0,
                ..GameConfig::default()
            },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "expected invalid: {:?}",
                config
            );
        }
    }

    #[test]
    fn test_load_reports_read_and_parse_errors() {
        let dir = std::env::temp_dir().join(format!("gridsnake_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        assert!(matches!(
            GameConfig::load(&missing),
            Err(ConfigError::Read { .. })
        ));
        assert!(matches!(
            GameConfig::load_or_default(Some(&missing)),
            Err(ConfigError::Read { .. })
        ));

        let broken = dir.join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            GameConfig::load(&broken),
            Err(ConfigError::Parse { .. })
        ));

        let good = dir.join("good.json");
        fs::write(&good, r#"{"seed": 7}"#).unwrap();
        let config = GameConfig::load(&good).unwrap();
        assert_eq!(config.seed, Some(7));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_to_json_round_trips() {
        let config = GameConfig {
            seed: Some(99),
            theme: Theme::Light,
            ..GameConfig::default()
        };
        let json = config.to_json().unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
