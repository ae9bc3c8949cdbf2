//! Keyboard and swipe input mapped to game actions.

use crate::game::direction::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An action requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Steer(Direction),
    Restart,
    CycleSpeed,
    ToggleTheme,
    Quit,
}

/// Map a key press to an action. Letters are case-insensitive.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(GameInput::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Up => Some(GameInput::Steer(Direction::Up)),
        KeyCode::Down => Some(GameInput::Steer(Direction::Down)),
        KeyCode::Left => Some(GameInput::Steer(Direction::Left)),
        KeyCode::Right => Some(GameInput::Steer(Direction::Right)),
        KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(GameInput::Steer(Direction::Up)),
            's' => Some(GameInput::Steer(Direction::Down)),
            'a' => Some(GameInput::Steer(Direction::Left)),
            'd' => Some(GameInput::Steer(Direction::Right)),
            'r' => Some(GameInput::Restart),
            'm' => Some(GameInput::CycleSpeed),
            't' => Some(GameInput::ToggleTheme),
            'q' => Some(GameInput::Quit),
            _ => None,
        },
        _ => None,
    }
}

/// Turns a drag gesture into at most one direction.
///
/// Positions are in canvas units. A move counts once the summed absolute
/// offset from the gesture origin reaches the dead zone; the dominant axis
/// wins and ties go vertical.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    origin: Option<(f64, f64)>,
    dead_zone: f64,
}

impl SwipeTracker {
    pub fn new(dead_zone: f64) -> Self {
        Self {
            origin: None,
            dead_zone,
        }
    }

    pub fn begin(&mut self, x: f64, y: f64) {
        self.origin = Some((x, y));
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Feed a move. Returns a direction for the first qualifying move only.
    pub fn update(&mut self, x: f64, y: f64) -> Option<Direction> {
        let (ox, oy) = self.origin?;
        let (dx, dy) = (x - ox, y - oy);
        if dx.abs() + dy.abs() < self.dead_zone {
            return None;
        }
        let direction = if dx.abs() > dy.abs() {
            if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0.0 {
            Direction::Down
        } else if dy < 0.0 {
            Direction::Up
        } else {
            return None;
        };
        self.origin = None;
        Some(direction)
    }

    pub fn end(&mut self) {
        self.origin = None;
    }
}
