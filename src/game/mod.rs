//! Game model and loop driver.

pub mod collision;
pub mod direction;
pub mod event_log;
pub mod food;
pub mod grid;
pub mod session;
pub mod snake;
pub mod speed;

pub use collision::Collision;
pub use direction::Direction;
pub use grid::{Cell, Grid};
pub use session::{FrameOutcome, GameSession, Phase};
pub use snake::Snake;
pub use speed::SpeedMode;
