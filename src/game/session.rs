//! The loop driver: one owned aggregate of all mutable game state, stepped
//! by the host once per frame.

use super::collision::{check_collision, Collision};
use super::direction::Direction;
use super::event_log::{EventLog, FoodEvent};
use super::food::{FoodHistory, FoodSpawner};
use super::grid::{Cell, Grid};
use super::snake::Snake;
use super::speed::{SpeedController, SpeedMode};
use crate::config::GameConfig;
use crate::render::commands::Scene;
use rand::Rng;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// What a frame callback did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Interval not yet elapsed.
    Waiting,
    Moved,
    Ate,
    /// Final frame of the session.
    Crashed(Collision),
    /// Called after game over; nothing changed.
    Halted,
}

impl FrameOutcome {
    /// Whether the host should schedule another frame.
    pub fn keep_running(self) -> bool {
        !matches!(self, FrameOutcome::Crashed(_) | FrameOutcome::Halted)
    }

    pub fn needs_redraw(self) -> bool {
        matches!(
            self,
            FrameOutcome::Moved | FrameOutcome::Ate | FrameOutcome::Crashed(_)
        )
    }
}

pub struct GameSession<R: Rng> {
    config: GameConfig,
    grid: Grid,
    rng: R,
    snake: Snake,
    direction: Direction,
    pending_direction: Direction,
    foods: Vec<Cell>,
    score: u32,
    speed: SpeedController,
    mode: SpeedMode,
    phase: Phase,
    last_tick_ms: Option<u64>,
    spawner: FoodSpawner,
    events: EventLog,
    ticks: u64,
}

impl<R: Rng> GameSession<R> {
    /// Start a fresh session at the configured start cell.
    pub fn new(config: GameConfig, rng: R) -> Self {
        let mut session = Self::blank(config, rng);
        session.reset_state();
        info!(
            grid = session.grid.cells(),
            mode = session.mode.name(),
            "session started"
        );
        session
    }

    /// Start from an explicit arrangement. `foods` is used as given.
    /// Restart still returns to the configured start cell.
    pub fn from_layout(
        config: GameConfig,
        rng: R,
        snake: Snake,
        direction: Direction,
        foods: Vec<Cell>,
    ) -> Self {
        let mut session = Self::blank(config, rng);
        session.snake = snake;
        session.direction = direction;
        session.pending_direction = direction;
        session.foods = foods;
        session
    }

    fn blank(config: GameConfig, rng: R) -> Self {
        let grid = config.grid();
        Self {
            grid,
            rng,
            snake: Snake::new(config.start),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            foods: Vec::with_capacity(config.food.count),
            score: 0,
            speed: config.speed_controller(),
            mode: config.speed_mode,
            phase: Phase::Running,
            last_tick_ms: None,
            spawner: FoodSpawner::new(
                grid,
                config.food.count,
                config.food.history_capacity,
                config.food.respawn_delay_ms,
            ),
            events: EventLog::new(config.event_log_capacity),
            ticks: 0,
            config,
        }
    }

    /// The only place game state is (re)initialized. Speed mode survives.
    fn reset_state(&mut self) {
        self.snake = Snake::new(self.config.start);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.foods.clear();
        self.score = 0;
        self.speed.reset();
        self.phase = Phase::Running;
        self.last_tick_ms = None;
        self.spawner.reset();
        self.events.clear();
        self.ticks = 0;
        self.replenish_food();
    }

    pub fn restart(&mut self) {
        self.reset_state();
        info!(mode = self.mode.name(), "session restarted");
    }

    /// Per-frame callback. Ticks when the current interval has elapsed since
    /// the last tick, or immediately on the first frame.
    pub fn on_frame(&mut self, now_ms: u64) -> FrameOutcome {
        if self.phase == Phase::GameOver {
            return FrameOutcome::Halted;
        }
        if let Some(last) = self.last_tick_ms {
            if now_ms.saturating_sub(last) < self.current_interval_ms() {
                return FrameOutcome::Waiting;
            }
        }
        self.tick(now_ms)
    }

    /// Advance exactly one cell, ignoring pacing.
    pub fn tick(&mut self, now_ms: u64) -> FrameOutcome {
        if self.phase == Phase::GameOver {
            return FrameOutcome::Halted;
        }
        self.last_tick_ms = Some(now_ms);
        self.ticks += 1;
        self.direction = self.pending_direction;

        let new_head = self.snake.head().step(self.direction);
        let collision = check_collision(&self.snake, new_head, &self.grid);
        if collision.is_fatal() {
            self.phase = Phase::GameOver;
            self.spawner.cancel_respawn();
            info!(
                score = self.score,
                length = self.snake.len(),
                ticks = self.ticks,
                "game over: {}",
                collision.describe()
            );
            return FrameOutcome::Crashed(collision);
        }

        let eaten = self.foods.iter().position(|&food| food == new_head);
        self.snake.advance(new_head, eaten.is_some());
        let Some(index) = eaten else {
            return FrameOutcome::Moved;
        };

        self.foods.swap_remove(index);
        self.score += 1;
        self.speed.on_food_eaten();
        self.events.push(FoodEvent::Eaten {
            cell: new_head,
            score: self.score,
        });
        debug!(
            score = self.score,
            interval_ms = self.current_interval_ms(),
            "tick ate food"
        );
        if self.spawner.respawns_immediately() {
            self.replenish_food();
        } else {
            self.spawner.arm_respawn(now_ms);
        }
        FrameOutcome::Ate
    }

    fn replenish_food(&mut self) {
        let added = self
            .spawner
            .fill(&self.snake, &mut self.foods, &mut self.rng);
        for cell in added {
            self.events.push(FoodEvent::Spawned { cell });
        }
    }

    /// Request a turn. Refused when it stays on the committed axis or the
    /// game is over.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.phase == Phase::GameOver || !self.direction.can_turn_to(direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn cycle_speed_mode(&mut self) -> SpeedMode {
        self.mode = self.mode.next();
        info!(
            mode = self.mode.name(),
            interval_ms = self.current_interval_ms(),
            "speed mode changed"
        );
        self.mode
    }

    /// Host timer callback for delayed respawn. Returns true if food was placed.
    pub fn fire_respawn_timer(&mut self, now_ms: u64) -> bool {
        if self.phase == Phase::GameOver || !self.spawner.take_due_respawn(now_ms) {
            return false;
        }
        self.replenish_food();
        true
    }

    pub fn respawn_due_ms(&self) -> Option<u64> {
        self.spawner.respawn_due_ms()
    }

    pub fn respawn_pending(&self) -> bool {
        self.spawner.respawn_pending()
    }

    pub fn current_interval_ms(&self) -> u64 {
        self.speed.current_interval(self.mode)
    }

    pub fn scene(&self) -> Scene<'_> {
        Scene {
            snake: &self.snake,
            foods: &self.foods,
            game_over: self.is_game_over(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn foods(&self) -> &[Cell] {
        &self.foods
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn speed_mode(&self) -> SpeedMode {
        self.mode
    }

    pub fn speed(&self) -> &SpeedController {
        &self.speed
    }

    pub fn food_history(&self) -> &FoodHistory {
        self.spawner.history()
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_tick_ms(&self) -> Option<u64> {
        self.last_tick_ms
    }
}
