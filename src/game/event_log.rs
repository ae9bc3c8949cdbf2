//! Bounded log of food events, newest kept, oldest evicted.

use super::grid::Cell;
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodEvent {
    Spawned { cell: Cell },
    Eaten { cell: Cell, score: u32 },
}

impl FoodEvent {
    pub fn cell(&self) -> Cell {
        match *self {
            FoodEvent::Spawned { cell } | FoodEvent::Eaten { cell, .. } => cell,
        }
    }

    pub fn describe(&self) -> String {
        match *self {
            FoodEvent::Spawned { cell } => format!("food at ({}, {})", cell.x, cell.y),
            FoodEvent::Eaten { cell, score } => {
                format!("ate ({}, {}) -> {}", cell.x, cell.y, score)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub event: FoodEvent,
}

#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, event: FoodEvent) {
        let cell = event.cell();
        match event {
            FoodEvent::Spawned { .. } => debug!(x = cell.x, y = cell.y, "food spawned"),
            FoodEvent::Eaten { score, .. } => debug!(x = cell.x, y = cell.y, score, "food eaten"),
        }
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            at: Local::now(),
            event,
        });
    }

    /// Newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter().rev().take(n)
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
