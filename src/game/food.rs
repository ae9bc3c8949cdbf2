//! Food placement: rejection sampling, recent-position memory and the
//! delayed-respawn timer.

use super::grid::{Cell, Grid};
use super::snake::Snake;
use rand::Rng;
use std::collections::{HashSet, VecDeque};

/// Draw random cells until one is neither occupied nor excluded.
///
/// Unbounded in the worst case; callers keep the board mostly free.
pub fn spawn_food<R: Rng>(
    grid: &Grid,
    occupied: &HashSet<Cell>,
    excluded: &HashSet<Cell>,
    rng: &mut R,
) -> Cell {
    loop {
        let pos = grid.random_cell(rng);
        if !occupied.contains(&pos) && !excluded.contains(&pos) {
            return pos;
        }
    }
}

/// Bounded FIFO of the most recently spawned food cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodHistory {
    cells: VecDeque<Cell>,
    capacity: usize,
}

impl FoodHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, cell: Cell) {
        if self.capacity == 0 {
            return;
        }
        if self.cells.len() >= self.capacity {
            self.cells.pop_front();
        }
        self.cells.push_back(cell);
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

/// Keeps `target` food cells on the board.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    grid: Grid,
    target: usize,
    respawn_delay_ms: u64,
    history: FoodHistory,
    /// Deadline of the one armed respawn timer, if any.
    respawn_due_ms: Option<u64>,
}

impl FoodSpawner {
    pub fn new(grid: Grid, target: usize, history_capacity: usize, respawn_delay_ms: u64) -> Self {
        Self {
            grid,
            target,
            respawn_delay_ms,
            history: FoodHistory::new(history_capacity),
            respawn_due_ms: None,
        }
    }

    pub fn history(&self) -> &FoodHistory {
        &self.history
    }

    /// Place one food cell clear of the snake, the live food and the history.
    pub fn spawn<R: Rng>(&mut self, snake: &Snake, foods: &[Cell], rng: &mut R) -> Cell {
        let occupied: HashSet<Cell> = snake.iter().chain(foods.iter()).copied().collect();
        let excluded: HashSet<Cell> = self.history.iter().copied().collect();
        let cell = spawn_food(&self.grid, &occupied, &excluded, rng);
        self.history.record(cell);
        cell
    }

    /// Top `foods` up to the target. Returns the cells added.
    pub fn fill<R: Rng>(&mut self, snake: &Snake, foods: &mut Vec<Cell>, rng: &mut R) -> Vec<Cell> {
        let mut added = Vec::new();
        while foods.len() < self.target {
            let cell = self.spawn(snake, foods, rng);
            foods.push(cell);
            added.push(cell);
        }
        added
    }

    /// True when eaten food is replaced on the spot rather than by timer.
    pub fn respawns_immediately(&self) -> bool {
        self.respawn_delay_ms == 0
    }

    /// Arm the respawn timer unless one is already pending.
    /// Returns false when a timer was already armed.
    pub fn arm_respawn(&mut self, now_ms: u64) -> bool {
        if self.respawn_due_ms.is_some() {
            return false;
        }
        self.respawn_due_ms = Some(now_ms.saturating_add(self.respawn_delay_ms));
        true
    }

    pub fn respawn_due_ms(&self) -> Option<u64> {
        self.respawn_due_ms
    }

    pub fn respawn_pending(&self) -> bool {
        self.respawn_due_ms.is_some()
    }

    /// Disarm and report whether the timer has expired at `now_ms`.
    pub fn take_due_respawn(&mut self, now_ms: u64) -> bool {
        match self.respawn_due_ms {
            Some(due) if now_ms >= due => {
                self.respawn_due_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel_respawn(&mut self) {
        self.respawn_due_ms = None;
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.respawn_due_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_spawn_food_avoids_occupied_and_excluded() {
        let grid = Grid::new(3);
        let mut rng = seeded_rng();
        // Leave exactly one free cell: (2,2)
        let occupied: HashSet<Cell> = (0..3)
            .flat_map(|x| (0..3).map(move |y| Cell::new(x, y)))
            .filter(|c| c.y < 2)
            .collect();
        let excluded: HashSet<Cell> = [Cell::new(0, 2), Cell::new(1, 2)].into_iter().collect();
        for _ in 0..20 {
            assert_eq!(
                spawn_food(&grid, &occupied, &excluded, &mut rng),
                Cell::new(2, 2)
            );
        }
    }

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = FoodHistory::new(3);
        for x in 0..5 {
            history.record(Cell::new(x, 0));
        }
        let cells: Vec<Cell> = history.iter().copied().collect();
        assert_eq!(cells, vec![Cell::new(2, 0), Cell::new(3, 0), Cell::new(4, 0)]);
        assert!(!history.contains(&Cell::new(0, 0)));
    }

    #[test]
    fn test_zero_capacity_history_records_nothing() {
        let mut history = FoodHistory::new(0);
        history.record(Cell::new(1, 1));
        assert!(history.is_empty());
    }

    #[test]
    fn test_spawner_never_repeats_recent_cells() {
        let grid = Grid::new(4);
        let mut spawner = FoodSpawner::new(grid, 1, 5, 0);
        let snake = Snake::new(Cell::new(0, 0));
        let mut rng = seeded_rng();
        let mut spawned: Vec<Cell> = Vec::new();
        for _ in 0..200 {
            let cell = spawner.spawn(&snake, &[], &mut rng);
            assert_ne!(cell, Cell::new(0, 0));
            let recent = spawned.iter().rev().take(5);
            for previous in recent {
                assert_ne!(*previous, cell);
            }
            spawned.push(cell);
        }
        assert_eq!(spawner.history().len(), 5);
    }

    #[test]
    fn test_fill_tops_up_to_target() {
        let grid = Grid::new(10);
        let mut spawner = FoodSpawner::new(grid, 3, 5, 0);
        let snake = Snake::new(Cell::new(5, 5));
        let mut foods = Vec::new();
        let mut rng = seeded_rng();

        let added = spawner.fill(&snake, &mut foods, &mut rng);
        assert_eq!(added.len(), 3);
        assert_eq!(foods.len(), 3);
        let unique: HashSet<Cell> = foods.iter().copied().collect();
        assert_eq!(unique.len(), 3);
        assert!(!foods.contains(&Cell::new(5, 5)));

        assert!(spawner.fill(&snake, &mut foods, &mut rng).is_empty());
    }

    #[test]
    fn test_respawn_timer_single_shot() {
        let mut spawner = FoodSpawner::new(Grid::new(10), 1, 5, 300);
        assert!(!spawner.respawns_immediately());
        assert!(spawner.arm_respawn(1_000));
        assert!(!spawner.arm_respawn(1_100), "second arm must be refused");
        assert_eq!(spawner.respawn_due_ms(), Some(1_300));

        assert!(!spawner.take_due_respawn(1_299));
        assert!(spawner.take_due_respawn(1_300));
        assert!(!spawner.respawn_pending());
        assert!(!spawner.take_due_respawn(5_000));
    }

    #[test]
    fn test_reset_clears_history_and_timer() {
        let mut spawner = FoodSpawner::new(Grid::new(10), 1, 5, 300);
        let snake = Snake::new(Cell::new(5, 5));
        let mut rng = seeded_rng();
        spawner.spawn(&snake, &[], &mut rng);
        spawner.arm_respawn(0);
        spawner.reset();
        assert!(spawner.history().is_empty());
        assert!(!spawner.respawn_pending());
    }
}
