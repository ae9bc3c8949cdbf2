//! Collision detection for the next head position.

use super::grid::{Cell, Grid};
use super::snake::Snake;

/// Outcome of moving the head into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    None,
    /// Head left the board.
    Wall,
    /// Head ran into its own body.
    Body,
}

impl Collision {
    pub fn is_fatal(self) -> bool {
        !matches!(self, Collision::None)
    }

    pub fn describe(self) -> &'static str {
        match self {
            Collision::None => "no collision",
            Collision::Wall => "hit the wall",
            Collision::Body => "bit its own tail",
        }
    }
}

/// Classify `new_head` against the board and the current body.
///
/// Runs before the tail is dropped, so every segment except the head counts,
/// including the tail cell that a non-eating move would vacate.
pub fn check_collision(snake: &Snake, new_head: Cell, grid: &Grid) -> Collision {
    if !grid.in_bounds(new_head) {
        return Collision::Wall;
    }
    if snake.iter().skip(1).any(|&seg| seg == new_head) {
        return Collision::Body;
    }
    Collision::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;

    fn grid() -> Grid {
        Grid::new(30)
    }

    #[test]
    fn test_open_cell_is_clear() {
        let snake = Snake::new(Cell::new(15, 15));
        let next = snake.head().step(Direction::Right);
        assert_eq!(check_collision(&snake, next, &grid()), Collision::None);
    }

    #[test]
    fn test_wall_on_every_side() {
        let g = grid();
        for (head, dir) in [
            (Cell::new(29, 4), Direction::Right),
            (Cell::new(0, 4), Direction::Left),
            (Cell::new(4, 0), Direction::Up),
            (Cell::new(4, 29), Direction::Down),
        ] {
            let snake = Snake::new(head);
            assert_eq!(
                check_collision(&snake, head.step(dir), &g),
                Collision::Wall,
                "{:?} from {:?}",
                dir,
                head
            );
        }
    }

    #[test]
    fn test_body_collision() {
        // U-turn: head at (5,5) moving right into (6,5)
        let snake = Snake::from_cells([
            Cell::new(5, 5),
            Cell::new(5, 4),
            Cell::new(6, 4),
            Cell::new(6, 5),
            Cell::new(6, 6),
        ])
        .unwrap();
        assert_eq!(
            check_collision(&snake, Cell::new(6, 5), &grid()),
            Collision::Body
        );
    }

    #[test]
    fn test_tail_cell_still_counts() {
        // Square loop: the head moves into the cell the tail would vacate.
        let snake = Snake::from_cells([
            Cell::new(5, 5),
            Cell::new(6, 5),
            Cell::new(6, 6),
            Cell::new(5, 6),
        ])
        .unwrap();
        assert_eq!(
            check_collision(&snake, Cell::new(5, 6), &grid()),
            Collision::Body
        );
    }

    #[test]
    fn test_fatal_flags() {
        assert!(!Collision::None.is_fatal());
        assert!(Collision::Wall.is_fatal());
        assert!(Collision::Body.is_fatal());
    }
}
