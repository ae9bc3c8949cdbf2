//! The snake body.

use super::grid::Cell;
use std::collections::VecDeque;

/// Snake body segments, head first. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A one-cell snake.
    pub fn new(start: Cell) -> Self {
        Self {
            body: VecDeque::from([start]),
        }
    }

    /// Build a snake from head-first cells. Returns `None` for an empty body.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body.contains(cell)
    }

    /// Prepend `new_head`; keep the tail only when growing.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    /// Every pair of consecutive segments is one step apart.
    pub fn is_contiguous(&self) -> bool {
        self.body
            .iter()
            .zip(self.body.iter().skip(1))
            .all(|(a, b)| a.manhattan_distance(*b) == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Snake {
        Snake::from_cells([Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]).unwrap()
    }

    #[test]
    fn test_new_snake_is_single_cell() {
        let snake = Snake::new(Cell::new(15, 15));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(15, 15));
        assert_eq!(snake.tail(), Cell::new(15, 15));
        assert!(snake.is_contiguous());
    }

    #[test]
    fn test_from_cells_rejects_empty() {
        assert!(Snake::from_cells(Vec::new()).is_none());
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let mut snake = line();
        snake.advance(Cell::new(6, 5), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.tail(), Cell::new(4, 5));
        assert!(snake.is_contiguous());
    }

    #[test]
    fn test_advance_with_growth_keeps_tail() {
        let mut snake = line();
        snake.advance(Cell::new(6, 5), true);
        let cells: Vec<Cell> = snake.iter().copied().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(6, 5),
                Cell::new(5, 5),
                Cell::new(4, 5),
                Cell::new(3, 5)
            ]
        );
    }

    #[test]
    fn test_gap_is_not_contiguous() {
        let snake = Snake::from_cells([Cell::new(5, 5), Cell::new(3, 5)]).unwrap();
        assert!(!snake.is_contiguous());
    }
}
