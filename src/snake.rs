use std::collections::VecDeque;

use crate::{Coords, TermInt};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

pub struct Snake {
    body: VecDeque<Coords>,
    direction: Direction,
    pending_growth: usize,
}

impl Snake {
    /// Creates a horizontal snake of `length` cells facing Right, tail at
    /// `origin` and head `length - 1` columns to its right. The body buffer
    /// is preallocated to `capacity`, the maximum length it can ever reach.
    pub fn new(origin: Coords, length: TermInt, capacity: usize) -> Self {
        let mut body = VecDeque::with_capacity(capacity);
        body.extend((0..length).map(|i| (origin.0 + i, origin.1)));
        Snake { body, direction: Right, pending_growth: 0 }
    }

    pub fn head(&self) -> Coords {
        *self.body.back().unwrap()
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Body length including growth that has been eaten but not yet stepped.
    pub fn len(&self) -> usize {
        self.body.len() + self.pending_growth
    }

    pub fn occupies(&self, cell: Coords) -> bool {
        self.body.contains(&cell)
    }

    /// One shift-and-advance. A `Some` turn replaces the direction first;
    /// reversals are not filtered, so turning back into the body ends the
    /// game on the collision check that follows each move.
    pub fn advance(&mut self, turn: Option<Direction>, width: TermInt, height: TermInt) {
        if let Some(dir) = turn {
            self.direction = dir;
        }

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop_front();
        }

        let new_head = step(self.head(), self.direction, width, height);
        self.body.push_back(new_head);
    }

    /// Marks one segment of growth; the next `advance` keeps the tail.
    pub fn grow(&mut self) {
        self.pending_growth += 1;
    }

    pub fn has_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().take(self.body.len() - 1).any(|&cell| cell == head)
    }
}

/// Advances a cell one step, wrapping into the 1-based interior range
/// `[1, width]` x `[1, height]`.
fn step(cell: Coords, direction: Direction, width: TermInt, height: TermInt) -> Coords {
    let (x, y) = cell;

    match direction {
        Up => (x, (y + height - 2) % height + 1),
        Down => (x, y % height + 1),
        Left => ((x + width - 2) % width + 1, y),
        Right => (x % width + 1, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: TermInt = 20;
    const H: TermInt = 10;

    fn test_snake() -> Snake {
        Snake::new((3, 5), 5, 64)
    }

    #[test]
    fn initial_body_is_a_horizontal_row_facing_right() {
        let snake = test_snake();
        let body: Vec<Coords> = snake.body().iter().copied().collect();

        assert_eq!(body, vec![(3, 5), (4, 5), (5, 5), (6, 5), (7, 5)]);
        assert_eq!(snake.head(), (7, 5));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn step_wraps_every_edge() {
        assert_eq!(step((W, 3), Direction::Right, W, H), (1, 3));
        assert_eq!(step((1, 3), Direction::Left, W, H), (W, 3));
        assert_eq!(step((3, 1), Direction::Up, W, H), (3, H));
        assert_eq!(step((3, H), Direction::Down, W, H), (3, 1));
    }

    #[test]
    fn head_reenters_at_column_one_after_the_right_edge() {
        let mut snake = Snake::new((W - 4, 3), 5, 64);
        assert_eq!(snake.head(), (W, 3));

        snake.advance(None, W, H);
        assert_eq!(snake.head(), (1, 3));
        snake.advance(None, W, H);
        assert_eq!(snake.head(), (2, 3));
    }

    #[test]
    fn no_input_keeps_the_current_direction() {
        let mut snake = test_snake();
        snake.advance(Some(Direction::Up), W, H);
        assert_eq!(snake.head(), (7, 4));

        snake.advance(None, W, H);
        snake.advance(None, W, H);
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.head(), (7, 2));
    }

    #[test]
    fn growth_extends_length_by_exactly_one() {
        let mut snake = test_snake();
        let old_cells: Vec<Coords> = snake.body().iter().copied().collect();
        let head = snake.head();

        snake.grow();
        assert_eq!(snake.len(), 6);

        snake.advance(None, W, H);
        assert_eq!(snake.body().len(), 6);
        assert!(snake.occupies(head));
        for cell in old_cells {
            assert!(snake.occupies(cell));
        }
    }

    #[test]
    fn length_tracks_apples_eaten_across_moves() {
        let mut snake = Snake::new((3, 5), 5, 256);
        let mut eats = 0;

        for i in 0..12 {
            if i % 3 == 0 {
                snake.grow();
                eats += 1;
            }
            snake.advance(None, 30, 20);
        }

        assert_eq!(snake.body().len(), 5 + eats);
    }

    #[test]
    fn straight_body_has_no_collision() {
        let snake = test_snake();
        assert!(!snake.has_self_collision());
    }

    #[test]
    fn reversal_collides_with_the_second_segment() {
        let mut snake = test_snake();
        snake.advance(Some(Direction::Left), W, H);

        assert_eq!(snake.head(), (6, 5));
        assert!(snake.has_self_collision());
    }
}
