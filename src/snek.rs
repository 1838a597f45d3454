use std::collections::VecDeque;

use crate::cell::Cell;
use crate::direction::{Delta, Direction};

/// The snake. `body[0]` is the head, the back of the deque is the tail.
#[derive(Clone, Debug, PartialEq)]
pub struct Snek {
    body: VecDeque<Cell>,
    /// Direction of the last completed move.
    direction: Direction,
    /// Most recently accepted turn, committed on the next move.
    pending: Direction,
}

impl Snek {
    /// A straight snake of `length` cells with the head at `head`, trailing
    /// away from `direction`.
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let back: Delta = direction.opposite().into();
        let mut body = VecDeque::with_capacity(length.max(1));
        body.push_back(head);
        for _ in 1..length {
            let last = body[body.len() - 1];
            body.push_back(last.offset(back));
        }

        Snek {
            body,
            direction,
            pending: direction,
        }
    }

    /// Builds a snake from explicit cells, head first.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!body.is_empty(), "A snek needs at least a head");
        Snek {
            body,
            direction,
            pending: direction,
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

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending(&self) -> Direction {
        self.pending
    }

    /// Head first.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Queues a turn unless it reverses the direction of the last move.
    /// Returns whether the turn was accepted.
    pub fn steer(&mut self, new_direction: Direction) -> bool {
        if self.direction.is_opposite(new_direction) {
            return false;
        }
        self.pending = new_direction;
        true
    }

    /// Moves one cell in the pending direction. The tail is kept, growing the
    /// snake by one, when the new head lands on `food`. Returns whether it grew.
    pub fn slither(&mut self, food: Option<Cell>) -> bool {
        self.direction = self.pending;
        let new_head = self.head().offset(self.direction.into());
        self.body.push_front(new_head);

        let grew = Some(new_head) == food;
        if !grew {
            self.body.pop_back();
        }
        grew
    }

    /// True when the head shares a cell with any other segment.
    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }
}
