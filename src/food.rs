use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::cell::{Cell, Size};
use crate::snek::Snek;

/// Picks a cell uniformly among those inside `size` not covered by `snek`.
/// Returns `None` when the snake fills the whole grid.
pub fn spawn(size: Size, snek: &Snek, rng: &mut impl Rng) -> Option<Cell> {
    let food = free_cells(size, snek).choose(rng);
    match food {
        Some(cell) => debug!("Food spawned at ({}, {})", cell.x, cell.y),
        None => debug!("No free cell left for food"),
    }
    food
}

pub fn free_cells(size: Size, snek: &Snek) -> impl Iterator<Item = Cell> + '_ {
    size.cells().filter(move |&cell| !snek.contains(cell))
}
