use std::time::Duration;

use crate::cell::{Cell, Size};
use crate::direction::{Delta, Direction};

/// Largest accepted grid side. Food placement scans every cell, and the
/// board has to fit a terminal.
pub const MAX_SIDE: u16 = 256;

/// Board and start-position settings for one game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub size: Size,
    pub start_head: Cell,
    pub start_direction: Direction,
    pub start_length: usize,
    pub tick_rate: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: Size::new(20, 20),
            start_head: Cell::new(5, 5),
            start_direction: Direction::Right,
            start_length: 3,
            tick_rate: Duration::from_millis(100),
        }
    }
}

impl GameConfig {
    /// Default settings on a custom grid. The start head stays at (5, 5) when
    /// the grid has room for it; on smaller grids it is pulled inside and the
    /// snake is shortened so that it fits with at least one free cell.
    pub fn new(width: u16, height: u16) -> Self {
        let defaults = GameConfig::default();
        let size = Size::new(width, height);

        let x = defaults.start_head.x.min(width.saturating_sub(1) as i32);
        let y = if (height as i32) > defaults.start_head.y {
            defaults.start_head.y
        } else {
            (height / 2) as i32
        };
        let start_length = defaults
            .start_length
            .min(x as usize + 1)
            .min(size.area().saturating_sub(1));

        GameConfig {
            size,
            start_head: Cell::new(x, y),
            start_length,
            ..defaults
        }
    }

    /// Checks that the starting snake fits the grid with room for food.
    pub fn validate(&self) -> Result<(), String> {
        if self.size.width < 2 || self.size.height < 2 {
            return Err(format!(
                "grid must be at least 2x2, got {}x{}",
                self.size.width, self.size.height
            ));
        }

        if self.size.width > MAX_SIDE || self.size.height > MAX_SIDE {
            return Err(format!(
                "grid must be at most {}x{}, got {}x{}",
                MAX_SIDE, MAX_SIDE, self.size.width, self.size.height
            ));
        }

        if self.start_length == 0 {
            return Err("start_length must be positive".to_string());
        }

        if self.start_length >= self.size.area() {
            return Err(format!(
                "start_length {} leaves no room for food on a {}x{} grid",
                self.start_length, self.size.width, self.size.height
            ));
        }

        let back: Delta = self.start_direction.opposite().into();
        let mut cell = self.start_head;
        for _ in 0..self.start_length {
            if !self.size.contains(cell) {
                return Err(format!(
                    "starting snake leaves the grid at ({}, {})",
                    cell.x, cell.y
                ));
            }
            cell = cell.offset(back);
        }

        if self.tick_rate.is_zero() {
            return Err("tick_rate must be non-zero".to_string());
        }

        Ok(())
    }
}
