//! Grid snake: a single-player snake game on a fixed-size grid.
//!
//! The state-update rules (`snek`, `food`, `game`) have no terminal or I/O
//! dependencies. `input`, `render` and `app` are the terminal front-end.

pub mod app;
pub mod cell;
pub mod config;
pub mod direction;
pub mod food;
pub mod game;
pub mod input;
pub mod render;
pub mod snek;

pub use cell::{Cell, Size};
pub use config::GameConfig;
pub use direction::{Delta, Direction};
pub use game::{Collision, Game, Status, StepResult};
pub use snek::Snek;
