use log::{info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cell::{Cell, Size};
use crate::config::GameConfig;
use crate::direction::Direction;
use crate::food;
use crate::snek::Snek;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfHit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Over(Collision),
    /// The snake covers every cell, so no food can be placed.
    Won,
}

impl Status {
    /// `Over` and `Won` are absorbing: no tick changes the game again.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Running)
    }
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Moved,
    Ate,
    Crashed(Collision),
    Won,
    /// The game was already over; nothing changed.
    Idle,
}

/// Wall check on the head, then self check against every other segment.
pub fn collision(size: Size, snek: &Snek) -> Option<Collision> {
    if !size.contains(snek.head()) {
        return Some(Collision::Wall);
    }
    if snek.hits_itself() {
        return Some(Collision::SelfHit);
    }
    None
}

/// The whole game state, owned by a single handle and advanced by `tick`.
#[derive(Clone, Debug)]
pub struct Game {
    size: Size,
    snek: Snek,
    food: Option<Cell>,
    status: Status,
    score: u32,
    ticks: u64,
    rng: StdRng,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Self::start(config, StdRng::from_entropy())
    }

    /// Same seed, same food sequence.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::start(config, StdRng::seed_from_u64(seed))
    }

    /// A game in an arbitrary running position.
    pub fn from_parts(size: Size, snek: Snek, food: Option<Cell>, seed: u64) -> Self {
        Game {
            size,
            snek,
            food,
            status: Status::Running,
            score: 0,
            ticks: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn start(config: &GameConfig, mut rng: StdRng) -> Self {
        let snek = Snek::new(
            config.start_head,
            config.start_direction,
            config.start_length,
        );
        let food = food::spawn(config.size, &snek, &mut rng);
        let status = match food {
            Some(_) => Status::Running,
            None => Status::Won,
        };

        info!(
            "New game on a {}x{} grid, snek length {}",
            config.size.width, config.size.height, config.start_length
        );

        Game {
            size: config.size,
            snek,
            food,
            status,
            score: 0,
            ticks: 0,
            rng,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn snek(&self) -> &Snek {
        &self.snek
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Queues a turn for the next tick. Reversals and input after the game
    /// has ended are ignored.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        let accepted = self.snek.steer(direction);
        if !accepted {
            trace!(
                "Ignored reversal to {:?} while moving {:?}",
                direction,
                self.snek.direction()
            );
        }
        accepted
    }

    /// Advances the game by one step: move (growing onto food), then check
    /// for collisions.
    pub fn tick(&mut self) -> StepResult {
        if self.status.is_terminal() {
            return StepResult::Idle;
        }
        self.ticks += 1;

        let ate = self.snek.slither(self.food);
        if ate {
            self.score += 1;
            self.food = food::spawn(self.size, &self.snek, &mut self.rng);
        }

        if let Some(hit) = collision(self.size, &self.snek) {
            info!(
                "Game over: {:?} at ({}, {}), score {}",
                hit,
                self.snek.head().x,
                self.snek.head().y,
                self.score
            );
            self.status = Status::Over(hit);
            return StepResult::Crashed(hit);
        }

        if !ate {
            return StepResult::Moved;
        }
        if self.food.is_none() {
            info!("Grid filled after {} ticks, score {}", self.ticks, self.score);
            self.status = Status::Won;
            return StepResult::Won;
        }
        StepResult::Ate
    }
}
