// engine.rs - Board ownership and mutation commands

use rand::Rng;
use tracing::{debug, trace};

use crate::error::{LifeError, Result};
use crate::grid::Board;
use crate::patterns::{self, Pattern};
use crate::rules;

/// Owns the current board plus a scratch buffer that each step writes into.
#[derive(Debug, Clone)]
pub struct Engine {
    current: Board,
    next: Board,
    generation: u64,
}

impl Engine {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let current = Board::new(rows, cols)?;
        Ok(Self {
            next: current.clone(),
            current,
            generation: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.current.live_cells()
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        rules::step_into(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        trace!(generation = self.generation, "stepped");
    }

    /// Flips a cell. Coordinates off the board are ignored.
    pub fn toggle_cell(&mut self, x: isize, y: isize) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        match self.current.toggle(x, y) {
            Ok(alive) => trace!(x, y, alive, "toggled"),
            Err(LifeError::OutOfBounds { .. }) => {}
            Err(err) => debug!(%err, "toggle failed"),
        }
    }

    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.current.randomize(rng);
        self.generation = 0;
        debug!(population = self.current.population(), "randomized board");
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.generation = 0;
        debug!("cleared board");
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        patterns::apply_pattern(&mut self.current, pattern);
        self.generation = 0;
        debug!(pattern = pattern.name, population = self.current.population(), "applied pattern");
    }
}
