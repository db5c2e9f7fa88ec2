// grid.rs - Board storage for Conway's Game of Life

use rand::Rng;

use crate::error::{LifeError, Result};

/// Fixed-size grid of cells, stored row-major. Cells are addressed as
/// `(x, y)` = `(column, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Creates an all-dead board.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len > 0)
            .ok_or(LifeError::InvalidDimensions { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flips one cell. Returns the new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        let idx = self.index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Unchecked read for callers that already iterate within bounds.
    #[inline]
    pub(crate) fn alive(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.cols + x]
    }

    #[inline]
    pub(crate) fn put(&mut self, x: usize, y: usize, alive: bool) {
        self.cells[y * self.cols + x] = alive;
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Sets every cell live with probability 0.5.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(0.5);
        }
    }

    /// Live cell coordinates in row-major order (y ascending, then x).
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(idx, _)| (idx % self.cols, idx / self.cols))
            .collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(y * self.cols + x)
    }
}
