// config.rs - World geometry and simulation timing

use crate::error::{LifeError, Result};

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 400;
pub const DEFAULT_CELL_SIZE: u32 = 20;
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 100;

/// Pixel dimensions of the world and the size of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl WorldConfig {
    pub fn rows(&self) -> usize {
        self.height.checked_div(self.cell_size).unwrap_or(0) as usize
    }

    pub fn cols(&self) -> usize {
        self.width.checked_div(self.cell_size).unwrap_or(0) as usize
    }

    /// Board dimensions as `(rows, cols)`, rejecting a world smaller than one
    /// cell.
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        let (rows, cols) = (self.rows(), self.cols());
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }
        Ok((rows, cols))
    }

    /// Maps a pixel offset inside the world to `(x, y)` cell coordinates.
    /// The result may lie off the board.
    pub fn cell_at(&self, offset_x: f32, offset_y: f32) -> (isize, isize) {
        let size = self.cell_size.max(1) as f32;
        ((offset_x / size).floor() as isize, (offset_y / size).floor() as isize)
    }
}

/// Timing of the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub step_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_world_is_20_by_30() {
        let world = WorldConfig::default();
        assert_eq!(world.dimensions(), Ok((20, 30)));
    }

    #[test]
    fn degenerate_worlds_are_rejected() {
        let zero_cell = WorldConfig { cell_size: 0, ..WorldConfig::default() };
        assert!(zero_cell.dimensions().is_err());

        let too_small = WorldConfig { width: 10, height: 400, cell_size: 20 };
        assert_eq!(
            too_small.dimensions(),
            Err(LifeError::InvalidDimensions { rows: 20, cols: 0 })
        );
    }

    #[test]
    fn pixel_offsets_floor_to_cells() {
        let world = WorldConfig::default();
        assert_eq!(world.cell_at(0.0, 0.0), (0, 0));
        assert_eq!(world.cell_at(19.9, 20.0), (0, 1));
        assert_eq!(world.cell_at(599.0, 399.0), (29, 19));
        assert_eq!(world.cell_at(600.0, 400.0), (30, 20));
        assert_eq!(world.cell_at(-0.5, 5.0), (-1, 0));
    }

    #[test]
    fn default_interval() {
        assert_eq!(SimulationConfig::default().step_interval_ms, 100);
    }
}
