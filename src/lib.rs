//! Conway's Game of Life on a bounded board.
//!
//! [`Engine`] owns a [`Board`] and applies the birth/survival rule one
//! generation at a time. [`Simulation`] wraps an engine with a cancellable
//! tokio timer so a front end can run, stop and poke at the board while it
//! polls [`GameOfLifeInterface::live_cells`] for drawing.

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;
pub mod scheduler;

pub use config::{SimulationConfig, WorldConfig};
pub use engine::Engine;
pub use error::{LifeError, Result};
pub use grid::Board;
pub use patterns::{PATTERNS, Pattern};
pub use scheduler::{GameOfLifeInterface, RunState, Simulation};
