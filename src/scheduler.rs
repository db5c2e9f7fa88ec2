// scheduler.rs - Timer-driven run loop around an Engine

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::Rng;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::config::SimulationConfig;
use crate::engine::Engine;
use crate::error::Result;
use crate::patterns::{self, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Commands and queries a front end needs to drive a game.
pub trait GameOfLifeInterface {
    fn live_cells(&self) -> Vec<(usize, usize)>;
    fn is_running(&self) -> bool;
    fn interval(&self) -> u64;
    fn generation(&self) -> u64;
    fn population(&self) -> usize;

    fn toggle_cell(&mut self, x: isize, y: isize);
    fn randomize(&mut self);
    fn clear(&mut self);
    fn set_interval(&mut self, ms: u64);
    fn run(&mut self);
    fn stop(&mut self);
}

/// State shared with the timer task. Every board mutation, manual or
/// scheduled, happens while holding this lock.
#[derive(Debug)]
struct Shared {
    engine: Engine,
    state: RunState,
    interval_ms: u64,
    /// Bumped on every `run()`; a timer task only steps while its epoch is
    /// still current.
    epoch: u64,
}

impl Shared {
    fn owns(&self, epoch: u64) -> bool {
        self.state == RunState::Running && self.epoch == epoch
    }
}

/// A game board plus the scheduler that advances it while running.
pub struct Simulation {
    shared: Arc<Mutex<Shared>>,
    runtime: Handle,
    task: Option<JoinHandle<()>>,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Simulation {
    pub fn new(rows: usize, cols: usize, initial_interval_ms: u64, runtime: Handle) -> Result<Self> {
        let engine = Engine::new(rows, cols)?;
        debug!(rows, cols, interval_ms = initial_interval_ms, "created simulation");
        Ok(Self {
            shared: Arc::new(Mutex::new(Shared {
                engine,
                state: RunState::Stopped,
                interval_ms: initial_interval_ms,
                epoch: 0,
            })),
            runtime,
            task: None,
        })
    }

    pub fn with_config(
        rows: usize,
        cols: usize,
        config: SimulationConfig,
        runtime: Handle,
    ) -> Result<Self> {
        Self::new(rows, cols, config.step_interval_ms, runtime)
    }

    pub fn run_state(&self) -> RunState {
        lock(&self.shared).state
    }

    pub fn dimensions(&self) -> (usize, usize) {
        let shared = lock(&self.shared);
        (shared.engine.board().rows(), shared.engine.board().cols())
    }

    /// Advances one generation without touching the run state.
    pub fn step_once(&mut self) {
        lock(&self.shared).engine.step();
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        lock(&self.shared).engine.randomize_with(rng);
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        lock(&self.shared).engine.apply_pattern(pattern);
    }

    pub fn apply_pattern_named(&mut self, name: &str) -> Result<()> {
        let pattern = patterns::find_pattern(name)?;
        self.apply_pattern(pattern);
        Ok(())
    }
}

impl GameOfLifeInterface for Simulation {
    fn live_cells(&self) -> Vec<(usize, usize)> {
        lock(&self.shared).engine.live_cells()
    }

    fn is_running(&self) -> bool {
        self.run_state() == RunState::Running
    }

    fn interval(&self) -> u64 {
        lock(&self.shared).interval_ms
    }

    fn generation(&self) -> u64 {
        lock(&self.shared).engine.generation()
    }

    fn population(&self) -> usize {
        lock(&self.shared).engine.population()
    }

    fn toggle_cell(&mut self, x: isize, y: isize) {
        lock(&self.shared).engine.toggle_cell(x, y);
    }

    fn randomize(&mut self) {
        lock(&self.shared).engine.randomize();
    }

    fn clear(&mut self) {
        lock(&self.shared).engine.clear();
    }

    /// Takes effect from the next scheduled step; a pending wait is not cut
    /// short.
    fn set_interval(&mut self, ms: u64) {
        lock(&self.shared).interval_ms = ms;
        debug!(interval_ms = ms, "interval changed");
    }

    /// Steps once immediately, then keeps stepping every interval. A no-op
    /// while already running.
    fn run(&mut self) {
        let epoch = {
            let mut shared = lock(&self.shared);
            if shared.state == RunState::Running {
                debug!("run ignored, already running");
                return;
            }
            shared.state = RunState::Running;
            shared.epoch += 1;
            shared.engine.step();
            shared.epoch
        };
        debug!(epoch, "simulation running");

        if let Some(stale) = self.task.take() {
            stale.abort();
        }
        self.task = Some(self.runtime.spawn(drive(Arc::clone(&self.shared), epoch)));
    }

    /// Once this returns no further generation is computed until the next
    /// `run()`. Safe to call when nothing is pending.
    fn stop(&mut self) {
        {
            let mut shared = lock(&self.shared);
            if shared.state == RunState::Running {
                shared.state = RunState::Stopped;
                debug!(generation = shared.engine.generation(), "simulation stopped");
            }
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn drive(shared: Arc<Mutex<Shared>>, epoch: u64) {
    loop {
        let period = {
            let guard = lock(&shared);
            if !guard.owns(epoch) {
                return;
            }
            Duration::from_millis(guard.interval_ms)
        };

        tokio::time::sleep(period).await;

        let mut guard = lock(&shared);
        if !guard.owns(epoch) {
            trace!(epoch, "timer fired after stop");
            return;
        }
        guard.engine.step();
    }
}
