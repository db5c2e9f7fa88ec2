// main.rs - Desktop front end for the Game of Life engine

use clap::Parser;
use conway_engine::config::{
    DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_STEP_INTERVAL_MS, DEFAULT_WIDTH,
};
use conway_engine::{Simulation, SimulationConfig, WorldConfig};
use eframe::egui;
use tracing::{error, info};

mod ui;

use ui::ViewerApp;

#[derive(Parser, Debug)]
#[command(name = "conway_viewer", about = "Conway's Game of Life on a bounded board")]
struct Args {
    /// World width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,
    /// World height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,
    /// Edge length of one cell in pixels.
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u32,
    /// Milliseconds between generations while running.
    #[arg(long, default_value_t = DEFAULT_STEP_INTERVAL_MS)]
    interval_ms: u64,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<(), eframe::Error> {
    init_tracing();
    let args = Args::parse();

    let world = WorldConfig {
        width: args.width,
        height: args.height,
        cell_size: args.cell_size,
    };
    let timing = SimulationConfig {
        step_interval_ms: args.interval_ms,
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(%err, "failed to start timer runtime");
            std::process::exit(1);
        }
    };
    let simulation = match world
        .dimensions()
        .and_then(|(rows, cols)| Simulation::with_config(rows, cols, timing, runtime.handle().clone()))
    {
        Ok(simulation) => simulation,
        Err(err) => {
            error!(%err, ?world, "cannot build board");
            std::process::exit(1);
        }
    };
    info!(rows = world.rows(), cols = world.cols(), "starting viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([world.width as f32 + 220.0, world.height as f32 + 160.0]),
        ..Default::default()
    };

    let app = ViewerApp::new(simulation, runtime, world);
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
}
