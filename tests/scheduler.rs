use std::time::Duration;

use conway_engine::{GameOfLifeInterface, RunState, Simulation};
use tokio::runtime::Handle;
use tokio::time::sleep;

fn blinker(interval_ms: u64) -> Simulation {
    let mut sim = Simulation::new(5, 5, interval_ms, Handle::current()).unwrap();
    sim.apply_pattern_named("Blinker").unwrap();
    sim
}

#[tokio::test(start_paused = true)]
async fn run_steps_immediately_then_every_interval() {
    let mut sim = blinker(100);
    let horizontal = sim.live_cells();
    sim.run();
    assert!(sim.is_running());
    assert_eq!(sim.generation(), 1);
    assert_eq!(sim.live_cells(), vec![(2, 1), (2, 2), (2, 3)]);

    sleep(Duration::from_millis(350)).await;
    assert_eq!(sim.generation(), 4);
    assert_eq!(sim.live_cells(), horizontal);
    sim.stop();
}

#[tokio::test(start_paused = true)]
async fn stop_before_first_interval_cancels_pending_step() {
    let mut sim = blinker(100);
    sim.run();
    sim.stop();
    assert_eq!(sim.run_state(), RunState::Stopped);

    sleep(Duration::from_secs(2)).await;
    assert_eq!(sim.generation(), 1);
    assert_eq!(sim.live_cells(), vec![(2, 1), (2, 2), (2, 3)]);
}

#[tokio::test(start_paused = true)]
async fn stop_mid_run_freezes_board() {
    let mut sim = blinker(100);
    sim.run();
    sleep(Duration::from_millis(250)).await;
    sim.stop();

    let frozen = sim.live_cells();
    let generation = sim.generation();
    assert_eq!(generation, 3);

    sleep(Duration::from_secs(5)).await;
    assert_eq!(sim.generation(), generation);
    assert_eq!(sim.live_cells(), frozen);
}

#[tokio::test(start_paused = true)]
async fn second_run_does_not_start_another_cycle() {
    let mut sim = blinker(100);
    sim.run();
    sim.run();
    assert_eq!(sim.generation(), 1);

    sleep(Duration::from_millis(150)).await;
    assert_eq!(sim.generation(), 2);
    sim.stop();
}

#[tokio::test(start_paused = true)]
async fn new_interval_applies_from_next_step() {
    let mut sim = blinker(100);
    sim.run();

    sleep(Duration::from_millis(50)).await;
    sim.set_interval(1000);
    assert_eq!(sim.interval(), 1000);

    // The wait already in flight keeps its old length.
    sleep(Duration::from_millis(100)).await;
    assert_eq!(sim.generation(), 2);

    sleep(Duration::from_millis(900)).await;
    assert_eq!(sim.generation(), 2);

    sleep(Duration::from_millis(100)).await;
    assert_eq!(sim.generation(), 3);
    sim.stop();
}

#[tokio::test(start_paused = true)]
async fn restart_after_stop_resumes_stepping() {
    let mut sim = blinker(100);
    sim.run();
    sim.stop();
    sim.run();
    assert_eq!(sim.generation(), 2);

    sleep(Duration::from_millis(150)).await;
    assert_eq!(sim.generation(), 3);
    sim.stop();
}

#[tokio::test(start_paused = true)]
async fn commands_while_running_share_the_board() {
    let mut sim = Simulation::new(6, 6, 100, Handle::current()).unwrap();
    sim.run();
    sim.toggle_cell(1, 1);
    sim.toggle_cell(2, 1);
    sim.toggle_cell(1, 2);
    sim.toggle_cell(2, 2);

    sleep(Duration::from_millis(550)).await;
    assert_eq!(sim.live_cells(), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);

    sim.clear();
    assert_eq!(sim.population(), 0);
    assert!(sim.is_running());
    sim.stop();
}
