use pretty_assertions::assert_eq;
use speculoos::prelude::*;

use kickflip::constants::run;
use kickflip::events::GameCommand;
use kickflip::systems::audio::AudioState;
use kickflip::systems::components::ObstacleKind;
use kickflip::systems::state::{GameStage, GlobalState, HighScore, RunState};

mod common;
use common::Sim;

#[test]
fn test_idle_until_first_action() {
    let mut sim = Sim::new();
    sim.ticks(10);

    assert_eq!(sim.stage(), GameStage::Idle);
    assert_eq!(sim.run_state().distance, 0);
}

#[test]
fn test_action_starts_run() {
    let mut sim = Sim::new();
    sim.start();

    assert_eq!(sim.stage(), GameStage::Playing);
    // The starting tick itself does not advance the run.
    assert_eq!(sim.run_state().distance, 0);
}

#[test]
fn test_score_after_300_ticks() {
    let mut sim = Sim::new();
    sim.start();
    sim.ticks(300);

    let run_state = sim.run_state();
    assert_eq!(run_state.distance, 300);
    assert_eq!(run_state.score, 30);
    // Exactly one speed increment at the 300-distance mark.
    assert_that!(run_state.speed).is_close_to(run::INITIAL_SPEED + run::SPEED_INCREMENT, 1e-5);
}

#[test]
fn test_speed_ramp_saturates() {
    let mut sim = Sim::new();
    sim.start();
    sim.world.resource_mut::<RunState>().distance = 100_000;
    sim.ticks(400);

    assert_that!(sim.run_state().speed).is_less_than_or_equal_to(run::MAX_SPEED);
}

#[test]
fn test_restart_clears_the_field() {
    let mut sim = Sim::new();
    sim.start();
    sim.ticks(50);

    // A guard on top of the skater ends the run.
    sim.spawn_obstacle(ObstacleKind::Guard, kickflip::constants::skater::X);
    sim.tick();
    assert_eq!(sim.stage(), GameStage::GameOver);
    // The hazard is still on the field after the crash.
    assert!(!sim.obstacles().is_empty());

    sim.start();
    assert_eq!(sim.stage(), GameStage::Playing);
    assert_eq!(sim.run_state().distance, 0);
    assert_that!(sim.run_state().speed).is_close_to(run::INITIAL_SPEED, 1e-5);
    assert_eq!(sim.obstacles().len(), 0);
    assert!(sim.skater().locomotion.is_grounded());
}

#[test]
fn test_crash_tick_score_counts_the_final_distance() {
    let mut sim = Sim::new();
    sim.start();
    sim.ticks(299);

    // The fatal tick advances distance to a fresh multiple of the score
    // divisor; that last point still counts.
    sim.spawn_obstacle(ObstacleKind::Guard, kickflip::constants::skater::X);
    sim.tick();

    assert_eq!(sim.stage(), GameStage::GameOver);
    let run_state = sim.run_state();
    assert_eq!(run_state.distance, 300);
    assert_eq!(run_state.score, 30);
    assert_eq!(*sim.world.resource::<HighScore>(), HighScore(30));
}

#[test]
fn test_game_over_is_terminal_until_action() {
    let mut sim = Sim::new();
    sim.start();
    sim.spawn_obstacle(ObstacleKind::Guard, kickflip::constants::skater::X);
    sim.tick();
    assert_eq!(sim.stage(), GameStage::GameOver);

    let frozen = sim.run_state();
    sim.ticks(30);
    assert_eq!(sim.run_state().distance, frozen.distance);
    assert_eq!(sim.stage(), GameStage::GameOver);
}

#[test]
fn test_mute_toggle() {
    let mut sim = Sim::new();
    assert!(!sim.world.resource::<AudioState>().muted);

    sim.send(GameCommand::MuteAudio);
    sim.tick();
    assert!(sim.world.resource::<AudioState>().muted);

    sim.send(GameCommand::MuteAudio);
    sim.tick();
    assert!(!sim.world.resource::<AudioState>().muted);
}

#[test]
fn test_exit_command() {
    let mut sim = Sim::new();
    sim.send(GameCommand::Exit);
    sim.tick();

    assert!(sim.world.resource::<GlobalState>().exit);
}
