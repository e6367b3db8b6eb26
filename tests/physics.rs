use pretty_assertions::assert_eq;
use speculoos::prelude::*;

use kickflip::constants::{physics, skater, GROUND_Y};
use kickflip::events::GameCommand;
use kickflip::systems::components::{Locomotion, ObstacleKind, Trick};
use kickflip::systems::state::GameStage;

mod common;
use common::Sim;

#[test]
fn test_jump_arc_returns_to_ground() {
    let mut sim = Sim::new();
    sim.start();

    sim.send(GameCommand::Action);
    sim.tick();
    let airborne = sim.skater();
    assert!(airborne.locomotion.is_airborne());
    assert_that!(airborne.dy).is_less_than(0.0);

    // v/g ticks up, the same down, plus slack.
    let mut landed = false;
    for _ in 0..120 {
        sim.tick();
        if sim.skater().locomotion.is_grounded() {
            landed = true;
            break;
        }
    }
    assert!(landed, "skater never came back down");

    let skater = sim.skater();
    assert_that!(skater.y).is_close_to(GROUND_Y - skater::HEIGHT, 1e-3);
    assert_that!(skater.dy).is_close_to(0.0, 1e-6);
}

#[test]
fn test_grounded_velocity_is_pinned() {
    let mut sim = Sim::new();
    sim.start();
    sim.set_skater(|s| s.dy = -5.0);
    sim.tick();

    assert!(sim.skater().locomotion.is_grounded());
    assert_eq!(sim.skater().dy, 0.0);
}

#[test]
fn test_duck_changes_height_and_resnaps() {
    let mut sim = Sim::new();
    sim.start();

    sim.send(GameCommand::Duck(true));
    sim.tick();
    let ducked = sim.skater();
    assert!(ducked.ducking);
    assert_that!(ducked.y).is_close_to(GROUND_Y - skater::DUCK_HEIGHT, 1e-3);

    sim.send(GameCommand::Duck(false));
    sim.tick();
    let standing = sim.skater();
    assert!(!standing.ducking);
    assert_that!(standing.y).is_close_to(GROUND_Y - skater::HEIGHT, 1e-3);
}

#[test]
fn test_duck_release_without_press_is_noop() {
    let mut sim = Sim::new();
    sim.start();
    sim.send(GameCommand::Duck(false));
    sim.tick();

    assert!(!sim.skater().ducking);
    assert_eq!(sim.stage(), GameStage::Playing);
}

#[test]
fn test_fast_drop_on_airborne_duck() {
    let mut sim = Sim::new();
    sim.start();
    sim.send(GameCommand::Action);
    sim.tick();
    let before = sim.skater().dy;

    sim.send(GameCommand::Duck(true));
    sim.tick();
    // One gravity step plus the drop impulse.
    let expected = before + physics::FAST_DROP + physics::GRAVITY;
    assert_that!(sim.skater().dy).is_close_to(expected, 1e-4);
}

#[test]
fn test_gap_unfoots_without_collision() {
    let mut sim = Sim::new();
    sim.start();
    let gap = sim.spawn_obstacle(ObstacleKind::Gap, 20.0);

    sim.tick();
    sim.pin_obstacle(gap, 20.0);

    let skater = sim.skater();
    assert!(skater.locomotion.is_airborne());
    // A drop is not a trick and grants no tap.
    assert_eq!(
        skater.locomotion,
        Locomotion::Airborne {
            trick: Trick::Ollie,
            taps: 0
        }
    );
    // Overlapping the gap itself is never fatal.
    assert_eq!(sim.stage(), GameStage::Playing);
}

#[test]
fn test_falling_into_a_gap_ends_the_run() {
    let mut sim = Sim::new();
    sim.start();
    let gap = sim.spawn_obstacle(ObstacleKind::Gap, 20.0);

    for _ in 0..200 {
        sim.tick();
        sim.pin_obstacle(gap, 20.0);
        if sim.stage() == GameStage::GameOver {
            break;
        }
    }

    assert_eq!(sim.stage(), GameStage::GameOver);
    assert_that!(sim.skater().y).is_greater_than(physics::FALL_OUT_Y);
}

#[test]
fn test_jump_clears_a_gap() {
    let mut sim = Sim::new();
    sim.start();
    // Gap just ahead of the skater; it scrolls underneath and past while
    // the jump is in the air.
    sim.spawn_obstacle(ObstacleKind::Gap, 70.0);

    sim.send(GameCommand::Action);
    for _ in 0..60 {
        sim.tick();
    }

    // The gap has scrolled past; the skater landed on solid ground.
    assert_eq!(sim.stage(), GameStage::Playing);
    assert!(sim.skater().locomotion.is_grounded());
}
