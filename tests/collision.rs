use pretty_assertions::assert_eq;
use speculoos::prelude::*;

use kickflip::constants::{physics, skater, GROUND_Y};
use kickflip::systems::components::{Locomotion, ObstacleKind, Trick};
use kickflip::systems::hud::Banner;
use kickflip::systems::state::GameStage;

mod common;
use common::Sim;

#[test]
fn test_overlap_is_fatal() {
    let mut sim = Sim::new();
    sim.start();

    sim.spawn_obstacle(ObstacleKind::Guard, skater::X);
    sim.tick();

    assert_eq!(sim.stage(), GameStage::GameOver);
}

#[test]
fn test_hitbox_padding_forgives_near_miss() {
    let mut sim = Sim::new();
    sim.start();
    let speed = sim.run_state().speed;

    // After the scroll step this hydrant's raw box overlaps the skater by
    // two pixels; the padded boxes do not touch.
    sim.spawn_obstacle(ObstacleKind::Hydrant, skater::X + skater::WIDTH - 2.0 + speed);
    sim.tick();

    assert_eq!(sim.stage(), GameStage::Playing);
}

#[test]
fn test_descent_onto_rail_becomes_grind() {
    let mut sim = Sim::new();
    sim.start();
    let rail = sim.spawn_obstacle(ObstacleKind::Rail, 30.0);
    let rail_top = ObstacleKind::Rail.top();

    // Descending with the trucks just above the rail top.
    sim.set_skater(|s| {
        s.locomotion = Locomotion::Airborne {
            trick: Trick::Ollie,
            taps: 1,
        };
        s.dy = 2.0;
        s.y = rail_top - skater::HEIGHT - 0.5;
    });

    sim.tick();
    sim.pin_obstacle(rail, 30.0);

    let grinding = sim.skater();
    assert!(grinding.locomotion.is_grinding());
    assert_that!(grinding.bottom()).is_close_to(rail_top, 1e-3);
    assert_eq!(grinding.dy, 0.0);
    assert_eq!(sim.world.resource::<Banner>().line, "50-50 GRIND");

    // The grind holds while the rail stays underneath.
    sim.tick();
    sim.pin_obstacle(rail, 30.0);
    assert!(sim.skater().locomotion.is_grinding());
}

#[test]
fn test_grind_ends_when_rail_scrolls_away() {
    let mut sim = Sim::new();
    sim.start();
    let rail = sim.spawn_obstacle(ObstacleKind::Rail, 30.0);

    sim.set_skater(|s| {
        s.locomotion = Locomotion::Airborne {
            trick: Trick::Ollie,
            taps: 1,
        };
        s.dy = 2.0;
        s.y = ObstacleKind::Rail.top() - skater::HEIGHT - 0.5;
    });
    sim.tick();
    sim.pin_obstacle(rail, 30.0);
    assert!(sim.skater().locomotion.is_grinding());

    // Let the rail leave the skater's column.
    sim.pin_obstacle(rail, -60.0);
    sim.tick();

    let skater = sim.skater();
    // Leaving a grind is a drop, not a jump: no tap is spent.
    assert_eq!(
        skater.locomotion,
        Locomotion::Airborne {
            trick: Trick::Ollie,
            taps: 0
        }
    );
    assert_that!(skater.dy).is_close_to(physics::GRIND_EXIT_DROP, 1e-4);
}

#[test]
fn test_jump_out_of_grind() {
    let mut sim = Sim::new();
    sim.start();
    let rail = sim.spawn_obstacle(ObstacleKind::Rail, 30.0);

    sim.set_skater(|s| {
        s.locomotion = Locomotion::Airborne {
            trick: Trick::Ollie,
            taps: 1,
        };
        s.dy = 2.0;
        s.y = ObstacleKind::Rail.top() - skater::HEIGHT - 0.5;
    });
    sim.tick();
    sim.pin_obstacle(rail, 30.0);
    assert!(sim.skater().locomotion.is_grinding());

    sim.send(kickflip::events::GameCommand::Action);
    sim.tick();

    let skater = sim.skater();
    assert_eq!(
        skater.locomotion,
        Locomotion::Airborne {
            trick: Trick::Ollie,
            taps: 1
        }
    );
    assert_that!(skater.dy).is_less_than(0.0);
}

#[test]
fn test_grinding_skater_ignores_other_overlaps() {
    let mut sim = Sim::new();
    sim.start();
    let rail = sim.spawn_obstacle(ObstacleKind::Rail, 30.0);

    sim.set_skater(|s| {
        s.locomotion = Locomotion::Airborne {
            trick: Trick::Ollie,
            taps: 1,
        };
        s.dy = 2.0;
        s.y = ObstacleKind::Rail.top() - skater::HEIGHT - 0.5;
    });
    sim.tick();
    sim.pin_obstacle(rail, 30.0);
    assert!(sim.skater().locomotion.is_grinding());

    // A drone drifting through the skater's column while it grinds.
    let drone = sim.spawn_obstacle(ObstacleKind::Drone, skater::X);
    sim.tick();
    sim.pin_obstacle(rail, 30.0);
    sim.pin_obstacle(drone, skater::X);

    assert_eq!(sim.stage(), GameStage::Playing);
    assert!(sim.skater().locomotion.is_grinding());
}

#[test]
fn test_grind_burst_fires_once_per_obstacle() {
    let mut sim = Sim::new();
    sim.start();
    let rail = sim.spawn_obstacle(ObstacleKind::Rail, 30.0);

    sim.set_skater(|s| {
        s.locomotion = Locomotion::Airborne {
            trick: Trick::Ollie,
            taps: 1,
        };
        s.dy = 2.0;
        s.y = ObstacleKind::Rail.top() - skater::HEIGHT - 0.5;
    });
    sim.tick();
    sim.pin_obstacle(rail, 30.0);

    let obstacles = sim.obstacles();
    assert!(obstacles.iter().any(|o| o.grinded));

    // Hop off and back on: the callout does not repeat.
    sim.send(kickflip::events::GameCommand::Action);
    sim.tick();
    sim.pin_obstacle(rail, 30.0);

    sim.world.resource_mut::<Banner>().ticks = 0;
    for _ in 0..60 {
        sim.tick();
        sim.pin_obstacle(rail, 30.0);
        if sim.skater().locomotion.is_grinding() {
            break;
        }
    }
    assert!(sim.skater().locomotion.is_grinding());
    assert!(!sim.world.resource::<Banner>().visible());
}

#[test]
fn test_standing_skater_collides_with_drone_but_ducker_clears() {
    let mut sim = Sim::new();
    sim.start();
    let drone = sim.spawn_obstacle(ObstacleKind::Drone, skater::X);

    // Ducking first: the lowered silhouette slips underneath.
    sim.send(kickflip::events::GameCommand::Duck(true));
    sim.tick();
    sim.pin_obstacle(drone, skater::X);
    assert_eq!(sim.stage(), GameStage::Playing);

    sim.send(kickflip::events::GameCommand::Duck(false));
    sim.tick();
    assert_eq!(sim.stage(), GameStage::GameOver);
}

#[test]
fn test_gap_is_never_resolved_as_overlap() {
    let mut sim = Sim::new();
    sim.start();
    // Even a skater standing inside the gap's x-range only un-grounds.
    let gap = sim.spawn_obstacle(ObstacleKind::Gap, skater::X - 5.0);
    sim.tick();
    sim.pin_obstacle(gap, skater::X - 5.0);

    assert_eq!(sim.stage(), GameStage::Playing);
    assert!(sim.skater().locomotion.is_airborne());
    assert_that!(sim.skater().y).is_less_than(GROUND_Y);
}
