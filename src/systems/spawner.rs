//! Procedural obstacle generation: a distance-gated spawn window with a
//! tiered difficulty schedule.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::Rng;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::constants::{spawn, CANVAS_SIZE};
use crate::systems::components::{Obstacle, ObstacleKind};
use crate::systems::state::{GameStage, RunState};

/// The spawner's random source. Seedable, so simulation traces are
/// reproducible under test.
#[derive(Resource)]
pub struct SpawnRng(pub SmallRng);

/// Gate for the generator as a whole; headless scenarios switch it off.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpawnerEnabled(pub bool);

impl Default for SpawnerEnabled {
    fn default() -> Self {
        Self(true)
    }
}

/// The difficulty tier unlocked at the given cumulative distance.
pub fn tier_for_distance(distance: u64) -> u8 {
    if distance >= spawn::TIER4_DISTANCE {
        4
    } else if distance >= spawn::TIER3_DISTANCE {
        3
    } else if distance >= spawn::TIER2_DISTANCE {
        2
    } else {
        1
    }
}

/// The minimum clearance required behind the newest obstacle before another
/// may spawn. Larger at higher speed to preserve reaction time.
pub fn min_distance(rng: &mut SmallRng, speed: f32) -> f32 {
    spawn::GATE_BASE + rng.random_range(0.0..spawn::GATE_RANGE) + speed * spawn::GATE_SPEED_FACTOR
}

pub fn spawner_system(
    mut commands: Commands,
    stage: Res<GameStage>,
    enabled: Res<SpawnerEnabled>,
    run_state: Res<RunState>,
    mut rng: ResMut<SpawnRng>,
    obstacles: Query<&Obstacle>,
) {
    if *stage != GameStage::Playing || !enabled.0 {
        return;
    }

    let field_right = CANVAS_SIZE.x as f32;
    let newest_right = obstacles.iter().map(Obstacle::right).fold(f32::MIN, f32::max);

    // Spawn gate: enough clearance behind the newest obstacle, and an
    // independent draw so not every eligible tick spawns.
    let gate = min_distance(&mut rng.0, run_state.speed);
    if newest_right > field_right - gate {
        return;
    }
    if rng.0.random::<f32>() >= spawn::SPAWN_CHANCE {
        return;
    }

    let tier = tier_for_distance(run_state.distance);
    let unlocked: Vec<ObstacleKind> = ObstacleKind::iter().filter(|kind| kind.tier() <= tier).collect();
    let kind = unlocked[rng.0.random_range(0..unlocked.len())];

    let obstacle = Obstacle::new(kind, field_right + spawn::SPAWN_MARGIN);
    debug!(?kind, x = obstacle.x, tier, "Obstacle spawned");
    commands.spawn(obstacle);
}
