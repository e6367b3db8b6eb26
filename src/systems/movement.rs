//! Scrolls live obstacles toward the skater and retires the ones that have
//! left the field.

use bevy_ecs::prelude::*;
use tracing::trace;

use crate::constants::spawn;
use crate::systems::components::Obstacle;
use crate::systems::state::{GameStage, RunState};

pub fn obstacle_scroll_system(
    mut commands: Commands,
    stage: Res<GameStage>,
    run_state: Res<RunState>,
    mut obstacles: Query<(Entity, &mut Obstacle)>,
) {
    if *stage != GameStage::Playing {
        return;
    }

    for (entity, mut obstacle) in obstacles.iter_mut() {
        obstacle.x -= run_state.speed;

        if obstacle.right() < -spawn::DESPAWN_MARGIN {
            trace!(kind = ?obstacle.kind, "Obstacle left the field");
            commands.entity(entity).despawn();
        }
    }
}
