//! The collision and grind resolver.
//!
//! Each tick, the skater's padded box is tested against every live,
//! non-gap obstacle. A qualifying descent onto a grindable top becomes a
//! grind; any other overlap is fatal. Grind always pre-empts death.

use bevy_ecs::prelude::*;
use tracing::{debug, trace};

use crate::constants::{grind, physics};
use crate::events::FeedbackEvent;
use crate::systems::audio::{AudioEvent, Cue};
use crate::systems::components::{Locomotion, Obstacle, ObstacleKind, Skater, Trick};
use crate::systems::particles::{spawn_debris, spawn_grind_sparks, spawn_spark};
use crate::systems::state::{GameStage, RunState};

pub fn collision_system(
    mut commands: Commands,
    mut stage: ResMut<GameStage>,
    run_state: Res<RunState>,
    mut skaters: Query<&mut Skater>,
    mut obstacles: Query<(Entity, &mut Obstacle)>,
    mut feedback_events: EventWriter<FeedbackEvent>,
    mut audio: EventWriter<AudioEvent>,
) {
    if *stage != GameStage::Playing {
        return;
    }
    let Ok(mut skater) = skaters.single_mut() else {
        return;
    };

    let hitbox = skater.hitbox();
    let mut grind_candidate: Option<Entity> = None;
    let mut fatal = false;

    for (entity, obstacle) in obstacles.iter() {
        if obstacle.kind == ObstacleKind::Gap {
            // Gaps are resolved by the ground step, never by overlap.
            continue;
        }

        if qualifies_for_grind(&skater, obstacle) {
            grind_candidate = Some(entity);
        } else if hitbox.overlaps(&obstacle.hitbox()) && !skater.locomotion.is_grinding() {
            fatal = true;
        }
    }

    // Grind pre-empts death: a qualifying landing is resolved before any
    // fatal overlap this tick is considered.
    if let Some(entity) = grind_candidate {
        let Ok((_, mut obstacle)) = obstacles.get_mut(entity) else {
            return;
        };

        skater.y = obstacle.top() - skater.height();
        skater.dy = 0.0;

        let starting = !matches!(skater.locomotion, Locomotion::Grinding { obstacle: e } if e == entity);
        skater.locomotion = Locomotion::Grinding { obstacle: entity };

        if starting && !obstacle.grinded {
            obstacle.grinded = true;
            spawn_grind_sparks(&mut commands, skater.bottom());
            feedback_events.write(FeedbackEvent::GrindStart);
            audio.write(AudioEvent::Play(Cue::Grind));
            debug!(kind = ?obstacle.kind, "Grind started");
        } else if run_state.distance % grind::SPARK_INTERVAL == 0 {
            spawn_spark(&mut commands, skater.bottom());
        }
        return;
    }

    if fatal {
        *stage = GameStage::GameOver;
        spawn_debris(&mut commands, skater.bottom());
        feedback_events.write(FeedbackEvent::Crash);
        audio.write(AudioEvent::Play(Cue::Crash));
        debug!(distance = run_state.distance, "Fatal collision");
        return;
    }

    // No qualifying surface under the trucks this tick: the grind ends and
    // the skater visibly comes off the ledge.
    if skater.locomotion.is_grinding() {
        skater.locomotion = Locomotion::Airborne {
            trick: Trick::Ollie,
            taps: 0,
        };
        skater.dy = physics::GRIND_EXIT_DROP;
        trace!("Grind ended");
    }
}

/// A descent qualifies for a grind when the skater is horizontally over a
/// grindable top and its bottom edge sits inside the tolerance band. The
/// band includes the pinned position itself, so an ongoing grind keeps
/// qualifying tick after tick.
fn qualifies_for_grind(skater: &Skater, obstacle: &Obstacle) -> bool {
    if !obstacle.kind.grindable() || skater.dy < 0.0 {
        return false;
    }
    let (left, right) = skater.x_extent();
    let pad = crate::constants::skater::HITBOX_PAD;
    if left + pad >= obstacle.right() - pad || right - pad <= obstacle.x + pad {
        return false;
    }
    let top = obstacle.top();
    let bottom = skater.bottom();
    bottom >= top - 1.0 && bottom <= top + grind::TOLERANCE
}
