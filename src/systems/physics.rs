//! The vertical physics integrator and ground/gap resolution.
//!
//! Runs once per tick while playing. Exactly one of grounded, grinding, or
//! airborne holds per tick; the first two pin `dy` to zero before anything
//! else can override it.

use bevy_ecs::prelude::*;
use tracing::{debug, trace};

use crate::constants::{feedback, physics};
use crate::events::FeedbackEvent;
use crate::systems::audio::{AudioEvent, Cue};
use crate::systems::components::{Locomotion, Obstacle, ObstacleKind, Skater, Trick};
use crate::systems::particles::spawn_dust;
use crate::systems::state::GameStage;

pub fn physics_system(
    mut commands: Commands,
    mut stage: ResMut<GameStage>,
    mut skaters: Query<&mut Skater>,
    obstacles: Query<&Obstacle>,
    mut feedback_events: EventWriter<FeedbackEvent>,
    mut audio: EventWriter<AudioEvent>,
) {
    if *stage != GameStage::Playing {
        return;
    }
    let Ok(mut skater) = skaters.single_mut() else {
        return;
    };

    skater.idle_frame = skater.idle_frame.wrapping_add(1);

    let (left, right) = skater.x_extent();
    let over_gap = obstacles
        .iter()
        .any(|o| o.kind == ObstacleKind::Gap && o.covers_x(left, right));

    match skater.locomotion {
        Locomotion::Grinding { .. } => {
            // Pinned to the grind surface by the resolver; nothing to do
            // here beyond the velocity invariant.
            skater.dy = 0.0;
            skater.trick_frame = skater.trick_frame.wrapping_add(1);
        }
        Locomotion::Grounded => {
            skater.dy = 0.0;
            if over_gap {
                // The ground vanished underneath: fall, without a trick.
                skater.locomotion = Locomotion::Airborne {
                    trick: Trick::Ollie,
                    taps: 0,
                };
                trace!("Rolled over a gap");
            } else {
                // Pinning every tick also resnaps after duck height changes.
                skater.y = skater.floor_y();
            }
        }
        Locomotion::Airborne { trick, .. } => {
            skater.trick_frame = skater.trick_frame.wrapping_add(1);
            skater.dy += physics::GRAVITY;
            skater.y += skater.dy;

            let floor = skater.floor_y();
            if skater.dy >= 0.0 && skater.y >= floor && !over_gap {
                land(&mut skater, trick, &mut commands, &mut feedback_events, &mut audio);
            } else if skater.y > physics::FALL_OUT_Y {
                debug!(y = skater.y, "Fell below the surface");
                *stage = GameStage::GameOver;
                feedback_events.write(FeedbackEvent::Crash);
                audio.write(AudioEvent::Play(Cue::Crash));
            }
        }
    }
}

fn land(
    skater: &mut Skater,
    trick: Trick,
    commands: &mut Commands,
    feedback_events: &mut EventWriter<FeedbackEvent>,
    audio: &mut EventWriter<AudioEvent>,
) {
    skater.y = skater.floor_y();
    skater.dy = 0.0;
    // Landing structurally resets the air tap count.
    skater.locomotion = Locomotion::Grounded;

    spawn_dust(commands, skater.bottom());

    if trick != Trick::Ollie {
        feedback_events.write(FeedbackEvent::TrickLanded {
            trick,
            reward: feedback::TRICK_REWARD,
        });
        debug!(trick = trick.label(), "Trick landed");
    }
    feedback_events.write(FeedbackEvent::Land);
    audio.write(AudioEvent::Play(Cue::Land));
}
