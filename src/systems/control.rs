//! Translates logical player commands into simulation changes: jumps, the
//! multi-tap trick machine, ducking, and run (re)starts.

use bevy_ecs::prelude::*;
use tracing::{debug, trace};

use crate::constants::{physics, tricks};
use crate::events::{FeedbackEvent, GameCommand, GameEvent, StageTransition};
use crate::systems::audio::{AudioEvent, AudioState, Cue};
use crate::systems::components::{Locomotion, Skater, Trick};
use crate::systems::state::{GameStage, GlobalState};

pub fn control_system(
    mut events: EventReader<GameEvent>,
    stage: Res<GameStage>,
    mut skaters: Query<&mut Skater>,
    mut global: ResMut<GlobalState>,
    mut audio_state: ResMut<AudioState>,
    mut transitions: EventWriter<StageTransition>,
    mut feedback_events: EventWriter<FeedbackEvent>,
    mut audio: EventWriter<AudioEvent>,
) {
    for event in events.read() {
        let GameEvent::Command(command) = *event;
        match command {
            GameCommand::Exit => {
                global.exit = true;
            }
            GameCommand::MuteAudio => {
                audio_state.muted = !audio_state.muted;
                debug!(muted = audio_state.muted, "Audio mute toggled");
            }
            GameCommand::Action => match *stage {
                GameStage::Idle | GameStage::GameOver => {
                    transitions.write(StageTransition::Start);
                }
                GameStage::Playing => {
                    if let Ok(mut skater) = skaters.single_mut() {
                        apply_action(&mut skater, &mut feedback_events, &mut audio);
                    }
                }
            },
            GameCommand::Duck(pressed) => {
                // Duck timing is forgiving: releases with no matching press
                // are no-ops, never errors.
                if let Ok(mut skater) = skaters.single_mut() {
                    if pressed {
                        if skater.locomotion.is_airborne() && !skater.ducking {
                            // Fast drop: cut the hang time short.
                            skater.dy += physics::FAST_DROP;
                        }
                        skater.ducking = true;
                    } else {
                        skater.ducking = false;
                    }
                }
            }
        }
    }
}

/// Jump from the ground or a grind; advance the trick while airborne.
fn apply_action(skater: &mut Skater, feedback_events: &mut EventWriter<FeedbackEvent>, audio: &mut EventWriter<AudioEvent>) {
    match skater.locomotion {
        Locomotion::Grounded | Locomotion::Grinding { .. } => {
            skater.dy = physics::JUMP_FORCE;
            skater.locomotion = Locomotion::Airborne {
                trick: Trick::Ollie,
                taps: 1,
            };
            skater.trick_frame = 0;
            feedback_events.write(FeedbackEvent::Jump);
            audio.write(AudioEvent::Play(Cue::Jump));
            trace!("Jump");
        }
        Locomotion::Airborne { trick, taps } => {
            if taps >= tricks::MAX_AIR_TAPS {
                // Deliberately inert: taps beyond the third neither cycle
                // nor boost.
                return;
            }
            let taps = taps + 1;
            // The second tap pops a shuv-it, the third a kickflip. The
            // first tap of an air time that did not start with a jump
            // (ledge drop, grind exit) only counts.
            let transition = match taps {
                2 => Some((Trick::PopShuvit, tricks::POP_SHUVIT_BOOST)),
                3 => Some((Trick::Kickflip, tricks::KICKFLIP_BOOST)),
                _ => None,
            };
            match transition {
                Some((next_trick, boost)) => {
                    skater.dy -= boost;
                    skater.trick_frame = 0;
                    skater.locomotion = Locomotion::Airborne { trick: next_trick, taps };
                    feedback_events.write(FeedbackEvent::TrickPop(next_trick));
                    audio.write(AudioEvent::Play(Cue::TrickPop));
                    trace!(from = ?trick, to = ?next_trick, "Trick advanced");
                }
                None => {
                    skater.locomotion = Locomotion::Airborne { trick, taps };
                }
            }
        }
    }
}
