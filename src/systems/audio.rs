use bevy_ecs::event::{Event, EventReader};
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{NonSendMut, ResMut};

use crate::audio::Audio;
pub use crate::audio::Cue;

/// Requests to the audio backend, written by gameplay systems.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    Play(Cue),
    StopAll,
}

/// Mute toggle, kept separate from the non-send backend so gameplay
/// systems can flip it without touching SDL.
#[derive(Resource, Debug, Default)]
pub struct AudioState {
    pub muted: bool,
}

/// Owns the SDL mixer handle. Main thread only.
pub struct AudioResource(pub Audio);

pub fn audio_system(
    mut audio: NonSendMut<AudioResource>,
    mut state: ResMut<AudioState>,
    mut events: EventReader<AudioEvent>,
) {
    if audio.0.is_disabled() {
        state.muted = true;
        events.clear();
        return;
    }

    if audio.0.is_muted() != state.muted {
        audio.0.set_mute(state.muted);
    }

    for event in events.read() {
        match event {
            AudioEvent::Play(cue) => audio.0.play(*cue),
            AudioEvent::StopAll => audio.0.stop_all(),
        }
    }
}
