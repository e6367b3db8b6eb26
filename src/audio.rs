//! This module handles audio playback for the game.
//!
//! Cues are short square-wave chirps synthesized at startup and loaded as
//! raw mixer chunks; the game ships no sound files. If audio fails to
//! initialize, it is disabled and all functions silently do nothing.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use sdl2::mixer::{self, Chunk, InitFlag, AUDIO_S16LSB};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const AUDIO_FREQUENCY: i32 = 16_000;
const AUDIO_CHANNELS: i32 = 4;
const DEFAULT_VOLUME: u8 = 32;

/// Every audible cue the game can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Cue {
    /// A run starts or restarts.
    Start,
    Jump,
    /// An air tap advanced the trick.
    TrickPop,
    /// A grind started.
    Grind,
    Land,
    Crash,
}

impl Cue {
    /// Frequency sweep (Hz) and duration (ms) of the synthesized chirp.
    fn chirp(&self) -> (f32, f32, u32) {
        match self {
            Cue::Start => (440.0, 880.0, 120),
            Cue::Jump => (300.0, 700.0, 80),
            Cue::TrickPop => (900.0, 1300.0, 50),
            Cue::Grind => (120.0, 170.0, 70),
            Cue::Land => (220.0, 170.0, 60),
            Cue::Crash => (400.0, 60.0, 250),
        }
    }
}

/// The audio system for the game.
///
/// Responsible for initializing the audio device, synthesizing the cue
/// chunks, and playing them.
pub struct Audio {
    _mixer_context: Option<mixer::Sdl2MixerContext>,
    sounds: HashMap<Cue, Chunk>,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Enabled { volume: u8 },
    Muted { previous_volume: u8 },
    Disabled,
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}

impl Audio {
    /// Creates a new `Audio` instance.
    ///
    /// If audio fails to initialize, the audio system will be disabled and
    /// all functions will silently do nothing.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
                Self {
                    _mixer_context: None,
                    sounds: HashMap::new(),
                    state: State::Disabled,
                }
            }
        }
    }

    fn try_new() -> Result<Self> {
        mixer::open_audio(AUDIO_FREQUENCY, AUDIO_S16LSB, 1, 256).map_err(|e| anyhow!("Failed to open audio: {}", e))?;
        mixer::allocate_channels(AUDIO_CHANNELS);
        for i in 0..AUDIO_CHANNELS {
            mixer::Channel(i).set_volume(DEFAULT_VOLUME as i32);
        }

        // No decoder flags: every chunk is raw synthesized PCM.
        let mixer_context = mixer::init(InitFlag::empty()).map_err(|e| anyhow!("Failed to initialize SDL2_mixer: {}", e))?;

        let mut sounds = HashMap::new();
        for cue in Cue::iter() {
            let (from_hz, to_hz, ms) = cue.chirp();
            let chunk = Chunk::from_raw_buffer(synthesize(from_hz, to_hz, ms).into_boxed_slice())
                .map_err(|e| anyhow!("Failed to load chunk for {:?}: {}", cue, e))?;
            sounds.insert(cue, chunk);
        }

        tracing::debug!(cue_count = sounds.len(), "Audio initialized");
        Ok(Self {
            _mixer_context: Some(mixer_context),
            sounds,
            state: State::Enabled { volume: DEFAULT_VOLUME },
        })
    }

    pub fn is_disabled(&self) -> bool {
        self.state == State::Disabled
    }

    pub fn is_muted(&self) -> bool {
        matches!(self.state, State::Muted { .. })
    }

    pub fn set_mute(&mut self, mute: bool) {
        self.state = match (self.state, mute) {
            (State::Enabled { volume }, true) => {
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(0);
                }
                State::Muted { previous_volume: volume }
            }
            (State::Muted { previous_volume }, false) => {
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(previous_volume as i32);
                }
                State::Enabled { volume: previous_volume }
            }
            (state, _) => state,
        };
    }

    /// Plays a cue on the first free channel. Played best-effort: a full
    /// mixer simply drops the cue.
    pub fn play(&self, cue: Cue) {
        if self.is_disabled() || self.is_muted() {
            return;
        }
        if let Some(chunk) = self.sounds.get(&cue) {
            if let Err(e) = mixer::Channel::all().play(chunk, 0) {
                tracing::trace!(?cue, "Failed to play cue: {}", e);
            }
        }
    }

    pub fn stop_all(&self) {
        if !self.is_disabled() {
            mixer::Channel::all().halt();
        }
    }
}

/// Synthesizes a square-wave chirp sweeping `from_hz` to `to_hz` over `ms`
/// milliseconds, with a linear fade-out, as raw `AUDIO_S16LSB` mono bytes.
fn synthesize(from_hz: f32, to_hz: f32, ms: u32) -> Vec<u8> {
    let samples = (AUDIO_FREQUENCY as u32 * ms / 1000) as usize;
    let mut out = Vec::with_capacity(samples * 2);
    let mut phase = 0.0f32;

    for i in 0..samples {
        let t = i as f32 / samples as f32;
        let hz = from_hz + (to_hz - from_hz) * t;
        phase = (phase + hz / AUDIO_FREQUENCY as f32).fract();

        let envelope = 1.0 - t;
        let amplitude = (i16::MAX as f32 * 0.25 * envelope) as i16;
        let sample = if phase < 0.5 { amplitude } else { -amplitude };
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}
