use std::collections::HashMap;

use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use glam::Vec2;
use sdl2::{event::Event, keyboard::Keycode, EventPump};

use crate::constants::feedback::{DUCK_AUTO_RELEASE, SWIPE_THRESHOLD, TAP_MAX_TICKS, TAP_MAX_TRAVEL};
use crate::events::{GameCommand, GameEvent};

#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
    /// Keys that map to duck while held rather than a one-shot command.
    duck_keys: Vec<Keycode>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        key_bindings.insert(Keycode::Space, GameCommand::Action);
        key_bindings.insert(Keycode::Up, GameCommand::Action);
        key_bindings.insert(Keycode::W, GameCommand::Action);

        key_bindings.insert(Keycode::M, GameCommand::MuteAudio);
        key_bindings.insert(Keycode::Escape, GameCommand::Exit);
        key_bindings.insert(Keycode::Q, GameCommand::Exit);

        Self {
            key_bindings,
            duck_keys: vec![Keycode::Down, Keycode::S],
        }
    }
}

/// Tracks an in-flight pointer press so it can be classified as a tap or a
/// downward swipe once enough is known about it.
#[derive(Debug, Clone, Copy)]
struct PointerPress {
    origin: Vec2,
    position: Vec2,
    ticks: u32,
    /// Set once the press crossed the swipe threshold and ducked.
    swiped: bool,
}

/// Pointer gesture state. Touch input arrives as mouse events under SDL.
#[derive(Debug, Default, Resource)]
pub struct PointerState {
    press: Option<PointerPress>,
    /// Ticks until a swipe-initiated duck releases on its own. Key ducks
    /// release on key-up instead and never arm this.
    duck_release: Option<u32>,
}

impl PointerState {
    fn begin(&mut self, at: Vec2) {
        self.press = Some(PointerPress {
            origin: at,
            position: at,
            ticks: 0,
            swiped: false,
        });
        self.duck_release = None;
    }
}

pub fn input_system(
    bindings: Res<Bindings>,
    mut pointer: ResMut<PointerState>,
    mut writer: EventWriter<GameEvent>,
    mut pump: NonSendMut<EventPump>,
) {
    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                writer.write(GameEvent::Command(GameCommand::Exit));
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if bindings.duck_keys.contains(&key) {
                    writer.write(GameEvent::Command(GameCommand::Duck(true)));
                } else if let Some(command) = bindings.key_bindings.get(&key).copied() {
                    writer.write(GameEvent::Command(command));
                }
            }
            Event::KeyUp {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if bindings.duck_keys.contains(&key) {
                    writer.write(GameEvent::Command(GameCommand::Duck(false)));
                }
            }
            Event::MouseButtonDown { x, y, .. } => {
                pointer.begin(Vec2::new(x as f32, y as f32));
            }
            Event::MouseMotion { x, y, .. } => {
                if let Some(press) = pointer.press.as_mut() {
                    press.position = Vec2::new(x as f32, y as f32);
                }
            }
            Event::MouseButtonUp { x, y, .. } => {
                if let Some(mut press) = pointer.press.take() {
                    press.position = Vec2::new(x as f32, y as f32);
                    if press.swiped {
                        pointer.duck_release = Some(DUCK_AUTO_RELEASE);
                    } else if is_tap(&press) {
                        writer.write(GameEvent::Command(GameCommand::Action));
                    }
                }
            }
            _ => {}
        }
    }

    // A held press that drags far enough downward ducks immediately, before
    // the finger lifts.
    if let Some(press) = pointer.press.as_mut() {
        press.ticks += 1;
        if !press.swiped && dragged_down(press) {
            press.swiped = true;
            writer.write(GameEvent::Command(GameCommand::Duck(true)));
        }
    }

    if let Some(remaining) = pointer.duck_release.take() {
        if remaining <= 1 {
            writer.write(GameEvent::Command(GameCommand::Duck(false)));
        } else {
            pointer.duck_release = Some(remaining - 1);
        }
    }
}

/// A release counts as a tap when it was quick and barely moved.
fn is_tap(press: &PointerPress) -> bool {
    press.ticks <= TAP_MAX_TICKS && press.origin.distance(press.position) <= TAP_MAX_TRAVEL
}

/// A held press counts as a duck swipe once it has travelled far enough
/// downward. Upward or sideways travel never ducks.
fn dragged_down(press: &PointerPress) -> bool {
    press.position.y - press.origin.y >= SWIPE_THRESHOLD
}
