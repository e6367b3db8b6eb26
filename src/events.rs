//! Game-wide events: player commands, stage transitions, and the
//! fire-and-forget feedback cues consumed by the embedding host.

use bevy_ecs::prelude::*;

use crate::systems::components::Trick;

/// A logical player action, already translated from raw input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    /// Jump while grounded or grinding; advance the trick while airborne;
    /// (re)start the run while idle or game over.
    Action,
    /// Duck press/release.
    Duck(bool),
    MuteAudio,
    Exit,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}

/// High-level run state transitions requested by gameplay systems.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageTransition {
    /// Begin a fresh run (from Idle or GameOver).
    Start,
}

/// Host-facing cues: audio/haptic notifications and on-screen callouts.
///
/// These are fire-and-forget; nothing in the simulation reads them back.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum FeedbackEvent {
    Jump,
    TrickPop(Trick),
    GrindStart,
    Land,
    Crash,
    /// The skater touched down with a non-default trick in progress.
    TrickLanded { trick: Trick, reward: u32 },
}
