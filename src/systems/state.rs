//! High-level run state: the Idle/Playing/GameOver stage machine, distance
//! and speed progression, scoring, and high-score bookkeeping.

use bevy_ecs::prelude::*;
use tracing::{debug, info, warn};

use crate::constants::run;
use crate::error::GameError;
use crate::events::{FeedbackEvent, StageTransition};
use crate::persistence::HighScoreStore;
use crate::systems::audio::{AudioEvent, Cue};
use crate::systems::components::{Obstacle, Particle, Skater};

/// A resource to track the overall stage of the game from a high-level
/// perspective.
#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum GameStage {
    /// Initial state: a static pose is rendered and no physics run.
    #[default]
    Idle,
    /// The main gameplay loop is active.
    Playing,
    /// Terminal until the player sends another action.
    GameOver,
}

/// Per-run progression, recomputed every tick. Never persisted.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct RunState {
    /// Monotonic tick counter for the current run.
    pub distance: u64,
    /// Horizontal scroll speed, pixels per tick.
    pub speed: f32,
    /// `distance / SCORE_DIVISOR`.
    pub score: u32,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            distance: 0,
            speed: run::INITIAL_SPEED,
            score: 0,
        }
    }
}

/// The best score seen so far, loaded once at startup.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore(pub u32);

/// The persistence port for [`HighScore`].
#[derive(Resource)]
pub struct ScoreStore(pub HighScoreStore);

/// Process exit flag, set by the Exit command.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct GlobalState {
    pub exit: bool,
}

/// Advances distance and ramps the scroll speed while playing.
///
/// Runs before [`stage_system`], so the tick that starts a run does not
/// advance it: a fresh run is observable at `distance = 0`.
pub fn run_progress_system(stage: Res<GameStage>, mut run_state: ResMut<RunState>) {
    if *stage != GameStage::Playing {
        return;
    }

    run_state.distance += 1;

    if run_state.distance % run::SPEED_INTERVAL == 0 && run_state.speed < run::MAX_SPEED {
        run_state.speed = (run_state.speed + run::SPEED_INCREMENT).min(run::MAX_SPEED);
        debug!(
            speed = run_state.speed,
            distance = run_state.distance,
            "Scroll speed increased"
        );
    }
}

/// Consumes [`StageTransition`] events: tears down the previous run and
/// re-initializes the simulation to defaults.
pub fn stage_system(
    mut commands: Commands,
    mut transitions: EventReader<StageTransition>,
    mut stage: ResMut<GameStage>,
    mut run_state: ResMut<RunState>,
    mut skaters: Query<&mut Skater>,
    obstacles: Query<Entity, With<Obstacle>>,
    particles: Query<Entity, With<Particle>>,
    mut audio: EventWriter<AudioEvent>,
) {
    for transition in transitions.read() {
        match transition {
            StageTransition::Start => {
                for entity in obstacles.iter().chain(particles.iter()) {
                    commands.entity(entity).despawn();
                }
                if let Ok(mut skater) = skaters.single_mut() {
                    *skater = Skater::default();
                }
                *run_state = RunState::default();
                *stage = GameStage::Playing;
                audio.write(AudioEvent::Play(Cue::Start));
                info!("Run started");
            }
        }
    }
}

/// Recomputes the derived score at the end of the simulation step.
pub fn score_system(stage: Res<GameStage>, mut run_state: ResMut<RunState>) {
    if *stage != GameStage::Playing {
        return;
    }
    run_state.score = (run_state.distance / run::SCORE_DIVISOR) as u32;
}

/// Handles the Playing -> GameOver edge: persists the high score if beaten.
///
/// Persistence is best-effort; a failed write is logged and the run goes on.
pub fn game_over_system(
    stage: Res<GameStage>,
    mut run_state: ResMut<RunState>,
    mut high: ResMut<HighScore>,
    store: Res<ScoreStore>,
    mut previous: Local<GameStage>,
) {
    let entered = *stage == GameStage::GameOver && *previous != GameStage::GameOver;
    *previous = *stage;
    if !entered {
        return;
    }

    // The fatal tick still advanced the run, but the regular score pass
    // skips non-Playing stages; settle the final score here.
    run_state.score = (run_state.distance / run::SCORE_DIVISOR) as u32;

    info!(score = run_state.score, high_score = high.0, "Run ended");

    if run_state.score > high.0 {
        high.0 = run_state.score;
        match store.0.save_high_score(high.0) {
            Ok(()) => debug!(high_score = high.0, "High score persisted"),
            Err(e) => warn!(error = %e, "Failed to persist high score"),
        }
    }
}

/// Logs errors raised by other systems. Nothing here is fatal.
pub fn error_report_system(mut errors: EventReader<GameError>) {
    for error in errors.read() {
        tracing::error!(error = %error, "Game system error");
    }
}

/// Logs host-facing feedback cues. The embedding application would forward
/// these to its reward/XP ledger; the standalone binary just traces them.
pub fn feedback_log_system(mut feedback: EventReader<FeedbackEvent>) {
    for event in feedback.read() {
        debug!(?event, "Feedback cue");
    }
}
