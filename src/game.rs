//! This module contains the main game logic and state.

use bevy_ecs::event::EventRegistry;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::world::World;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sdl2::render::{Canvas, ScaleMode, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{debug, info, warn};

use crate::audio::Audio;
use crate::constants::CANVAS_SIZE;
use crate::error::{GameError, GameResult};
use crate::events::{FeedbackEvent, GameEvent, StageTransition};
use crate::persistence::HighScoreStore;
use crate::systems::audio::{audio_system, AudioEvent, AudioResource, AudioState};
use crate::systems::components::Skater;
use crate::systems::hud::{hud_system, Banner};
use crate::systems::input::{input_system, Bindings, PointerState};
use crate::systems::render::{present_system, render_system, BackbufferResource};
use crate::systems::spawner::{SpawnRng, SpawnerEnabled};
use crate::systems::state::{GlobalState, HighScore, ScoreStore};
use crate::systems::{collision, control, movement, particles, physics, spawner, state};

/// System set for all gameplay systems to ensure they run after input
/// processing.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameplaySet {
    /// Systems that translate raw input into commands.
    Input,
    /// Systems that advance the simulation.
    Update,
    /// Systems that react to what the simulation produced.
    Respond,
}

/// System set for all rendering systems to ensure they run after gameplay
/// logic.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum RenderSet {
    Draw,
    Present,
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// Orchestrates all game systems through a centralized `World`, while a
/// `Schedule` defines system execution order. SDL2 handles are stored as
/// `NonSend` resources; everything the simulation itself needs is plain
/// data, which is what lets the integration tests run the same systems
/// without a window.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    pub fn new(
        mut canvas: Canvas<Window>,
        texture_creator: &TextureCreator<WindowContext>,
        event_pump: EventPump,
    ) -> GameResult<Game> {
        info!("Starting game initialization");

        let mut backbuffer = texture_creator
            .create_texture_target(None, CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        backbuffer.set_scale_mode(ScaleMode::Nearest);

        canvas.set_draw_color(sdl2::pixels::Color::BLACK);
        canvas.clear();
        canvas.present();

        debug!("Initializing audio subsystem");
        let audio = Audio::new();

        let mut world = World::default();
        let mut schedule = Schedule::default();

        Self::register_events(&mut world);
        Self::insert_sim_resources(&mut world, HighScoreStore::new());

        world.insert_resource(Bindings::default());
        world.insert_resource(PointerState::default());

        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(BackbufferResource(backbuffer));
        world.insert_non_send_resource(AudioResource(audio));

        Self::configure_schedule(&mut schedule);

        world.spawn(Skater::default());

        info!("Game initialization completed");
        Ok(Game { world, schedule })
    }

    /// Registers every event type the systems exchange. Shared with the
    /// headless test harness.
    pub fn register_events(world: &mut World) {
        EventRegistry::register_event::<GameError>(world);
        EventRegistry::register_event::<GameEvent>(world);
        EventRegistry::register_event::<StageTransition>(world);
        EventRegistry::register_event::<FeedbackEvent>(world);
        EventRegistry::register_event::<AudioEvent>(world);
    }

    /// Inserts the simulation-side resources. Shared with the headless test
    /// harness, which passes a store rooted at a temp directory.
    pub fn insert_sim_resources(world: &mut World, store: HighScoreStore) {
        let high_score = match store.load_high_score() {
            Ok(Some(score)) => {
                debug!(score, "Loaded high score");
                score
            }
            Ok(None) => 0,
            Err(e) => {
                warn!(error = %e, "Failed to load high score, starting from zero");
                0
            }
        };

        world.insert_resource(state::GameStage::default());
        world.insert_resource(state::RunState::default());
        world.insert_resource(GlobalState::default());
        world.insert_resource(HighScore(high_score));
        world.insert_resource(ScoreStore(store));
        world.insert_resource(SpawnRng(SmallRng::from_os_rng()));
        world.insert_resource(SpawnerEnabled::default());
        world.insert_resource(AudioState::default());
        world.insert_resource(Banner::default());
    }

    /// Adds the simulation systems in their canonical order. Shared with the
    /// headless test harness.
    pub fn add_sim_systems(schedule: &mut Schedule) {
        schedule.configure_sets((GameplaySet::Input, GameplaySet::Update, GameplaySet::Respond).chain());
        schedule.add_systems(
            (
                bevy_ecs::event::event_update_system,
                control::control_system,
                state::run_progress_system,
                state::stage_system,
                physics::physics_system,
                movement::obstacle_scroll_system,
                spawner::spawner_system,
                collision::collision_system,
                state::game_over_system,
                particles::particle_system,
                state::score_system,
            )
                .chain()
                .in_set(GameplaySet::Update),
        );
        schedule.add_systems(
            (hud_system, state::feedback_log_system, state::error_report_system).in_set(GameplaySet::Respond),
        );
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule.configure_sets((GameplaySet::Respond, RenderSet::Draw, RenderSet::Present).chain());

        schedule.add_systems(input_system.in_set(GameplaySet::Input));
        Self::add_sim_systems(schedule);
        schedule.add_systems(render_system.in_set(RenderSet::Draw));
        schedule.add_systems((present_system, audio_system).chain().in_set(RenderSet::Present));
    }

    /// Executes one frame of game logic by running all scheduled systems.
    ///
    /// Returns `true` if the game should terminate.
    pub fn tick(&mut self) -> bool {
        self.schedule.run(&mut self.world);
        self.world.resource::<GlobalState>().exit
    }
}
