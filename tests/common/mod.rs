#![allow(dead_code)]

use bevy_ecs::event::Events;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::Schedule;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use kickflip::events::{GameCommand, GameEvent};
use kickflip::game::Game;
use kickflip::persistence::HighScoreStore;
use kickflip::systems::components::{Obstacle, ObstacleKind, Skater};
use kickflip::systems::spawner::{SpawnRng, SpawnerEnabled};
use kickflip::systems::state::{GameStage, RunState};

/// A headless simulation: the full gameplay schedule minus the SDL-facing
/// input, render, and audio systems. The spawner starts disabled and the
/// RNG seeded so scenarios are deterministic; tests opt back in as needed.
pub struct Sim {
    pub world: World,
    pub schedule: Schedule,
    _dir: tempfile::TempDir,
}

impl Sim {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        Self::with_store(HighScoreStore::with_dir(dir.path().to_path_buf()), dir)
    }

    pub fn with_store(store: HighScoreStore, dir: tempfile::TempDir) -> Self {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        Game::register_events(&mut world);
        Game::insert_sim_resources(&mut world, store);
        Game::add_sim_systems(&mut schedule);

        world.insert_resource(SpawnRng(SmallRng::seed_from_u64(7)));
        world.insert_resource(SpawnerEnabled(false));
        world.spawn(Skater::default());

        Self {
            world,
            schedule,
            _dir: dir,
        }
    }

    pub fn tick(&mut self) {
        self.schedule.run(&mut self.world);
    }

    pub fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    pub fn send(&mut self, command: GameCommand) {
        self.world
            .resource_mut::<Events<GameEvent>>()
            .send(GameEvent::Command(command));
    }

    /// Sends Action and runs a tick; from Idle or GameOver this starts a
    /// fresh run.
    pub fn start(&mut self) {
        self.send(GameCommand::Action);
        self.tick();
    }

    pub fn stage(&self) -> GameStage {
        *self.world.resource::<GameStage>()
    }

    pub fn run_state(&self) -> RunState {
        *self.world.resource::<RunState>()
    }

    pub fn skater(&mut self) -> Skater {
        self.world
            .query::<&Skater>()
            .single(&self.world)
            .expect("skater entity")
            .clone()
    }

    pub fn set_skater(&mut self, f: impl FnOnce(&mut Skater)) {
        let mut query = self.world.query::<&mut Skater>();
        let mut skater = query.single_mut(&mut self.world).expect("skater entity");
        f(&mut skater);
    }

    pub fn spawn_obstacle(&mut self, kind: ObstacleKind, x: f32) -> Entity {
        self.world.spawn(Obstacle::new(kind, x)).id()
    }

    pub fn obstacles(&mut self) -> Vec<Obstacle> {
        self.world.query::<&Obstacle>().iter(&self.world).copied().collect()
    }

    /// Re-pins an obstacle's x, undoing the scroll. For scenarios that need
    /// a hazard to stay under the skater across ticks.
    pub fn pin_obstacle(&mut self, entity: Entity, x: f32) {
        if let Some(mut obstacle) = self.world.get_mut::<Obstacle>(entity) {
            obstacle.x = x;
        }
    }
}
