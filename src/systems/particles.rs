//! Ephemeral visual effects: landing dust, grind sparks, crash debris.
//!
//! Particles are write-only outputs of the physics and collision systems;
//! nothing reads them back into simulation decisions.

use bevy_ecs::prelude::*;
use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::{particles, skater, GROUND_Y};
use crate::systems::components::Particle;
use crate::systems::state::{GameStage, RunState};

const DUST: (u8, u8, u8) = (168, 160, 148);
const SPARK: (u8, u8, u8) = (255, 214, 90);
const DEBRIS: (u8, u8, u8) = (224, 80, 60);

/// Advances particle kinematics and retires expired ones.
pub fn particle_system(
    mut commands: Commands,
    stage: Res<GameStage>,
    run_state: Res<RunState>,
    mut query: Query<(Entity, &mut Particle)>,
) {
    if *stage != GameStage::Playing {
        return;
    }

    for (entity, mut particle) in query.iter_mut() {
        let vel = particle.vel;
        particle.pos.x -= run_state.speed * particles::DRAG + vel.x;
        particle.pos.y += vel.y;
        particle.vel.y += particles::GRAVITY;

        particle.life = particle.life.saturating_sub(1);
        if particle.life == 0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Dust kicked up under the board on landing.
pub fn spawn_dust(commands: &mut Commands, ground: f32) {
    for particle in burst(particles::LANDING_DUST, ground, DUST, 0.9, 14) {
        commands.spawn(particle);
    }
}

/// The one-time burst when a grind starts.
pub fn spawn_grind_sparks(commands: &mut Commands, ground: f32) {
    for particle in burst(particles::GRIND_BURST, ground, SPARK, 1.6, 12) {
        commands.spawn(particle);
    }
}

/// A single spark emitted at the grind cadence.
pub fn spawn_spark(commands: &mut Commands, ground: f32) {
    for particle in burst(1, ground, SPARK, 1.2, 10) {
        commands.spawn(particle);
    }
}

/// Debris thrown on a fatal collision.
pub fn spawn_debris(commands: &mut Commands, ground: f32) {
    for particle in burst(particles::CRASH_DEBRIS, ground, DEBRIS, 2.2, 24) {
        commands.spawn(particle);
    }
}

/// Builds a fan of particles around the skater's contact point. Velocities
/// are deterministic per index; the spread comes from the fan shape, not a
/// random source, which keeps headless traces reproducible.
fn burst(count: usize, ground: f32, color: (u8, u8, u8), spread: f32, life: u32) -> SmallVec<[Particle; 8]> {
    let origin = Vec2::new(skater::X + skater::WIDTH * 0.5, ground.min(GROUND_Y));
    (0..count)
        .map(|i| {
            let t = (i as f32 + 0.5) / count as f32;
            let dx = (t - 0.5) * 2.0 * spread;
            let dy = -(0.6 + (t * 7.0).sin().abs() * spread);
            Particle {
                pos: origin,
                vel: Vec2::new(dx, dy),
                life: life + (i as u32 % 3) * 4,
                color,
            }
        })
        .collect()
}
