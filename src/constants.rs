//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the logical canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(240, 160);

/// The scale factor for the window (integer zoom)
pub const SCALE: f32 = 4.0;

/// The y coordinate of the ground line, in pixels (y grows downward).
pub const GROUND_Y: f32 = 130.0;

/// The key under which the high score is persisted.
pub const HIGH_SCORE_KEY: &str = "skater_highscore_pixel";

/// Vertical physics of the skater.
pub mod physics {
    use super::CANVAS_SIZE;

    /// Downward acceleration applied per tick while airborne.
    pub const GRAVITY: f32 = 0.55;
    /// Vertical velocity applied on a jump (negative is upward).
    pub const JUMP_FORCE: f32 = -8.5;
    /// Extra downward velocity applied when ducking mid-air (fast drop).
    pub const FAST_DROP: f32 = 4.0;
    /// Downward velocity imparted when a grind ends without a jump.
    pub const GRIND_EXIT_DROP: f32 = 1.0;
    /// Falling past this y while airborne ends the run.
    pub const FALL_OUT_Y: f32 = CANVAS_SIZE.y as f32 + 40.0;
}

/// Skater geometry. The skater scrolls the world; its x position is fixed.
pub mod skater {
    /// The x position of the left edge of the skater.
    pub const X: f32 = 36.0;
    pub const WIDTH: f32 = 14.0;
    /// Standing height, in pixels.
    pub const HEIGHT: f32 = 28.0;
    /// Height while ducking.
    pub const DUCK_HEIGHT: f32 = 16.0;
    /// Inward padding applied to both hitboxes to forgive near-misses.
    pub const HITBOX_PAD: f32 = 3.0;
}

/// Trick state machine tuning.
pub mod tricks {
    /// Upward velocity granted by the second air tap (Pop Shuv-it).
    pub const POP_SHUVIT_BOOST: f32 = 2.5;
    /// Upward velocity granted by the third air tap (Kickflip).
    pub const KICKFLIP_BOOST: f32 = 1.5;
    /// Air taps beyond this count are no-ops.
    pub const MAX_AIR_TAPS: u8 = 3;
    /// Length of the repeating board animation cycle, in ticks.
    pub const TRICK_CYCLE: u32 = 8;
}

/// Run progression: scrolling speed and scoring.
pub mod run {
    pub const INITIAL_SPEED: f32 = 3.2;
    pub const MAX_SPEED: f32 = 7.5;
    /// Speed gain applied every `SPEED_INTERVAL` distance ticks.
    pub const SPEED_INCREMENT: f32 = 0.25;
    pub const SPEED_INTERVAL: u64 = 300;
    /// `score = distance / SCORE_DIVISOR`.
    pub const SCORE_DIVISOR: u64 = 10;
}

/// Procedural obstacle generation.
pub mod spawn {
    /// Base of the minimum-gap formula, in pixels.
    pub const GATE_BASE: f32 = 120.0;
    /// Random widening of the minimum gap, in pixels.
    pub const GATE_RANGE: f32 = 60.0;
    /// Speed contribution to the minimum gap (preserves reaction time).
    pub const GATE_SPEED_FACTOR: f32 = 14.0;
    /// Probability that an eligible gate actually spawns an obstacle.
    pub const SPAWN_CHANCE: f32 = 0.35;
    /// New obstacles appear this far past the right edge of the field.
    pub const SPAWN_MARGIN: f32 = 10.0;
    /// Obstacles are despawned once `x + width` falls below `-DESPAWN_MARGIN`.
    pub const DESPAWN_MARGIN: f32 = 100.0;

    /// Distance thresholds unlocking wider obstacle sets.
    pub const TIER2_DISTANCE: u64 = 600;
    pub const TIER3_DISTANCE: u64 = 1500;
    pub const TIER4_DISTANCE: u64 = 2800;
}

/// Grind detection and feedback.
pub mod grind {
    /// The skater's bottom edge must be within this band above the obstacle
    /// top for a descent to become a grind.
    pub const TOLERANCE: f32 = 6.0;
    /// A spark particle is emitted every Nth grinding tick.
    pub const SPARK_INTERVAL: u64 = 3;
}

/// Particle kinematics.
pub mod particles {
    /// Fraction of the scroll speed applied to particles each tick.
    pub const DRAG: f32 = 0.6;
    /// Downward acceleration applied to particles per tick.
    pub const GRAVITY: f32 = 0.18;
    pub const LANDING_DUST: usize = 4;
    pub const GRIND_BURST: usize = 6;
    pub const CRASH_DEBRIS: usize = 8;
}

/// Host-facing feedback tuning.
pub mod feedback {
    /// Cosmetic reward attached to a landed trick.
    pub const TRICK_REWARD: u32 = 25;
    /// How long the trick banner stays on screen, in ticks.
    pub const BANNER_TICKS: u32 = 90;
    /// Ticks before a swipe-initiated duck releases automatically.
    pub const DUCK_AUTO_RELEASE: u32 = 18;
    /// A pointer press is a tap if released within this many ticks...
    pub const TAP_MAX_TICKS: u32 = 15;
    /// ...and the pointer moved no further than this, in window pixels.
    pub const TAP_MAX_TRAVEL: f32 = 10.0;
    /// Downward pointer travel that counts as a duck swipe, in window pixels.
    pub const SWIPE_THRESHOLD: f32 = 24.0;
}
