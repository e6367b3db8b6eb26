//! Core simulation components: the skater, obstacles, and particles.

use bevy_ecs::prelude::*;
use glam::Vec2;
use strum_macros::EnumIter;

use crate::constants::{self, GROUND_Y};

/// An axis-aligned bounding box used for collision tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Shrinks the box inward on all sides. A box smaller than `2 * pad`
    /// collapses to its center and overlaps nothing.
    pub fn shrink(&self, pad: f32) -> Self {
        let center = (self.min + self.max) * 0.5;
        Self {
            min: (self.min + pad).min(center),
            max: (self.max - pad).max(center),
        }
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x && self.min.y < other.max.y && self.max.y > other.min.y
    }
}

/// The trick repertoire. `Ollie` is the default airborne state entered on
/// every jump; further taps advance through the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trick {
    #[default]
    Ollie,
    PopShuvit,
    Kickflip,
}

impl Trick {
    /// The on-screen callout for this trick.
    pub fn label(&self) -> &'static str {
        match self {
            Trick::Ollie => "OLLIE",
            Trick::PopShuvit => "POP SHUV-IT",
            Trick::Kickflip => "KICKFLIP",
        }
    }
}

/// The skater's locomotion mode. The three modes are mutually exclusive by
/// construction, which is what enforces the "never both grounded and
/// grinding" invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Locomotion {
    Grounded,
    Airborne {
        trick: Trick,
        /// Taps spent in this air time, including the jump itself (0 when
        /// the skater walked off a ledge or left a grind without jumping).
        taps: u8,
    },
    /// Travelling along the top surface of a grindable obstacle.
    Grinding { obstacle: Entity },
}

impl Locomotion {
    pub fn is_grounded(&self) -> bool {
        matches!(self, Locomotion::Grounded)
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self, Locomotion::Airborne { .. })
    }

    pub fn is_grinding(&self) -> bool {
        matches!(self, Locomotion::Grinding { .. })
    }

    /// The trick currently in progress, if any.
    pub fn trick(&self) -> Option<Trick> {
        match self {
            Locomotion::Airborne { trick, .. } => Some(*trick),
            _ => None,
        }
    }
}

/// The player. A singleton entity; the world scrolls past it, so only the
/// vertical axis carries real physics.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Skater {
    /// Top edge of the skater's box (y grows downward).
    pub y: f32,
    /// Vertical velocity, pixels per tick.
    pub dy: f32,
    pub locomotion: Locomotion,
    pub ducking: bool,
    /// Frame counter driving the push-cycle animation.
    pub idle_frame: u32,
    /// Frame counter driving the board animation while airborne or grinding.
    pub trick_frame: u32,
}

impl Default for Skater {
    fn default() -> Self {
        Self {
            y: GROUND_Y - constants::skater::HEIGHT,
            dy: 0.0,
            locomotion: Locomotion::Grounded,
            ducking: false,
            idle_frame: 0,
            trick_frame: 0,
        }
    }
}

impl Skater {
    /// Current box height; ducking narrows the silhouette.
    pub fn height(&self) -> f32 {
        if self.ducking {
            constants::skater::DUCK_HEIGHT
        } else {
            constants::skater::HEIGHT
        }
    }

    /// The y the skater's top edge rests at while grounded.
    pub fn floor_y(&self) -> f32 {
        GROUND_Y - self.height()
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height()
    }

    /// Full (unpadded) collision box.
    pub fn aabb(&self) -> Aabb {
        Aabb::new(
            Vec2::new(constants::skater::X, self.y),
            Vec2::new(constants::skater::WIDTH, self.height()),
        )
    }

    /// Collision box with the forgiveness padding applied.
    pub fn hitbox(&self) -> Aabb {
        self.aabb().shrink(constants::skater::HITBOX_PAD)
    }

    /// Horizontal extent, for the gap ground-suppression test.
    pub fn x_extent(&self) -> (f32, f32) {
        (constants::skater::X, constants::skater::X + constants::skater::WIDTH)
    }
}

/// Every obstacle kind the generator can produce. Width/height/grindability
/// are fixed per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ObstacleKind {
    Hydrant,
    Rail,
    Box,
    Drone,
    Guard,
    Gap,
    Stairs,
}

impl ObstacleKind {
    pub fn size(&self) -> Vec2 {
        match self {
            ObstacleKind::Hydrant => Vec2::new(12.0, 18.0),
            ObstacleKind::Rail => Vec2::new(42.0, 12.0),
            ObstacleKind::Box => Vec2::new(30.0, 16.0),
            ObstacleKind::Drone => Vec2::new(20.0, 14.0),
            ObstacleKind::Guard => Vec2::new(16.0, 30.0),
            // Zero collidable height: gaps are resolved by the ground step,
            // never by AABB overlap.
            ObstacleKind::Gap => Vec2::new(36.0, 0.0),
            ObstacleKind::Stairs => Vec2::new(34.0, 20.0),
        }
    }

    pub fn grindable(&self) -> bool {
        matches!(self, ObstacleKind::Rail | ObstacleKind::Box)
    }

    /// The difficulty tier at which this kind unlocks.
    pub fn tier(&self) -> u8 {
        match self {
            ObstacleKind::Hydrant | ObstacleKind::Box => 1,
            ObstacleKind::Rail | ObstacleKind::Guard => 2,
            ObstacleKind::Stairs | ObstacleKind::Drone => 3,
            ObstacleKind::Gap => 4,
        }
    }

    /// The y of the kind's top surface. Most kinds stand on the ground; the
    /// drone hovers at duck-clearance height.
    pub fn top(&self) -> f32 {
        match self {
            ObstacleKind::Drone => GROUND_Y - 34.0,
            _ => GROUND_Y - self.size().y,
        }
    }
}

/// A live obstacle. Owned exclusively by the world; scrolls left each tick.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// World-space x of the left edge.
    pub x: f32,
    /// Set the first tick a grind starts on this instance, so the spark
    /// burst and callout fire exactly once.
    pub grinded: bool,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32) -> Self {
        Self {
            kind,
            x,
            grinded: false,
        }
    }

    pub fn width(&self) -> f32 {
        self.kind.size().x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width()
    }

    pub fn top(&self) -> f32 {
        self.kind.top()
    }

    /// Full (unpadded) collision box.
    pub fn aabb(&self) -> Aabb {
        Aabb::new(Vec2::new(self.x, self.top()), self.kind.size())
    }

    /// Collision box with the forgiveness padding applied.
    pub fn hitbox(&self) -> Aabb {
        self.aabb().shrink(crate::constants::skater::HITBOX_PAD)
    }

    /// Whether the given horizontal extent is over this (gap) obstacle.
    pub fn covers_x(&self, left: f32, right: f32) -> bool {
        left < self.right() && right > self.x
    }
}

/// An ephemeral visual effect: dust, sparks, debris. Purely cosmetic.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining ticks before removal.
    pub life: u32,
    pub color: (u8, u8, u8),
}
