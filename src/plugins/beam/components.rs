use bevy::prelude::*;

/// Capability flag: contact with a solid collider owned by an entity carrying
/// this marker halts beam growth. Any entity can opt in, independently of its
/// other components.
#[derive(Component, Debug, Clone, Copy)]
pub struct Impassable;

/// Marker for the child entity carrying the beam's sprite.
#[derive(Component)]
pub struct BeamVisual;

/// Marker for the child entity carrying the beam's sensor collider.
#[derive(Component)]
pub struct BeamHitbox;

/// Lifecycle of one beam instance. Transitions are one-way:
/// Idle -> Growing -> FadingOut.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BeamPhase {
    #[default]
    Idle,
    Growing,
    FadingOut,
}

/// Growth state for one beam instance.
///
/// `is_growing` starts true and can only be cleared, by the obstruction
/// system. `target_length` is written once by `begin_growth` and read-only
/// afterwards.
#[derive(Component, Debug, Clone)]
pub struct Beam {
    pub grow_duration: f32,
    pub target_length: f32,
    pub elapsed: f32,
    pub is_growing: bool,
}

impl Beam {
    pub fn new(grow_duration: f32) -> Self {
        Self {
            grow_duration,
            target_length: 0.0,
            elapsed: 0.0,
            is_growing: true,
        }
    }

    /// Arm the growth loop with its final length.
    ///
    /// Only valid from `Idle`; a repeated trigger while the beam is already
    /// growing (or fading) is ignored and reported as `false`.
    pub fn begin_growth(&mut self, phase: &mut BeamPhase, target_length: f32) -> bool {
        if *phase != BeamPhase::Idle {
            return false;
        }
        self.target_length = target_length;
        self.elapsed = 0.0;
        *phase = BeamPhase::Growing;
        true
    }
}

/// The beam's 1-D visual extent, in world units.
///
/// Sprite size and hitbox geometry are derived from this each frame. It
/// starts at one unit and never shrinks within a beam's lifetime.
#[derive(Component, Debug, Clone, Copy)]
pub struct BeamExtent {
    pub length: f32,
}

impl BeamExtent {
    pub const INITIAL_LENGTH: f32 = 1.0;
}

impl Default for BeamExtent {
    fn default() -> Self {
        Self {
            length: Self::INITIAL_LENGTH,
        }
    }
}
