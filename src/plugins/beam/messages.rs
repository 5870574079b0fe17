//! Buffered cast requests.
//!
//! Producers create *intent*; the spawn consumer applies it (entity assembly
//! + growth trigger). Keeping the two apart means input handling never
//! touches beam internals.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct CastBeamRequest {
    /// World-space point the beam grows from.
    pub origin: Vec2,
    /// World-space point the beam is oriented toward, once, at spawn.
    pub aim_point: Vec2,
    /// Final beam length in world units.
    pub target_length: f32,
    pub caster: Option<Entity>,
}
