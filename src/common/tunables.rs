//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    /// Final beam length requested by a cast, in world units.
    pub beam_range: f32,
    /// Seconds for a beam to reach its full target length.
    pub beam_grow_duration: f32,
    /// Seconds for a finished beam to fade to invisible.
    pub beam_fade_duration: f32,
    /// Beam width along the axis orthogonal to growth.
    pub beam_thickness: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            beam_range: 480.0,
            beam_grow_duration: 2.0,
            beam_fade_duration: 0.75,
            beam_thickness: 6.0,
        }
    }
}
