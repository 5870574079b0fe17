//! Per-tick growth stepping + geometry derivation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::fade::FadeOut;

use super::components::{Beam, BeamExtent, BeamHitbox, BeamPhase, BeamVisual};

/// Unclamped linear interpolation from the initial one-unit extent.
///
/// `t` may exceed 1.0 when frame steps are coarse, so the result can
/// overshoot `target_length` for one frame. The growth loop's length
/// condition is the terminating check, not this function.
#[inline]
pub fn grown_length(target_length: f32, t: f32) -> f32 {
    BeamExtent::INITIAL_LENGTH + (target_length - BeamExtent::INITIAL_LENGTH) * t
}

/// Advance every growing beam by one frame.
///
/// The loop condition is checked before the step: a beam whose extent has
/// reached its target, or whose growth was halted by an obstruction, hands
/// off to the fade and is never stepped again. The handoff is fire-and-forget;
/// nothing here observes fade completion.
pub fn advance_beam_growth(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q_beams: Query<(Entity, &mut Beam, &mut BeamPhase, &mut BeamExtent)>,
) {
    for (e, mut beam, mut phase, mut extent) in &mut q_beams {
        if *phase != BeamPhase::Growing {
            continue;
        }

        if !(extent.length < beam.target_length && beam.is_growing) {
            *phase = BeamPhase::FadingOut;
            commands
                .entity(e)
                .insert(FadeOut::new(tunables.beam_fade_duration));
            continue;
        }

        beam.elapsed += time.delta_secs();
        if beam.grow_duration > 0.0 {
            let t = beam.elapsed / beam.grow_duration;
            extent.length = grown_length(beam.target_length, t);
        } else {
            // Degenerate config; snap rather than divide by zero.
            extent.length = beam.target_length;
        }
    }
}

/// Derive sprite geometry from the extent.
pub fn sync_extent_to_visual(
    tunables: Res<Tunables>,
    q_beams: Query<(&BeamExtent, &Children), Changed<BeamExtent>>,
    mut q_visuals: Query<(&mut Sprite, &mut Transform), With<BeamVisual>>,
) {
    for (extent, children) in &q_beams {
        for child in children.iter() {
            let Ok((mut sprite, mut tf)) = q_visuals.get_mut(child) else {
                continue;
            };
            sprite.custom_size = Some(Vec2::new(extent.length, tunables.beam_thickness));
            tf.translation.x = extent.length * 0.5;
        }
    }
}

/// Derive hitbox geometry from the extent.
///
/// Invariant: the collider spans from the beam origin to the visible tip.
/// Its length tracks the extent and its offset along the growth axis is
/// always half the length.
pub fn sync_extent_to_hitbox(
    tunables: Res<Tunables>,
    q_beams: Query<(&BeamExtent, &Children), Changed<BeamExtent>>,
    mut q_hitboxes: Query<(&mut Collider, &mut Transform), With<BeamHitbox>>,
) {
    for (extent, children) in &q_beams {
        for child in children.iter() {
            let Ok((mut collider, mut tf)) = q_hitboxes.get_mut(child) else {
                continue;
            };
            *collider = Collider::rectangle(extent.length, tunables.beam_thickness);
            tf.translation.x = extent.length * 0.5;
        }
    }
}
