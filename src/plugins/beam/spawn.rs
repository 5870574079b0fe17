//! Spawn consumer: assemble one beam entity per cast request.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};

use super::components::{Beam, BeamExtent, BeamHitbox, BeamPhase, BeamVisual};
use super::messages::CastBeamRequest;

/// Face a transform's +X axis toward a world-space point.
///
/// Recomputes from current inputs, so repeated calls are idempotent. A
/// degenerate (near-zero) direction keeps the previous rotation; normalizing
/// it would produce NaNs.
pub fn orient_toward(tf: &mut Transform, target: Vec2) {
    let dir = target - tf.translation.truncate();
    if dir.length_squared() < 1e-4 {
        return;
    }
    tf.rotation = Quat::from_rotation_z(dir.y.atan2(dir.x));
}

/// Consumer: spawn one beam per cast request.
///
/// The beam is oriented toward the aim point exactly once, here; it does not
/// track the cursor afterwards. Growth is armed through the guarded
/// `begin_growth`, so a beam can never be triggered twice.
///
/// The root owns the state; two children own the presentation:
/// - `BeamVisual`: the sprite, sized to the extent.
/// - `BeamHitbox`: a sensor collider spanning origin -> tip.
///
/// Both sit at local `x = length / 2` so the near edge stays anchored at the
/// cast origin while the far edge advances.
pub fn spawn_beams_from_requests(
    mut commands: Commands,
    mut reader: MessageReader<CastBeamRequest>,
    tunables: Res<Tunables>,
) {
    for req in reader.read() {
        let mut tf = Transform::from_translation(req.origin.extend(1.5));
        orient_toward(&mut tf, req.aim_point);

        let mut beam = Beam::new(tunables.beam_grow_duration);
        let mut phase = BeamPhase::default();
        beam.begin_growth(&mut phase, req.target_length);

        let extent = BeamExtent::default();
        let half = extent.length * 0.5;
        let thickness = tunables.beam_thickness;

        commands
            .spawn((
                Name::new("Beam"),
                beam,
                phase,
                extent,
                tf,
                Visibility::default(),
                RigidBody::Kinematic,
                DespawnOnExit(GameState::InGame),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Name::new("BeamVisual"),
                    BeamVisual,
                    Sprite {
                        color: Color::srgb(0.55, 0.95, 1.0),
                        custom_size: Some(Vec2::new(extent.length, thickness)),
                        ..default()
                    },
                    Transform::from_xyz(half, 0.0, 0.0),
                ));
                parent.spawn((
                    Name::new("BeamHitbox"),
                    BeamHitbox,
                    Collider::rectangle(extent.length, thickness),
                    Sensor,
                    CollisionLayers::new(Layer::Beam, [Layer::World]),
                    CollisionEventsEnabled,
                    Transform::from_xyz(half, 0.0, 0.0),
                ));
            });
    }
}
