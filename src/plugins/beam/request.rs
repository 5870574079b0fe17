use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::camera::MainCamera;
use crate::plugins::player::Player;

use super::messages::CastBeamRequest;

/// Producer: read input + resolve the cursor into world space, then write a
/// CastBeamRequest message.
///
/// This system intentionally does **not** spawn anything.
pub fn request_beam_cast(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    q_caster: Query<(Entity, &Transform), With<Player>>,
    tunables: Res<Tunables>,
    mut writer: MessageWriter<CastBeamRequest>,
) {
    let Some(buttons) = buttons else { return; };
    if !buttons.just_pressed(MouseButton::Left) { return; }

    let (caster_e, caster_tf) = match q_caster.single() {
        Ok(v) => v,
        Err(e) => { debug!("No single Player Transform: {e:?}"); return; }
    };
    let origin = caster_tf.translation.truncate();

    let window = match windows.single() {
        Ok(w) => w,
        Err(e) => { debug!("No single Window: {e:?}"); return; }
    };

    let cursor = match window.cursor_position() {
        Some(c) => c,
        None => { debug!("Cursor position is None"); return; }
    };

    let (camera, camera_tf) = match q_camera.single() {
        Ok(v) => v,
        Err(e) => { debug!("No single MainCamera: {e:?}"); return; }
    };

    let aim_point = match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => p,
        Err(e) => { debug!("viewport_to_world_2d failed: {e:?}"); return; }
    };

    writer.write(CastBeamRequest {
        origin,
        aim_point,
        target_length: tunables.beam_range,
        caster: Some(caster_e),
    });
}
