//! Lighting plugin (Firefly) (render-only).

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::beam::components::Beam;
use crate::plugins::player::Player;

#[derive(Component)]
pub struct CasterLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(Update, (follow_caster_light, attach_beam_glow));
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Name::new("CasterLight"),
        CasterLight,
        PointLight2d {
            color: Color::srgb(0.9, 0.8, 1.0),
            radius: 450.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_caster_light(
    q_caster: Query<&Transform, (With<Player>, Without<CasterLight>)>,
    mut q_light: Query<&mut Transform, (With<CasterLight>, Without<Player>)>,
) {
    let Ok(tf_caster) = q_caster.single() else {
        return;
    };
    let Ok(mut tf_light) = q_light.single_mut() else {
        return;
    };

    tf_light.translation.x = tf_caster.translation.x;
    tf_light.translation.y = tf_caster.translation.y;
}

/// Give newly cast beams a glow. Presentation only; the beam plugin never
/// knows about lights.
fn attach_beam_glow(
    mut commands: Commands,
    q_new_beams: Query<Entity, (With<Beam>, Without<PointLight2d>)>,
) {
    for e in &q_new_beams {
        commands.entity(e).insert(PointLight2d {
            color: Color::srgb(0.55, 0.95, 1.0),
            range: 220.0,
            ..default()
        });
    }
}
