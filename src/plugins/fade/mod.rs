//! Fade plugin: timed alpha fade-out, then despawn.
//!
//! The contract with callers is one fire-and-forget operation: insert
//! `FadeOut` on an entity and this plugin owns the rest of its visible life.
//! Nothing reports back to the inserter.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct FadeOut {
    timer: Timer,
}

impl FadeOut {
    pub fn new(duration: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration, TimerMode::Once),
        }
    }

    /// Remaining opacity in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        1.0 - self.timer.fraction()
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(Update, animate_fades);
}

/// Ramp sprite alpha down over the fade window, then despawn the entity
/// (descendants included).
///
/// The alpha is written to the faded entity's own sprite and to any sprites
/// on its direct children, so split root/visual hierarchies fade as one.
fn animate_fades(
    mut commands: Commands,
    time: Res<Time>,
    mut q_fades: Query<(Entity, &mut FadeOut, Option<&Children>)>,
    mut q_sprites: Query<&mut Sprite>,
) {
    for (e, mut fade, children) in &mut q_fades {
        fade.timer.tick(time.delta());
        let alpha = fade.alpha();

        if let Ok(mut sprite) = q_sprites.get_mut(e) {
            sprite.color = sprite.color.with_alpha(alpha);
        }
        if let Some(children) = children {
            for child in children.iter() {
                if let Ok(mut sprite) = q_sprites.get_mut(child) {
                    sprite.color = sprite.color.with_alpha(alpha);
                }
            }
        }

        if fade.timer.is_finished() {
            commands.entity(e).despawn();
        }
    }
}
