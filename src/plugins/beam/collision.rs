use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{Beam, BeamHitbox, BeamPhase, Impassable};

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

/// Halt growth when a beam hitbox overlaps a real obstacle.
///
/// Contract: the other side's gameplay owner must carry the `Impassable`
/// capability AND the other collider must not itself be a sensor;
/// trigger-only shapes overlap the beam without blocking it.
///
/// Clearing `is_growing` is idempotent and one-way, so repeated qualifying
/// contacts need no dedupe. The growth loop observes the flag on its next
/// condition check.
pub fn process_beam_obstructions(
    mut started: MessageReader<CollisionStart>,
    // Fast "is this a beam hitbox?" check
    q_is_hitbox: Query<(), With<BeamHitbox>>,
    // Hierarchy fallback when the event carries no body
    q_hitbox_owner: Query<&ChildOf, With<BeamHitbox>>,
    mut q_beams: Query<(&mut Beam, &BeamPhase)>,
    q_impassable: Query<(), With<Impassable>>,
    q_sensors: Query<(), With<Sensor>>,
) {
    for ev in started.read() {
        let (t1, t2) = targets(ev);

        // Identify the hitbox side; hitbox-on-hitbox overlaps are ignored.
        let h1 = q_is_hitbox.contains(t1.collider);
        let h2 = q_is_hitbox.contains(t2.collider);
        if !(h1 ^ h2) {
            continue;
        }
        let (hitbox_side, other_side) = if h1 { (t1, t2) } else { (t2, t1) };

        // A trigger-only shape never blocks, impassable or not.
        if q_sensors.contains(other_side.collider) {
            continue;
        }
        if !q_impassable.contains(other_side.gameplay_owner()) {
            continue;
        }

        // The hitbox is a child collider, so the event's body is the beam
        // root; resolve through the hierarchy if physics left it unset.
        let owner = match hitbox_side.body {
            Some(body) => body,
            None => match q_hitbox_owner.get(hitbox_side.collider) {
                Ok(child_of) => child_of.parent(),
                Err(_) => continue,
            },
        };

        let Ok((mut beam, phase)) = q_beams.get_mut(owner) else {
            continue;
        };
        if *phase != BeamPhase::Growing {
            continue;
        }

        beam.is_growing = false;
    }
}
