//! Beam plugin: the growth/collision/fade state machine for cast beams.
//!
//! # Philosophy: invariants first
//! The beam's temporal logic is a handful of one-way transitions. Each beam
//! carries explicit state (`BeamPhase`, `Beam`, `BeamExtent`) advanced by
//! per-tick systems, and every transition is guarded where it is written:
//! - `BeamPhase` is one-way: Idle -> Growing -> FadingOut.
//! - `Beam::is_growing` is one-way: true -> false, only in (F) below.
//! - `BeamExtent.length` never decreases while growing.
//! - The hitbox spans origin -> tip: offset == length / 2, every frame.
//!
//! # Data flow (big picture)
//! ```text
//!   Update schedule (variable dt)
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  (A) Producer: request_beam_cast                                   │
//! │      - reads: MouseButton input, Window cursor, MainCamera,        │
//! │               Player Transform                                     │
//! │      - writes: CastBeamRequest message                             │
//! │                                                                    │
//! │  (B) Consumer: spawn_beams_from_requests                           │
//! │      - reads: CastBeamRequest messages                             │
//! │      - spawns: beam root (Beam/BeamPhase/BeamExtent) +             │
//! │                visual + sensor-hitbox children                     │
//! │      - orients the beam toward the aim point exactly once          │
//! │                                                                    │
//! │  (C) advance_beam_growth                                           │
//! │      - loop condition first, then unclamped lerp step              │
//! │      - on exit (target reached OR growth halted): phase ->         │
//! │        FadingOut, inserts FadeOut (fire-and-forget handoff)        │
//! │                                                                    │
//! │  (D) sync_extent_to_visual / sync_extent_to_hitbox                 │
//! │      - Changed<BeamExtent> -> sprite size, collider rebuild,       │
//! │        half-length offsets (origin-anchored growth)                │
//! └────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//! FixedPostUpdate (fixed dt)
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  (E) Physics emits CollisionStart messages (Avian)                 │
//! │                                                                    │
//! │  (F) process_beam_obstructions                                     │
//! │      - impassable + non-sensor contact -> is_growing = false       │
//! │      - the growth loop observes the flag on its next check         │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both scheduling lanes run on the app's single logical thread; the
//! obstruction pass interleaves between growth ticks, never inside one.

pub mod components;
pub mod messages;

pub mod collision;
pub mod growth;
pub mod request;
pub mod spawn;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;

pub struct BeamPlugin;

/// Maintain cast request message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_cast_messages(mut msgs: ResMut<Messages<messages::CastBeamRequest>>) {
    msgs.update();
}

impl Plugin for BeamPlugin {
    fn build(&self, app: &mut App) {
        // Message storage for cast requests.
        app.init_resource::<Messages<messages::CastBeamRequest>>();
        app.add_systems(PostUpdate, update_cast_messages);

        // Update-phase pipeline: request -> spawn -> step -> derive geometry
        app.add_systems(
            Update,
            (
                request::request_beam_cast,
                spawn::spawn_beams_from_requests.after(request::request_beam_cast),
                growth::advance_beam_growth.after(spawn::spawn_beams_from_requests),
                growth::sync_extent_to_visual.after(growth::advance_beam_growth),
                growth::sync_extent_to_hitbox.after(growth::advance_beam_growth),
            )
                .run_if(in_state(GameState::InGame)),
        );

        // Fixed collision pipeline
        app.add_systems(
            FixedPostUpdate,
            collision::process_beam_obstructions
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );
    }
}
