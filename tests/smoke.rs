mod common;

use avian2d::prelude::*;
use bevy::prelude::*;

use beamcast::plugins::beam::components::{BeamHitbox, BeamPhase};
use beamcast::plugins::beam::messages::CastBeamRequest;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn cast_pipeline_is_wired() {
    let mut app = common::app_headless();
    app.update();

    // A cast request flows producer -> consumer into a growing beam.
    app.world_mut().write_message(CastBeamRequest {
        origin: Vec2::ZERO,
        aim_point: Vec2::new(40.0, 0.0),
        target_length: 5.0,
        caster: None,
    });
    app.update();

    let growing = app
        .world_mut()
        .query::<&BeamPhase>()
        .iter(app.world())
        .filter(|phase| **phase == BeamPhase::Growing)
        .count();
    assert_eq!(growing, 1);

    // The beam carries exactly one sensor hitbox.
    let hitboxes = app
        .world_mut()
        .query_filtered::<(), (With<BeamHitbox>, With<Sensor>)>()
        .iter(app.world())
        .count();
    assert_eq!(hitboxes, 1);
}
