use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::plugins::beam::components::Impassable;

#[test]
fn spawns_impassable_walls_on_enter() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_arena);

    let walls = world
        .query::<(&Name, &RigidBody, &Impassable)>()
        .iter(&world)
        .filter(|(n, rb, _)| n.as_str().starts_with("Wall") && matches!(**rb, RigidBody::Static))
        .count();
    assert_eq!(walls, 4);
}

#[test]
fn walls_are_solid_not_sensors() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_arena);

    let sensor_walls = world
        .query_filtered::<&Name, (With<Impassable>, With<Sensor>)>()
        .iter(&world)
        .count();
    assert_eq!(sensor_walls, 0);
}
