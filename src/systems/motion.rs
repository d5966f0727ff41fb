//! Target-seeking motion systems.
//!
//! Each system steps one attribute group of every sprite once per tick:
//! - [`rotation_motion_system`] – steps [`Rotation`]
//! - [`position_motion_system`] – steps [`MapPosition`]
//! - [`scale_motion_system`] – steps [`Scale`]
//!
//! The groups do not depend on each other, but the schedule keeps them in
//! this order so the model matrix is built from values that all advanced in
//! the same tick. See [`KinematicAxis::step`](crate::components::kinematic::KinematicAxis::step)
//! for the gating rule.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::kinematic::KinematicGroup;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;

/// Step all three axes of `group` and report axes that just froze.
pub(crate) fn step_group(group: &mut KinematicGroup, label: &str, entity: Entity) {
    for (i, axis) in group.axes.iter_mut().enumerate() {
        let was_moving = axis.speed != 0.0;
        axis.step();
        if was_moving && axis.speed == 0.0 {
            trace!(
                "{:?} {} axis {} froze at {} (target {})",
                entity, label, i, axis.current, axis.target
            );
        }
    }
}

/// Advance [`Rotation`] components by one tick.
pub fn rotation_motion_system(mut query: Query<(Entity, &mut Rotation)>) {
    for (entity, mut rotation) in query.iter_mut() {
        step_group(&mut rotation.motion, "rotation", entity);
    }
}

/// Advance [`MapPosition`] components by one tick.
pub fn position_motion_system(mut query: Query<(Entity, &mut MapPosition)>) {
    for (entity, mut position) in query.iter_mut() {
        step_group(&mut position.motion, "position", entity);
    }
}

/// Advance [`Scale`] components by one tick.
pub fn scale_motion_system(mut query: Query<(Entity, &mut Scale)>) {
    for (entity, mut scale) in query.iter_mut() {
        step_group(&mut scale.motion, "scale", entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                rotation_motion_system,
                position_motion_system,
                scale_motion_system,
            )
                .chain(),
        );
        schedule.run(world);
    }

    #[test]
    fn test_all_three_groups_step() {
        let mut world = World::new();
        let mut position = MapPosition::new(0.0, 0.0);
        position.motion.x_mut().seek(1.0, 0.5, 0.0);
        let mut rotation = Rotation::default();
        rotation.motion.z_mut().seek(-90.0, -15.0, 0.0);
        let mut scale = Scale::default();
        scale.motion.y_mut().seek(2.0, 0.0, 0.25);

        let e = world.spawn((position, rotation, scale)).id();
        run(&mut world);

        let p = world.get::<MapPosition>(e).unwrap().pos();
        let r = world.get::<Rotation>(e).unwrap().degrees();
        let s = world.get::<Scale>(e).unwrap().scale();
        assert!(approx_eq(p.x, 0.5));
        assert!(approx_eq(r.z, -15.0));
        assert!(approx_eq(s.y, 1.25));
        assert!(approx_eq(s.x, 1.0));
    }

    #[test]
    fn test_resting_sprite_does_not_move() {
        let mut world = World::new();
        let e = world
            .spawn((MapPosition::new(3.0, 4.0), Rotation::default(), Scale::default()))
            .id();
        for _ in 0..5 {
            run(&mut world);
        }
        assert_eq!(world.get::<MapPosition>(e).unwrap().pos(), Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(world.get::<Scale>(e).unwrap().scale(), Vec3::ONE);
    }

    #[test]
    fn test_entities_move_independently() {
        let mut world = World::new();
        let mut moving = MapPosition::new(0.0, 0.0);
        moving.motion.y_mut().seek(-1.0, -0.25, 0.0);
        let a = world.spawn(moving).id();
        let b = world.spawn(MapPosition::new(0.0, 0.0)).id();
        run(&mut world);
        assert!(approx_eq(world.get::<MapPosition>(a).unwrap().pos().y, -0.25));
        assert!(approx_eq(world.get::<MapPosition>(b).unwrap().pos().y, 0.0));
    }
}
