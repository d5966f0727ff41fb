//! Collision detection.
//!
//! - [`overlaps`] – the pure margin-shrunk AABB test between two boxes
//! - [`bounding_box`] – derive a sprite's box from its components
//! - [`collision_detector`] – test every pair of sprites and trigger
//!   [`CollisionEvent`] for each overlap
//! - [`collision_observer`] – record triggered collisions in [`CollisionLog`]
//!
//! Detection only reads positions and scales. It runs after the motion
//! systems so it sees the values of the current tick.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::{BoundingBox, CollisionMargin};
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::events::collision::CollisionEvent;
use crate::resources::collisionlog::CollisionLog;

/// Whether two margin-shrunk boxes overlap. Symmetric in its arguments.
pub fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.overlaps(b)
}

/// Collision box of a sprite: centered on its x/y position, with its x/y
/// scale as half-extent.
pub fn bounding_box(
    position: &MapPosition,
    scale: &Scale,
    margin: &CollisionMargin,
) -> BoundingBox {
    BoundingBox::new(position.center(), scale.half_extent(), margin.margin)
}

/// Trigger a [`CollisionEvent`] for every overlapping pair of sprites.
pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &Scale, &CollisionMargin)>,
    mut commands: Commands,
) {
    for [(entity_a, pos_a, scale_a, margin_a), (entity_b, pos_b, scale_b, margin_b)] in
        query.iter_combinations()
    {
        let box_a = bounding_box(pos_a, scale_a, margin_a);
        let box_b = bounding_box(pos_b, scale_b, margin_b);
        if overlaps(&box_a, &box_b) {
            debug!("Collision between {:?} and {:?}", entity_a, entity_b);
            commands.trigger(CollisionEvent {
                a: entity_a,
                b: entity_b,
            });
        }
    }
}

/// Record each collision in [`CollisionLog`].
pub fn collision_observer(trigger: On<CollisionEvent>, mut log: ResMut<CollisionLog>) {
    let event = trigger.event();
    log.record(event.a, event.b);
}
