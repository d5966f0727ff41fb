//! Tick counter update.
use bevy_ecs::prelude::*;

use crate::resources::simtick::SimTick;

/// Count one more completed simulation tick.
pub fn advance_tick(world: &mut World) {
    let mut tick = world.resource_mut::<SimTick>();
    tick.tick += 1;
}
