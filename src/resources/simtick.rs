use bevy_ecs::prelude::Resource;

/// Number of simulation ticks completed so far.
///
/// All motion and animation in this crate is expressed per tick, so this is
/// the only clock the simulation has.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimTick {
    pub tick: u64,
}
