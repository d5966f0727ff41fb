use bevy_ecs::prelude::{Entity, Resource};

/// Collisions observed during the current tick, plus a running total.
///
/// [`collision_observer`](crate::systems::collision::collision_observer)
/// appends to `pairs`; the tick loop clears them before each tick.
#[derive(Resource, Debug, Default)]
pub struct CollisionLog {
    pub pairs: Vec<(Entity, Entity)>,
    pub total: u64,
}

impl CollisionLog {
    pub fn record(&mut self, a: Entity, b: Entity) {
        self.pairs.push((a, b));
        self.total += 1;
    }

    pub fn begin_tick(&mut self) {
        self.pairs.clear();
    }

    /// Whether `entity` took part in any collision this tick.
    pub fn involves(&self, entity: Entity) -> bool {
        self.pairs.iter().any(|&(a, b)| a == entity || b == entity)
    }
}
