//! World-space position driven by a [`KinematicGroup`].

use bevy_ecs::prelude::Component;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::kinematic::KinematicGroup;

/// Sprite center in world units. `z` is carried for depth ordering only.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    pub motion: KinematicGroup,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            motion: KinematicGroup::at(Vec3::new(x, y, 0.0)),
        }
    }

    pub fn pos(&self) -> Vec3 {
        self.motion.current()
    }

    /// The x/y plane part of the position, used as a collision center.
    pub fn center(&self) -> Vec2 {
        self.motion.current().truncate()
    }
}
