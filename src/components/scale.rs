use bevy_ecs::prelude::Component;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::kinematic::KinematicGroup;

/// Per-axis scale. For a unit quad the x/y scale is also the half-extent
/// used by collision.
#[derive(Component, Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub motion: KinematicGroup,
}

impl Scale {
    pub fn new(sx: f32, sy: f32) -> Self {
        Self {
            motion: KinematicGroup::at(Vec3::new(sx, sy, 1.0)),
        }
    }

    pub fn scale(&self) -> Vec3 {
        self.motion.current()
    }

    pub fn half_extent(&self) -> Vec2 {
        self.motion.current().truncate()
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
