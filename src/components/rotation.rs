use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::kinematic::KinematicGroup;

/// Rotation angles in degrees around the x, y and z axes.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub motion: KinematicGroup,
}

impl Rotation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            motion: KinematicGroup::at(Vec3::new(x, y, z)),
        }
    }

    pub fn degrees(&self) -> Vec3 {
        self.motion.current()
    }
}
