//! World transform handed to the renderer.
//!
//! Recomputed every tick by
//! [`model_matrix_system`](crate::systems::transform::model_matrix_system)
//! from [`MapPosition`](super::mapposition::MapPosition),
//! [`Rotation`](super::rotation::Rotation) and [`Scale`](super::scale::Scale)
//! after they have been stepped.

use bevy_ecs::prelude::Component;
use glam::Mat4;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct ModelMatrix {
    pub matrix: Mat4,
}

impl Default for ModelMatrix {
    fn default() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }
}
