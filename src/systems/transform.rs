//! Model matrix composition.
//!
//! Builds the world transform the renderer multiplies with its
//! view-projection matrix. Should run after the motion systems.

use bevy_ecs::prelude::*;
use glam::{Mat4, Vec3};

use crate::components::mapposition::MapPosition;
use crate::components::modelmatrix::ModelMatrix;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;

/// Translate, then rotate about x, y and z (degrees), then scale.
pub fn model_matrix(position: Vec3, rotation_degrees: Vec3, scale: Vec3) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_rotation_x(rotation_degrees.x.to_radians())
        * Mat4::from_rotation_y(rotation_degrees.y.to_radians())
        * Mat4::from_rotation_z(rotation_degrees.z.to_radians())
        * Mat4::from_scale(scale)
}

/// Recompute [`ModelMatrix`] from the current position, rotation and scale.
pub fn model_matrix_system(
    mut query: Query<(&MapPosition, &Rotation, &Scale, &mut ModelMatrix)>,
) {
    for (position, rotation, scale, mut model) in query.iter_mut() {
        model.matrix = model_matrix(position.pos(), rotation.degrees(), scale.scale());
    }
}
