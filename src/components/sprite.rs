//! Sprite identity and the bundle that makes up a full sprite.

use bevy_ecs::prelude::{Bundle, Component};

use super::atlasframe::{AtlasFrameState, FrameUv};
use super::mapposition::MapPosition;
use super::modelmatrix::ModelMatrix;
use super::rotation::Rotation;
use super::scale::Scale;
use super::tint::Tint;

/// A textured quad identified by the key of the texture it samples.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub tex_key: String,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
        }
    }
}

/// Everything one sprite owns: its motion state for the three attributes,
/// atlas framing and tint, plus the per-tick outputs the renderer reads.
///
/// Sprites take part in collision detection only once a
/// [`CollisionMargin`](super::boxcollider::CollisionMargin) is added next to
/// the bundle, so scenery never collides.
#[derive(Bundle, Clone, Debug)]
pub struct SpriteBundle {
    pub sprite: Sprite,
    pub position: MapPosition,
    pub rotation: Rotation,
    pub scale: Scale,
    pub tint: Tint,
    pub atlas: AtlasFrameState,
    pub frame_uv: FrameUv,
    pub model: ModelMatrix,
}

impl SpriteBundle {
    /// A unit sprite at the origin showing the whole texture.
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            sprite: Sprite::new(tex_key),
            position: MapPosition::default(),
            rotation: Rotation::default(),
            scale: Scale::default(),
            tint: Tint::default(),
            atlas: AtlasFrameState::default(),
            frame_uv: FrameUv::default(),
            model: ModelMatrix::default(),
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = MapPosition::new(x, y);
        self
    }

    pub fn with_scale(mut self, sx: f32, sy: f32) -> Self {
        self.scale = Scale::new(sx, sy);
        self
    }

    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    /// Use `atlas` and show its current frame until the first tick.
    pub fn with_atlas(mut self, atlas: AtlasFrameState) -> Self {
        self.frame_uv = FrameUv {
            uv: atlas.uv_rect(),
        };
        self.atlas = atlas;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::atlasframe::UvRect;
    use glam::Vec3;

    #[test]
    fn test_bundle_defaults() {
        let b = SpriteBundle::new("bird");
        assert_eq!(b.sprite.tex_key, "bird");
        assert_eq!(b.position.pos(), Vec3::ZERO);
        assert_eq!(b.rotation.degrees(), Vec3::ZERO);
        assert_eq!(b.scale.scale(), Vec3::ONE);
        assert_eq!(b.frame_uv.uv, UvRect::FULL);
    }

    #[test]
    fn test_with_atlas_primes_frame_uv() {
        let atlas = AtlasFrameState::animated(4, 1, 10).unwrap();
        let b = SpriteBundle::new("bird").with_atlas(atlas);
        assert_eq!(b.frame_uv.uv, UvRect::from_bounds(0.0, 0.0, 0.25, 1.0));
    }
}
