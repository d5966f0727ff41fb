//! Color tint component.
//!
//! The renderer multiplies the sampled texel by this color.

use bevy_ecs::prelude::Component;
use glam::Vec4;
use serde::{Deserialize, Serialize};

/// RGBA modulation color, each channel in `[0, 1]`.
#[derive(Component, Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tint {
    pub color: Vec4,
}

impl Tint {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            color: Vec4::new(r, g, b, a),
        }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(mut self, a: f32) -> Self {
        self.color.w = a;
        self
    }

    /// Channels as a plain array, in the order a color uniform expects.
    pub fn as_array(&self) -> [f32; 4] {
        self.color.to_array()
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self { color: Vec4::ONE }
    }
}
