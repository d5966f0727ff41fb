//! Atlas grid registry.
//!
//! The asset side of the game knows how each texture is cut into cells. It
//! registers that here once, keyed by texture key, and sprite setup looks the
//! grid up when building an [`AtlasFrameState`].

use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashMap;

use crate::components::atlasframe::{AtlasFrameState, AtlasGrid};
use crate::error::SpriteError;

#[derive(Resource, Debug, Default)]
pub struct AtlasStore {
    pub grids: FxHashMap<String, AtlasGrid>,
}

impl AtlasStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the grid of `tex_key`. Zero-sized grids are rejected here so
    /// they never reach a sprite.
    pub fn register(
        &mut self,
        tex_key: impl Into<String>,
        columns: u32,
        rows: u32,
    ) -> Result<AtlasGrid, SpriteError> {
        let grid = AtlasGrid::new(columns, rows)?;
        let tex_key = tex_key.into();
        debug!("Registered atlas '{}' as {}x{}", tex_key, columns, rows);
        self.grids.insert(tex_key, grid);
        Ok(grid)
    }

    pub fn get(&self, tex_key: &str) -> Option<AtlasGrid> {
        self.grids.get(tex_key).copied()
    }

    /// Build an animated frame state over the registered grid of `tex_key`.
    pub fn animation_for(
        &self,
        tex_key: &str,
        frame_hold_ticks: u32,
    ) -> Result<AtlasFrameState, SpriteError> {
        let grid = self
            .get(tex_key)
            .ok_or_else(|| SpriteError::UnknownAtlas(tex_key.to_string()))?;
        let mut state = AtlasFrameState::new(grid, frame_hold_ticks)?;
        state.animation_enabled = true;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut store = AtlasStore::new();
        store.register("hog", 4, 2).unwrap();
        let grid = store.get("hog").unwrap();
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.rows(), 2);
    }

    #[test]
    fn test_register_rejects_zero_grid() {
        let mut store = AtlasStore::new();
        assert!(store.register("broken", 0, 1).is_err());
        assert!(store.get("broken").is_none());
    }

    #[test]
    fn test_animation_for_unknown_key() {
        let store = AtlasStore::new();
        assert_eq!(
            store.animation_for("missing", 10),
            Err(SpriteError::UnknownAtlas("missing".to_string()))
        );
    }

    #[test]
    fn test_animation_for_enables_animation() {
        let mut store = AtlasStore::new();
        store.register("hog", 3, 1).unwrap();
        let state = store.animation_for("hog", 5).unwrap();
        assert!(state.animation_enabled);
        assert_eq!(state.frame_hold_ticks(), 5);
        assert_eq!(state.grid().columns(), 3);
    }
}
