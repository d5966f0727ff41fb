//! Texture atlas framing state.
//!
//! An [`AtlasFrameState`] selects which part of a sprite's texture is sampled:
//! either one cell of a `columns × rows` sprite sheet (cycling every
//! `frame_hold_ticks` ticks) or a 1×1 window sliding over a tiled texture
//! (scrolling). The per-tick update lives in
//! [`crate::systems::atlasframe`]; this module holds the data and the pure
//! UV computations.

use bevy_ecs::prelude::Component;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SpriteError;

/// Frame hold used when none is given, in ticks.
pub const DEFAULT_FRAME_HOLD_TICKS: u32 = 10;

/// Default horizontal scroll speed in UV units per tick.
pub const DEFAULT_SCROLL_SPEED: Vec2 = Vec2::new(0.005, 0.0);

/// Four texture coordinates, one per quad corner.
///
/// Corners are stored top-right, bottom-right, bottom-left, top-left, with
/// `v` growing downward. The layout is plain `f32`s so a renderer can upload
/// it directly (see [`UvRect::as_floats`]).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct UvRect {
    pub corners: [[f32; 2]; 4],
}

impl UvRect {
    pub const TOP_RIGHT: usize = 0;
    pub const BOTTOM_RIGHT: usize = 1;
    pub const BOTTOM_LEFT: usize = 2;
    pub const TOP_LEFT: usize = 3;

    /// The whole texture.
    pub const FULL: UvRect = UvRect {
        corners: [[1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]],
    };

    /// Build from the top-left `(u0, v0)` and bottom-right `(u1, v1)` bounds.
    pub fn from_bounds(u0: f32, v0: f32, u1: f32, v1: f32) -> Self {
        Self {
            corners: [[u1, v0], [u1, v1], [u0, v1], [u0, v0]],
        }
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::from(self.corners[Self::TOP_LEFT])
    }

    /// The eight floats in corner order, ready for a texture coordinate buffer.
    pub fn as_floats(&self) -> &[f32; 8] {
        bytemuck::cast_ref(self)
    }
}

impl Default for UvRect {
    fn default() -> Self {
        Self::FULL
    }
}

/// A `columns × rows` partition of a texture into equal cells.
///
/// Both dimensions are at least 1; the constructor rejects anything else so
/// cell sizes never divide by zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasGrid {
    columns: u32,
    rows: u32,
}

impl AtlasGrid {
    pub fn new(columns: u32, rows: u32) -> Result<Self, SpriteError> {
        if columns == 0 || rows == 0 {
            return Err(SpriteError::ZeroGridDimension { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Width and height of one cell in UV units.
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(1.0 / self.columns as f32, 1.0 / self.rows as f32)
    }

    /// UV rectangle of cell `(col, row)`.
    pub fn cell_uv(&self, cell: CellIndex) -> UvRect {
        let step = self.cell_size();
        let u0 = step.x * cell.col as f32;
        let v0 = step.y * cell.row as f32;
        UvRect::from_bounds(u0, v0, u0 + step.x, v0 + step.y)
    }
}

impl Default for AtlasGrid {
    fn default() -> Self {
        Self {
            columns: 1,
            rows: 1,
        }
    }
}

/// Column/row of an atlas cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellIndex {
    pub col: u32,
    pub row: u32,
}

impl CellIndex {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Apply the end-of-row and end-of-sheet wraps, in that order.
    ///
    /// A column past the end moves to the start of the next row; a row past
    /// the end then moves back to the first row. Both checks can fire in the
    /// same call.
    pub fn wrapped(self, grid: &AtlasGrid) -> Self {
        let mut cell = self;
        if cell.col >= grid.columns() {
            cell.col = 0;
            cell.row += 1;
        }
        if cell.row >= grid.rows() {
            cell.row = 0;
        }
        cell
    }
}

/// Continuous UV scrolling over a tiled texture.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub enabled: bool,
    /// UV units added to the offset every tick. Expected non-negative;
    /// only the upper bound wraps.
    pub speed: Vec2,
    /// Current offset, each component in `[0, 1)` for non-negative speeds.
    pub offset: Vec2,
}

impl ScrollState {
    /// Add one tick of speed and wrap each component that reached 1.0 back
    /// to 0.0.
    pub fn advance(&mut self) {
        self.offset += self.speed;
        if self.offset.x >= 1.0 {
            self.offset.x = 0.0;
        }
        if self.offset.y >= 1.0 {
            self.offset.y = 0.0;
        }
    }

    /// A 1×1 window shifted by the current offset.
    pub fn uv(&self) -> UvRect {
        let Vec2 { x: u, y: v } = self.offset;
        UvRect::from_bounds(u, v, 1.0 + u, 1.0 + v)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            enabled: false,
            speed: DEFAULT_SCROLL_SPEED,
            offset: Vec2::ZERO,
        }
    }
}

/// Sprite-sheet animation and scroll state of one sprite.
///
/// Animation and scrolling are normally exclusive, but both may be enabled;
/// the animated cell then replaces the scroll window in the produced UVs.
#[derive(Component, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AtlasFrameState {
    pub animation_enabled: bool,
    grid: AtlasGrid,
    pub current_cell: CellIndex,
    frame_hold_ticks: u32,
    pub elapsed_ticks: u32,
    pub scroll: ScrollState,
}

impl AtlasFrameState {
    /// Non-animated, non-scrolling state over `grid`.
    pub fn new(grid: AtlasGrid, frame_hold_ticks: u32) -> Result<Self, SpriteError> {
        if frame_hold_ticks == 0 {
            return Err(SpriteError::ZeroFrameHold);
        }
        Ok(Self {
            animation_enabled: false,
            grid,
            current_cell: CellIndex::default(),
            frame_hold_ticks,
            elapsed_ticks: 0,
            scroll: ScrollState::default(),
        })
    }

    /// A sprite sheet animation over a `columns × rows` grid.
    pub fn animated(columns: u32, rows: u32, frame_hold_ticks: u32) -> Result<Self, SpriteError> {
        let mut state = Self::new(AtlasGrid::new(columns, rows)?, frame_hold_ticks)?;
        state.animation_enabled = true;
        Ok(state)
    }

    /// A scrolling background over the whole texture.
    pub fn scrolling(speed: Vec2) -> Self {
        Self {
            scroll: ScrollState {
                enabled: true,
                speed,
                offset: Vec2::ZERO,
            },
            ..Self::default()
        }
    }

    pub fn grid(&self) -> AtlasGrid {
        self.grid
    }

    pub fn frame_hold_ticks(&self) -> u32 {
        self.frame_hold_ticks
    }

    /// Replace the grid dimensions. On error the state is left unchanged.
    pub fn set_grid(&mut self, columns: u32, rows: u32) -> Result<(), SpriteError> {
        self.grid = AtlasGrid::new(columns, rows)?;
        Ok(())
    }

    /// Replace the frame hold. On error the state is left unchanged.
    pub fn set_frame_hold(&mut self, ticks: u32) -> Result<(), SpriteError> {
        if ticks == 0 {
            return Err(SpriteError::ZeroFrameHold);
        }
        self.frame_hold_ticks = ticks;
        Ok(())
    }

    /// Restart the animation at cell `(0, 0)` with a fresh hold timer.
    pub fn rewind(&mut self) {
        self.current_cell = CellIndex::default();
        self.elapsed_ticks = 0;
    }

    /// The cell the next tick will show.
    ///
    /// `current_cell` itself may sit one column past the end between ticks:
    /// the column advance happens at the end of a tick and the wrap at the
    /// start of the next one.
    pub fn displayed_cell(&self) -> CellIndex {
        self.current_cell.wrapped(&self.grid)
    }

    /// The UV rectangle for the current state, without advancing anything.
    ///
    /// The animated cell takes precedence over the scroll window.
    pub fn uv_rect(&self) -> UvRect {
        if self.scroll.enabled && !self.animation_enabled {
            self.scroll.uv()
        } else {
            self.grid.cell_uv(self.displayed_cell())
        }
    }
}

impl Default for AtlasFrameState {
    fn default() -> Self {
        Self {
            animation_enabled: false,
            grid: AtlasGrid::default(),
            current_cell: CellIndex::default(),
            frame_hold_ticks: DEFAULT_FRAME_HOLD_TICKS,
            elapsed_ticks: 0,
            scroll: ScrollState::default(),
        }
    }
}

/// UV rectangle produced by the latest atlas tick, read by the renderer.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameUv {
    pub uv: UvRect,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn uv_approx_eq(a: &UvRect, b: &UvRect) -> bool {
        a.as_floats()
            .iter()
            .zip(b.as_floats().iter())
            .all(|(x, y)| approx_eq(*x, *y))
    }

    #[test]
    fn test_grid_rejects_zero_columns() {
        assert_eq!(
            AtlasGrid::new(0, 2),
            Err(SpriteError::ZeroGridDimension {
                columns: 0,
                rows: 2
            })
        );
    }

    #[test]
    fn test_grid_rejects_zero_rows() {
        assert!(AtlasGrid::new(3, 0).is_err());
    }

    #[test]
    fn test_cell_uv_second_column_second_row() {
        let grid = AtlasGrid::new(4, 2).unwrap();
        let uv = grid.cell_uv(CellIndex::new(1, 1));
        let expected = UvRect::from_bounds(0.25, 0.5, 0.5, 1.0);
        assert!(uv_approx_eq(&uv, &expected));
    }

    #[test]
    fn test_single_cell_grid_is_full_texture() {
        let uv = AtlasGrid::default().cell_uv(CellIndex::default());
        assert!(uv_approx_eq(&uv, &UvRect::FULL));
    }

    #[test]
    fn test_uv_rect_corner_order() {
        let uv = UvRect::from_bounds(0.1, 0.2, 0.3, 0.4);
        assert_eq!(uv.corners[UvRect::TOP_RIGHT], [0.3, 0.2]);
        assert_eq!(uv.corners[UvRect::BOTTOM_RIGHT], [0.3, 0.4]);
        assert_eq!(uv.corners[UvRect::BOTTOM_LEFT], [0.1, 0.4]);
        assert_eq!(uv.corners[UvRect::TOP_LEFT], [0.1, 0.2]);
        assert_eq!(uv.as_floats(), &[0.3, 0.2, 0.3, 0.4, 0.1, 0.4, 0.1, 0.2]);
    }

    #[test]
    fn test_wrap_column_then_row() {
        let grid = AtlasGrid::new(2, 2).unwrap();
        assert_eq!(CellIndex::new(2, 0).wrapped(&grid), CellIndex::new(0, 1));
        // both bounds crossed in one call
        assert_eq!(CellIndex::new(2, 1).wrapped(&grid), CellIndex::new(0, 0));
        assert_eq!(CellIndex::new(1, 1).wrapped(&grid), CellIndex::new(1, 1));
    }

    #[test]
    fn test_scroll_wraps_to_zero() {
        let mut s = ScrollState {
            enabled: true,
            speed: Vec2::new(0.5, 0.0),
            offset: Vec2::ZERO,
        };
        s.advance();
        assert!(approx_eq(s.offset.x, 0.5));
        s.advance();
        assert_eq!(s.offset.x, 0.0);
    }

    #[test]
    fn test_scroll_uv_is_shifted_unit_window() {
        let s = ScrollState {
            enabled: true,
            speed: Vec2::ZERO,
            offset: Vec2::new(0.25, 0.5),
        };
        let expected = UvRect::from_bounds(0.25, 0.5, 1.25, 1.5);
        assert!(uv_approx_eq(&s.uv(), &expected));
    }

    #[test]
    fn test_state_rejects_zero_grid_and_hold() {
        assert!(AtlasFrameState::animated(0, 1, 1).is_err());
        assert_eq!(
            AtlasFrameState::animated(1, 1, 0),
            Err(SpriteError::ZeroFrameHold)
        );
    }

    #[test]
    fn test_set_grid_error_keeps_previous_grid() {
        let mut state = AtlasFrameState::animated(4, 1, 1).unwrap();
        assert!(state.set_grid(0, 1).is_err());
        assert_eq!(state.grid(), AtlasGrid::new(4, 1).unwrap());
        assert!(state.set_frame_hold(0).is_err());
        assert_eq!(state.frame_hold_ticks(), 1);
    }

    #[test]
    fn test_default_state() {
        let state = AtlasFrameState::default();
        assert!(!state.animation_enabled);
        assert!(!state.scroll.enabled);
        assert_eq!(state.frame_hold_ticks(), DEFAULT_FRAME_HOLD_TICKS);
        assert!(uv_approx_eq(&state.uv_rect(), &UvRect::FULL));
    }

    #[test]
    fn test_uv_rect_prefers_animated_cell() {
        let mut state = AtlasFrameState::animated(4, 1, 1).unwrap();
        state.current_cell = CellIndex::new(2, 0);
        state.scroll.enabled = true;
        state.scroll.offset = Vec2::new(0.5, 0.0);
        let cell = UvRect::from_bounds(0.5, 0.0, 0.75, 1.0);
        assert!(uv_approx_eq(&state.uv_rect(), &cell));

        state.animation_enabled = false;
        let window = UvRect::from_bounds(0.5, 0.0, 1.5, 1.0);
        assert!(uv_approx_eq(&state.uv_rect(), &window));
    }
}
