//! Atlas framing system.
//!
//! [`tick`] advances one sprite's [`AtlasFrameState`] by one tick and returns
//! the UV rectangle to draw with. It runs two stages in a fixed order:
//!
//! 1. scrolling, when `scroll.enabled`
//! 2. frame cycling, when `animation_enabled`
//!
//! When both are enabled both advance, and the animated cell is the UV
//! rectangle returned (the later stage wins). When neither is enabled the
//! state is left alone and the current frame is returned.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::atlasframe::{AtlasFrameState, FrameUv, UvRect};

/// Advance the sprite sheet by one tick and return the frame shown this tick.
///
/// The cell is wrapped first (end of row, then end of sheet), the frame is
/// taken, and only then does the hold timer run. A column advance made here
/// is wrapped at the start of the next call.
fn advance_frames(state: &mut AtlasFrameState) -> UvRect {
    let grid = state.grid();
    state.current_cell = state.current_cell.wrapped(&grid);
    let uv = grid.cell_uv(state.current_cell);

    state.elapsed_ticks += 1;
    if state.elapsed_ticks >= state.frame_hold_ticks() {
        state.current_cell.col += 1;
        state.elapsed_ticks = 0;
    }
    uv
}

/// Move the scroll window by one tick and return it.
fn advance_scroll(state: &mut AtlasFrameState) -> UvRect {
    state.scroll.advance();
    state.scroll.uv()
}

/// Advance `state` by one tick and return the UV rectangle to draw.
pub fn tick(state: &mut AtlasFrameState) -> UvRect {
    let scroll_uv = state.scroll.enabled.then(|| advance_scroll(state));
    let frame_uv = state.animation_enabled.then(|| advance_frames(state));
    frame_uv
        .or(scroll_uv)
        .unwrap_or_else(|| state.uv_rect())
}

/// Tick every [`AtlasFrameState`] and publish the result in [`FrameUv`].
pub fn atlas_frame_system(mut query: Query<(Entity, &mut AtlasFrameState, &mut FrameUv)>) {
    for (entity, mut state, mut frame_uv) in query.iter_mut() {
        let before = state.displayed_cell();
        frame_uv.uv = tick(&mut state);
        if state.animation_enabled && state.displayed_cell() != before {
            debug!("{:?} frame -> {:?}", entity, state.displayed_cell());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::atlasframe::CellIndex;
    use glam::Vec2;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Column shown by a UV rect on a grid with `columns` columns.
    fn shown_col(uv: &UvRect, columns: u32) -> u32 {
        (uv.top_left().x * columns as f32).round() as u32
    }

    fn shown_row(uv: &UvRect, rows: u32) -> u32 {
        (uv.top_left().y * rows as f32).round() as u32
    }

    #[test]
    fn test_four_columns_cycle_every_tick() {
        let mut state = AtlasFrameState::animated(4, 1, 1).unwrap();
        let cols: Vec<u32> = (0..9).map(|_| shown_col(&tick(&mut state), 4)).collect();
        assert_eq!(cols, vec![0, 1, 2, 3, 0, 1, 2, 3, 0]);
        assert_eq!(state.displayed_cell().row, 0);
    }

    #[test]
    fn test_frame_hold_repeats_frames() {
        let mut state = AtlasFrameState::animated(3, 1, 2).unwrap();
        let cols: Vec<u32> = (0..7).map(|_| shown_col(&tick(&mut state), 3)).collect();
        assert_eq!(cols, vec![0, 0, 1, 1, 2, 2, 0]);
    }

    #[test]
    fn test_rows_advance_after_last_column() {
        let mut state = AtlasFrameState::animated(2, 2, 1).unwrap();
        let cells: Vec<(u32, u32)> = (0..5)
            .map(|_| {
                let uv = tick(&mut state);
                (shown_col(&uv, 2), shown_row(&uv, 2))
            })
            .collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 0)]);
    }

    #[test]
    fn test_wrap_is_detected_on_the_next_tick() {
        let mut state = AtlasFrameState::animated(2, 1, 1).unwrap();
        tick(&mut state);
        tick(&mut state);
        // advanced past the last column, not yet wrapped
        assert_eq!(state.current_cell, CellIndex::new(2, 0));
        assert_eq!(state.displayed_cell(), CellIndex::new(0, 0));
        tick(&mut state);
        assert_eq!(state.current_cell, CellIndex::new(1, 0));
    }

    #[test]
    fn test_frame_uv_is_cell_rect() {
        let mut state = AtlasFrameState::animated(4, 2, 1).unwrap();
        state.current_cell = CellIndex::new(3, 1);
        let uv = tick(&mut state);
        assert_eq!(uv, UvRect::from_bounds(0.75, 0.5, 1.0, 1.0));
    }

    #[test]
    fn test_scroll_wraps_on_crossing_one() {
        let mut state = AtlasFrameState::scrolling(Vec2::new(0.3, 0.0));
        tick(&mut state);
        tick(&mut state);
        tick(&mut state);
        assert!(approx_eq(state.scroll.offset.x, 0.9));
        tick(&mut state);
        assert_eq!(state.scroll.offset.x, 0.0);
        assert_eq!(state.scroll.offset.y, 0.0);
    }

    #[test]
    fn test_scroll_uv_follows_offset() {
        let mut state = AtlasFrameState::scrolling(Vec2::new(0.25, 0.5));
        let uv = tick(&mut state);
        assert_eq!(uv, UvRect::from_bounds(0.25, 0.5, 1.25, 1.5));
    }

    #[test]
    fn test_animation_overrides_scroll_but_both_advance() {
        let mut state = AtlasFrameState::animated(4, 1, 1).unwrap();
        state.scroll.enabled = true;
        state.scroll.speed = Vec2::new(0.25, 0.0);
        let uv = tick(&mut state);
        assert_eq!(uv, UvRect::from_bounds(0.0, 0.0, 0.25, 1.0));
        assert_eq!(state.current_cell, CellIndex::new(1, 0));
        assert_eq!(state.scroll.offset, Vec2::new(0.25, 0.0));

        let uv = tick(&mut state);
        assert_eq!(uv, UvRect::from_bounds(0.25, 0.0, 0.5, 1.0));
        assert_eq!(state.scroll.offset, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_scroll_shows_once_animation_stops() {
        let mut state = AtlasFrameState::animated(4, 1, 1).unwrap();
        state.scroll.enabled = true;
        state.scroll.speed = Vec2::new(0.25, 0.0);
        tick(&mut state);
        state.animation_enabled = false;
        let uv = tick(&mut state);
        assert_eq!(uv, UvRect::from_bounds(0.5, 0.0, 1.5, 1.0));
        assert_eq!(state.uv_rect(), uv);
    }

    #[test]
    fn test_idle_state_is_untouched() {
        let mut state = AtlasFrameState::animated(4, 1, 1).unwrap();
        state.animation_enabled = false;
        state.current_cell = CellIndex::new(2, 0);
        let before = state.clone();
        let uv = tick(&mut state);
        assert_eq!(state, before);
        assert_eq!(uv, UvRect::from_bounds(0.5, 0.0, 0.75, 1.0));
    }

    #[test]
    fn test_system_writes_frame_uv() {
        let mut world = World::new();
        let state = AtlasFrameState::animated(2, 1, 1).unwrap();
        let e = world.spawn((state, FrameUv::default())).id();

        let mut schedule = Schedule::default();
        schedule.add_systems(atlas_frame_system);
        schedule.run(&mut world);
        assert_eq!(
            world.get::<FrameUv>(e).unwrap().uv,
            UvRect::from_bounds(0.0, 0.0, 0.5, 1.0)
        );
        schedule.run(&mut world);
        assert_eq!(
            world.get::<FrameUv>(e).unwrap().uv,
            UvRect::from_bounds(0.5, 0.0, 1.0, 1.0)
        );
    }
}
