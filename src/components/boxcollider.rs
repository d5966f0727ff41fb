use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Default inward shrink applied to each side of a sprite's collision box.
pub const DEFAULT_COLLISION_MARGIN: Vec2 = Vec2::new(0.05, 0.05);

/// Per-axis inward margin subtracted from every edge of the sprite's box
/// before overlap tests. Makes collisions a little forgiving.
#[derive(Debug, Clone, Copy, PartialEq, Component, Serialize, Deserialize)]
pub struct CollisionMargin {
    pub margin: Vec2,
}

impl CollisionMargin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            margin: Vec2::new(x, y),
        }
    }
}

impl Default for CollisionMargin {
    fn default() -> Self {
        Self {
            margin: DEFAULT_COLLISION_MARGIN,
        }
    }
}

/// Edges of a margin-shrunk box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxEdges {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BoxEdges {
    /// True when the margin swallowed the box on either axis.
    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.bottom > self.top
    }
}

/// Axis-aligned collision box derived from a sprite's position, scale and
/// margin. Built on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub center: Vec2,
    pub half_extent: Vec2,
    pub margin: Vec2,
}

impl BoundingBox {
    pub fn new(center: Vec2, half_extent: Vec2, margin: Vec2) -> Self {
        Self {
            center,
            half_extent,
            margin,
        }
    }

    /// Edges after shrinking by the margin. `top` is the larger y.
    ///
    /// A margin larger than the half-extent yields `left > right` (or
    /// `bottom > top`); such a box overlaps nothing on that axis.
    pub fn edges(&self) -> BoxEdges {
        BoxEdges {
            left: self.center.x - self.half_extent.x + self.margin.x,
            right: self.center.x + self.half_extent.x - self.margin.x,
            top: self.center.y + self.half_extent.y - self.margin.y,
            bottom: self.center.y - self.half_extent.y + self.margin.y,
        }
    }

    /// Strict overlap test against another box. Touching edges do not count,
    /// and an empty box overlaps nothing.
    pub fn overlaps(&self, other: &Self) -> bool {
        let a = self.edges();
        let b = other.edges();
        if a.is_empty() || b.is_empty() {
            return false;
        }
        a.left < b.right && a.right > b.left && a.top > b.bottom && a.bottom < b.top
    }

    /// Point containment, edges inclusive.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let e = self.edges();
        point.x >= e.left && point.x <= e.right && point.y >= e.bottom && point.y <= e.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box(x: f32, y: f32) -> BoundingBox {
        BoundingBox::new(Vec2::new(x, y), Vec2::ONE, Vec2::ZERO)
    }

    #[test]
    fn test_edges_apply_margin() {
        let b = BoundingBox::new(Vec2::new(1.0, 2.0), Vec2::new(0.5, 0.25), Vec2::new(0.125, 0.0625));
        let e = b.edges();
        assert_eq!(e.left, 0.625);
        assert_eq!(e.right, 1.375);
        assert_eq!(e.top, 2.1875);
        assert_eq!(e.bottom, 1.8125);
    }

    #[test]
    fn test_same_box_overlaps_itself() {
        let b = BoundingBox::new(Vec2::ZERO, Vec2::ONE, DEFAULT_COLLISION_MARGIN);
        assert!(b.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        assert!(!unit_box(0.0, 0.0).overlaps(&unit_box(2.0, 0.0)));
        assert!(!unit_box(0.0, 0.0).overlaps(&unit_box(0.0, -2.0)));
    }

    #[test]
    fn test_partial_overlap() {
        assert!(unit_box(0.0, 0.0).overlaps(&unit_box(1.5, 1.5)));
    }

    #[test]
    fn test_margin_separates_near_boxes() {
        let a = BoundingBox::new(Vec2::ZERO, Vec2::ONE, Vec2::new(0.25, 0.0));
        let b = BoundingBox::new(Vec2::new(1.75, 0.0), Vec2::ONE, Vec2::new(0.25, 0.0));
        assert!(unit_box(0.0, 0.0).overlaps(&unit_box(1.75, 0.0)));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_margin_larger_than_extent_is_empty() {
        let empty = BoundingBox::new(Vec2::ZERO, Vec2::ONE, Vec2::new(1.5, 0.0));
        assert!(empty.edges().left > empty.edges().right);
        assert!(!empty.overlaps(&unit_box(0.0, 0.0)));
        assert!(!empty.overlaps(&empty));
        // wide box covering the inverted interval on both sides
        let wide = BoundingBox::new(Vec2::ZERO, Vec2::new(5.0, 5.0), Vec2::ZERO);
        assert!(!empty.overlaps(&wide));
        assert!(!wide.overlaps(&empty));
    }

    #[test]
    fn test_empty_on_y_only() {
        let flat = BoundingBox::new(Vec2::ZERO, Vec2::new(1.0, 0.1), Vec2::new(0.0, 0.2));
        assert!(flat.edges().is_empty());
        assert!(!unit_box(0.0, 0.0).overlaps(&flat));
        assert!(!unit_box(0.0, 0.0).edges().is_empty());
    }

    #[test]
    fn test_contains_point() {
        let b = unit_box(0.0, 0.0);
        assert!(b.contains_point(Vec2::new(1.0, -1.0)));
        assert!(!b.contains_point(Vec2::new(1.01, 0.0)));
    }

    #[test]
    fn test_default_margin() {
        assert_eq!(CollisionMargin::default().margin, Vec2::new(0.05, 0.05));
    }
}
