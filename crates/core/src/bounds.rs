//! Axis-aligned measured bounds.
//!
//! A [`Bounding`] describes a node's measured visual extent in object space
//! (meters). It is the unit of change detection for the re-layout loop:
//! exact equality is never used to gate layout, only [`Bounding::equal_inexact`],
//! so floating-point noise in measurement does not cause re-layout thrashing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Epsilon for [`Bounding::equal_inexact`] comparisons.
pub const BOUNDS_EPSILON: f32 = 1e-5;

/// An axis-aligned rectangle `{left, bottom, right, top}` in object space.
///
/// Well-formed measurements satisfy `right >= left` and `top >= bottom`, but
/// this is not enforced on construction; a transiently malformed value yields
/// a negative [`size`](Bounding::size) which callers must tolerate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounding {
    /// Left edge.
    pub left: f32,
    /// Bottom edge.
    pub bottom: f32,
    /// Right edge.
    pub right: f32,
    /// Top edge.
    pub top: f32,
}

impl Bounding {
    /// The empty bounds at the origin.
    pub const ZERO: Self = Self {
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
        top: 0.0,
    };

    /// Create bounds from the four edges.
    pub fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Create bounds from a center point and a size.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            left: center.x - half.x,
            bottom: center.y - half.y,
            right: center.x + half.x,
            top: center.y + half.y,
        }
    }

    /// Width and height, `(right - left, top - bottom)`.
    ///
    /// May be negative for malformed inputs.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.right - self.left, self.top - self.bottom)
    }

    /// Geometric center of the rectangle.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.bottom + self.top) * 0.5,
        )
    }

    /// Return a copy moved by `offset`. Pure; does not mutate.
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            left: self.left + offset.x,
            bottom: self.bottom + offset.y,
            right: self.right + offset.x,
            top: self.top + offset.y,
        }
    }

    /// Return a copy with each edge scaled by `factor` about the origin.
    pub fn scaled(&self, factor: Vec2) -> Self {
        Self {
            left: self.left * factor.x,
            bottom: self.bottom * factor.y,
            right: self.right * factor.x,
            top: self.top * factor.y,
        }
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            left: self.left.min(other.left),
            bottom: self.bottom.min(other.bottom),
            right: self.right.max(other.right),
            top: self.top.max(other.top),
        }
    }

    /// Fuzzy equality within [`BOUNDS_EPSILON`] on all four edges.
    ///
    /// Used exclusively to gate re-layout; correctness-critical comparisons
    /// use exact equality.
    pub fn equal_inexact(&self, other: &Self) -> bool {
        (self.left - other.left).abs() < BOUNDS_EPSILON
            && (self.bottom - other.bottom).abs() < BOUNDS_EPSILON
            && (self.right - other.right).abs() < BOUNDS_EPSILON
            && (self.top - other.top).abs() < BOUNDS_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_and_center() {
        let bounds = Bounding::new(-1.0, -0.5, 1.0, 0.5);
        assert_eq!(bounds.size(), Vec2::new(2.0, 1.0));
        assert_eq!(bounds.center(), Vec2::ZERO);
    }

    #[test]
    fn test_malformed_size_is_negative() {
        let bounds = Bounding::new(1.0, 0.0, -1.0, 0.0);
        assert_eq!(bounds.size().x, -2.0);
    }

    #[test]
    fn test_translate_is_pure() {
        let bounds = Bounding::new(0.0, 0.0, 1.0, 1.0);
        let moved = bounds.translate(Vec2::new(0.5, -0.5));
        assert_eq!(moved, Bounding::new(0.5, -0.5, 1.5, 0.5));
        assert_eq!(bounds, Bounding::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_union() {
        let a = Bounding::new(0.0, 0.0, 1.0, 1.0);
        let b = Bounding::new(-0.5, 0.5, 0.5, 2.0);
        assert_eq!(a.union(&b), Bounding::new(-0.5, 0.0, 1.0, 2.0));
    }

    #[test]
    fn test_equal_inexact_within_epsilon() {
        let a = Bounding::new(0.0, 0.0, 1.0, 1.0);
        let b = Bounding::new(0.0, 0.0, 1.000001, 1.0);
        assert!(a.equal_inexact(&b));
    }

    #[test]
    fn test_equal_inexact_beyond_epsilon() {
        let a = Bounding::new(0.0, 0.0, 1.0, 1.0);
        let b = Bounding::new(0.0, 0.0, 1.01, 1.0);
        assert!(!a.equal_inexact(&b));
    }

    #[test]
    fn test_from_center_size_round_trips() {
        let bounds = Bounding::from_center_size(Vec2::new(0.25, -0.25), Vec2::new(1.0, 0.5));
        assert_eq!(bounds.center(), Vec2::new(0.25, -0.25));
        assert_eq!(bounds.size(), Vec2::new(1.0, 0.5));
    }
}
