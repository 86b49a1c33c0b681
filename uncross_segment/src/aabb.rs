// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes.

use crate::point::{Coord, Point, max_of, min_of};

/// Axis-aligned bounding box with inclusive bounds.
///
/// A box built from a single point has zero width and height but still
/// contains that point, so degenerate segments keep a meaningful box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Aabb2D<T> {
    /// Minimum x (left).
    pub min_x: T,
    /// Minimum y (top).
    pub min_y: T,
    /// Maximum x (right).
    pub max_x: T,
    /// Maximum y (bottom).
    pub max_y: T,
}

impl<T: Coord> Aabb2D<T> {
    /// Creates a box from raw bounds. Callers must keep `min <= max` on both axes.
    #[inline]
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box containing both points.
    #[inline]
    pub fn from_points(a: Point<T>, b: Point<T>) -> Self {
        Self {
            min_x: min_of(a.x, b.x),
            min_y: min_of(a.y, b.y),
            max_x: max_of(a.x, b.x),
            max_y: max_of(a.y, b.y),
        }
    }

    /// Returns `true` if the boxes share at least one point.
    ///
    /// Touching edges count as overlap. This is the conservative pre-filter
    /// used before the exact segment test: it never rejects a pair that could
    /// still intersect.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }

    /// Returns `true` if `p` lies inside the box or on its boundary.
    #[inline]
    pub fn contains_point(&self, p: Point<T>) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// Smallest box containing both boxes.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: min_of(self.min_x, other.min_x),
            min_y: min_of(self.min_y, other.min_y),
            max_x: max_of(self.max_x, other.max_x),
            max_y: max_of(self.max_y, other.max_y),
        }
    }
}

impl Aabb2D<f64> {
    /// Converts to a `kurbo::Rect` for rendering or damage tracking.
    #[inline]
    pub fn to_rect(&self) -> kurbo::Rect {
        kurbo::Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}
