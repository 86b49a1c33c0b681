// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Straight segments and the pairwise intersection test.
//!
//! [`Segment::intersects`] is the one primitive the rest of the crate builds
//! on. It runs in two stages:
//!
//! 1. A bounding-box rejection: if the two segments' [`Aabb2D`]s do not
//!    overlap, the pair cannot meet and the test returns
//!    [`IntersectionResult::NoIntersection`] without any multiplication.
//! 2. Four orientation tests (see [`Orientation`]) that classify the pair.
//!
//! The second stage is exact for integer coordinates. For floats, an optional
//! [`IntersectParams::collinear_tolerance`] widens the band that counts as
//! collinear.

use crate::aabb::Aabb2D;
use crate::orientation::Orientation;
use crate::point::{Coord, Point};

/// Outcome of testing two segments against each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntersectionResult {
    /// The segments cross at a single point interior to both.
    General,
    /// The segments lie on a shared line and each has an endpoint on the other.
    Collinear,
    /// An endpoint of one segment touches the other segment.
    PointInSegment,
    /// The segments share no point.
    NoIntersection,
}

impl IntersectionResult {
    /// Returns `true` for every outcome except [`IntersectionResult::NoIntersection`].
    #[inline]
    pub fn is_hit(self) -> bool {
        self != Self::NoIntersection
    }
}

/// Parameters for [`Segment::intersects_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectParams<T: Coord> {
    /// Cross products with `|value| <= collinear_tolerance` count as collinear.
    ///
    /// Zero (the default) is the exact test. Only useful for float
    /// coordinates, where a point computed to lie on a line may miss it by a
    /// rounding error. Must be non-negative.
    pub collinear_tolerance: T::Wide,
}

impl<T: Coord> Default for IntersectParams<T> {
    fn default() -> Self {
        Self {
            collinear_tolerance: T::Wide::default(),
        }
    }
}

impl<T: Coord> IntersectParams<T> {
    /// Parameters with the given collinear tolerance.
    #[inline]
    pub fn with_tolerance(collinear_tolerance: T::Wide) -> Self {
        Self {
            collinear_tolerance,
        }
    }
}

/// A straight segment between two points.
///
/// Zero-length segments (`start == stop`) are valid values; [`crate::Polyline`]
/// refuses to store them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Segment<T> {
    /// First endpoint.
    pub start: Point<T>,
    /// Second endpoint.
    pub stop: Point<T>,
}

impl<T: Coord> Segment<T> {
    /// Creates a segment from its endpoints.
    #[inline]
    pub fn new(start: impl Into<Point<T>>, stop: impl Into<Point<T>>) -> Self {
        Self {
            start: start.into(),
            stop: stop.into(),
        }
    }

    /// Returns `true` if both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.stop
    }

    /// The segment with its endpoints swapped.
    #[inline]
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.stop,
            stop: self.start,
        }
    }

    /// Bounding box of the two endpoints.
    #[inline]
    pub fn bounds(&self) -> Aabb2D<T> {
        Aabb2D::from_points(self.start, self.stop)
    }

    /// Squared Euclidean length, evaluated in the wide type.
    #[inline]
    pub fn length_squared(&self) -> T::Wide {
        let dx = self.stop.x.widen() - self.start.x.widen();
        let dy = self.stop.y.widen() - self.start.y.widen();
        dx * dx + dy * dy
    }

    /// Returns `true` if `p` lies within the segment's bounding span on both axes.
    ///
    /// Only meaningful for points already known to be collinear with the segment.
    #[inline]
    pub fn spans(&self, p: Point<T>) -> bool {
        self.bounds().contains_point(p)
    }

    /// Classifies how `self` and `other` meet, using exact orientation tests.
    ///
    /// The result is symmetric: `a.intersects(&b) == b.intersects(&a)`.
    ///
    /// ```
    /// use uncross_segment::{IntersectionResult, Segment};
    ///
    /// let a = Segment::new((0, 0), (10, 10));
    /// let b = Segment::new((0, 10), (10, 0));
    /// assert_eq!(a.intersects(&b), IntersectionResult::General);
    ///
    /// let c = Segment::new((10, 10), (20, 0));
    /// assert_eq!(a.intersects(&c), IntersectionResult::PointInSegment);
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> IntersectionResult {
        self.intersects_with(other, &IntersectParams::default())
    }

    /// Like [`Segment::intersects`], with explicit parameters.
    pub fn intersects_with(
        &self,
        other: &Self,
        params: &IntersectParams<T>,
    ) -> IntersectionResult {
        self.classify(other, params).0
    }

    /// Runs the full test, also reporting whether the bounding boxes rejected the pair.
    pub(crate) fn classify(
        &self,
        other: &Self,
        params: &IntersectParams<T>,
    ) -> (IntersectionResult, bool) {
        let ours = self.bounds();
        let theirs = other.bounds();
        if !ours.overlaps(&theirs) {
            return (IntersectionResult::NoIntersection, true);
        }

        let tol = params.collinear_tolerance;
        let o1 = Orientation::with_tolerance(self.start, self.stop, other.start, tol);
        let o2 = Orientation::with_tolerance(self.start, self.stop, other.stop, tol);
        let o3 = Orientation::with_tolerance(other.start, other.stop, self.start, tol);
        let o4 = Orientation::with_tolerance(other.start, other.stop, self.stop, tol);

        let orientations = [o1, o2, o3, o4];
        let touching = orientations.contains(&Orientation::Collinear);
        if !touching && o1 != o2 && o3 != o4 {
            return (IntersectionResult::General, false);
        }

        // An endpoint on the other segment's line only counts when it also
        // falls within that segment's span.
        let on_ours = |o: Orientation, p: Point<T>| {
            o == Orientation::Collinear && ours.contains_point(p)
        };
        let on_theirs = |o: Orientation, p: Point<T>| {
            o == Orientation::Collinear && theirs.contains_point(p)
        };
        let other_touches_self = on_ours(o1, other.start) || on_ours(o2, other.stop);
        let self_touches_other = on_theirs(o3, self.start) || on_theirs(o4, self.stop);

        // Both flags on a shared line is an overlap. Both flags off the line
        // is two segments meeting at a common endpoint.
        let result = match (other_touches_self, self_touches_other) {
            (true, true) if orientations.iter().all(|o| *o == Orientation::Collinear) => {
                IntersectionResult::Collinear
            }
            (false, false) => IntersectionResult::NoIntersection,
            _ => IntersectionResult::PointInSegment,
        };
        (result, false)
    }
}

impl Segment<f64> {
    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        kurbo::Point::from(self.start).distance(self.stop.into())
    }

    /// Converts to a `kurbo::Line` for rendering.
    #[inline]
    pub fn to_line(&self) -> kurbo::Line {
        kurbo::Line::new(kurbo::Point::from(self.start), kurbo::Point::from(self.stop))
    }
}

impl From<kurbo::Line> for Segment<f64> {
    #[inline]
    fn from(line: kurbo::Line) -> Self {
        Self {
            start: line.p0.into(),
            stop: line.p1.into(),
        }
    }
}
