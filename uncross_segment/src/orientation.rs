// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::point::{Coord, Point};

/// Turn direction of an ordered triple of points.
///
/// Coordinates follow the screen convention (y grows downwards), so a positive
/// cross product reads as a clockwise turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `p1 -> p2 -> p3` turns clockwise on screen.
    Clockwise,
    /// `p1 -> p2 -> p3` turns counter-clockwise on screen.
    CounterClockwise,
    /// The three points lie on one line.
    Collinear,
}

impl Orientation {
    /// Exact orientation of `p1 -> p2 -> p3`.
    #[inline]
    pub fn of<T: Coord>(p1: Point<T>, p2: Point<T>, p3: Point<T>) -> Self {
        Self::with_tolerance(p1, p2, p3, T::Wide::default())
    }

    /// Orientation of `p1 -> p2 -> p3`, treating `|cross| <= tolerance` as collinear.
    ///
    /// `tolerance` must be non-negative. A zero tolerance is the exact test.
    #[inline]
    pub fn with_tolerance<T: Coord>(
        p1: Point<T>,
        p2: Point<T>,
        p3: Point<T>,
        tolerance: T::Wide,
    ) -> Self {
        let value = cross(p1, p2, p3);
        if value > tolerance {
            Self::Clockwise
        } else if value < T::Wide::default() - tolerance {
            Self::CounterClockwise
        } else {
            Self::Collinear
        }
    }
}

/// Twice the signed area of the triangle `p1, p2, p3`.
///
/// This is the shoelace sum
/// `(p1.x*p2.y + p2.x*p3.y + p3.x*p1.y) - (p2.x*p1.y + p3.x*p2.y + p1.x*p3.y)`,
/// evaluated in the translated form `(p2 - p1) x (p3 - p1)`, which is the same
/// value with smaller intermediates.
#[inline]
pub fn cross<T: Coord>(p1: Point<T>, p2: Point<T>, p3: Point<T>) -> T::Wide {
    let (x1, y1) = (p1.x.widen(), p1.y.widen());
    let dx2 = p2.x.widen() - x1;
    let dy2 = p2.y.widen() - y1;
    let dx3 = p3.x.widen() - x1;
    let dy3 = p3.y.widen() - y1;
    dx2 * dy3 - dy2 * dx3
}
