// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar trait and the 2D point value type.

use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

/// Scalar coordinate type usable by the intersection engine.
///
/// Orientation tests multiply coordinate differences, so every scalar names a
/// [`Coord::Wide`] type that the products are evaluated in. `i32` widens to
/// `i128`: differences of any two `i32` values need 33 bits and their
/// products 66, so cross products and squared lengths are exact over the
/// whole `i32` range.
///
/// Float inputs are assumed to be finite (no NaNs).
pub trait Coord: Copy + PartialOrd + Debug {
    /// Intermediate type for cross products and squared lengths.
    ///
    /// `Default::default()` must be the additive zero.
    type Wide: Copy
        + PartialOrd
        + Debug
        + Default
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Mul<Output = Self::Wide>;

    /// Losslessly converts into the wide type.
    fn widen(self) -> Self::Wide;
}

macro_rules! impl_coord {
    ($($t:ty => $wide:ty),* $(,)?) => {
        $(
            impl Coord for $t {
                type Wide = $wide;

                #[inline]
                fn widen(self) -> $wide {
                    <$wide>::from(self)
                }
            }
        )*
    };
}

impl_coord!(i32 => i128, f32 => f64, f64 => f64);

/// Returns the smaller of two partially ordered values, preferring `a` on ties.
#[inline]
pub(crate) fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// Returns the larger of two partially ordered values, preferring `a` on ties.
#[inline]
pub(crate) fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// A 2D coordinate value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate (screen convention: grows downwards).
    pub y: T,
}

impl<T> Point<T> {
    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl From<kurbo::Point> for Point<f64> {
    #[inline]
    fn from(p: kurbo::Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point<f64>> for kurbo::Point {
    #[inline]
    fn from(p: Point<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}
