// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::aabb::Aabb2D;
use crate::point::{Coord, Point};
use crate::segment::{IntersectParams, Segment};
use crate::trace::QueryTrace;

/// An ordered chain of segments, built one segment at a time.
///
/// Insertion order is drawing order. Consecutive segments are expected to
/// share endpoints (`segments[i].stop == segments[i + 1].start`) but this is
/// not enforced.
///
/// A polyline is either being built (receiving [`Polyline::extend`] calls) or
/// committed to a [`GeometryStore`](crate::GeometryStore), after which it is
/// only reachable through shared references and cannot change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polyline<T> {
    segments: Vec<Segment<T>>,
}

impl<T: Coord> Polyline<T> {
    /// Creates an empty polyline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Builds a chain through `points`, one segment per consecutive pair.
    ///
    /// Repeated points produce zero-length segments, which are dropped.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Point<T>>,
    {
        let mut out = Self::new();
        let mut prev: Option<Point<T>> = None;
        for p in points {
            let p = p.into();
            if let Some(start) = prev {
                out.extend(Segment { start, stop: p });
            }
            prev = Some(p);
        }
        out
    }

    /// Appends `segment`, silently dropping it if it has zero length.
    ///
    /// Returns `true` if the segment was stored.
    pub fn extend(&mut self, segment: Segment<T>) -> bool {
        if segment.is_degenerate() {
            return false;
        }
        self.segments.push(segment);
        true
    }

    /// Returns `true` if `candidate` touches or crosses any stored segment.
    pub fn intersects(&self, candidate: &Segment<T>) -> bool {
        self.intersects_with(candidate, &IntersectParams::default())
    }

    /// Like [`Polyline::intersects`], with explicit parameters.
    pub fn intersects_with(&self, candidate: &Segment<T>, params: &IntersectParams<T>) -> bool {
        self.segments
            .iter()
            .any(|s| candidate.intersects_with(s, params).is_hit())
    }

    /// Traced form of [`Polyline::intersects_with`]; reports each pairwise test.
    pub(crate) fn intersects_traced<R: QueryTrace<T>>(
        &self,
        candidate: &Segment<T>,
        params: &IntersectParams<T>,
        trace: &mut R,
    ) -> bool {
        self.segments.iter().any(|s| {
            let (result, pruned) = candidate.classify(s, params);
            trace.tested(candidate, s, result, pruned);
            result.is_hit()
        })
    }

    /// The stored segments in drawing order.
    #[inline]
    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    /// Iterates the stored segments in drawing order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Segment<T>> {
        self.segments.iter()
    }

    /// Number of stored segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if no segment has been stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The `stop` of the last stored segment, if any.
    #[inline]
    pub fn last_point(&self) -> Option<Point<T>> {
        self.segments.last().map(|s| s.stop)
    }

    /// Vertices of the chain: the first `start`, then every `stop`.
    ///
    /// For an unchained polyline this drops the `start` of every segment
    /// after the first; use [`Polyline::segments`] to render those faithfully.
    pub fn points(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.segments
            .first()
            .map(|s| s.start)
            .into_iter()
            .chain(self.segments.iter().map(|s| s.stop))
    }

    /// Bounding box of all stored segments, or `None` when empty.
    pub fn bounds(&self) -> Option<Aabb2D<T>> {
        let mut iter = self.segments.iter();
        let first = iter.next()?.bounds();
        Some(iter.fold(first, |acc, s| acc.union(&s.bounds())))
    }
}

impl<T: Coord> FromIterator<Segment<T>> for Polyline<T> {
    fn from_iter<I: IntoIterator<Item = Segment<T>>>(iter: I) -> Self {
        let mut out = Self::new();
        for s in iter {
            out.extend(s);
        }
        out
    }
}

impl<'a, T> IntoIterator for &'a Polyline<T> {
    type Item = &'a Segment<T>;
    type IntoIter = core::slice::Iter<'a, Segment<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
