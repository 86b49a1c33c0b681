// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observation hooks for store queries.
//!
//! The query paths do not log or time anything themselves. Embedders that want
//! to know how much work a query did (for example, to show "intersection calc
//! time" next to a segment counter, or to check how often the bounding-box
//! pre-filter pays off) pass a [`QueryTrace`] sink to
//! [`GeometryStore::intersects_any_traced`](crate::GeometryStore::intersects_any_traced).
//!
//! [`QueryStats`] is a small counting recorder. `()` is the no-op sink.

use crate::point::Coord;
use crate::segment::{IntersectionResult, Segment};

/// A callback sink for intersection queries.
pub trait QueryTrace<T: Coord> {
    /// Called once before `candidate` is tested against stored geometry.
    fn begin_query(&mut self, _candidate: &Segment<T>) {}

    /// Called for every stored segment the candidate was tested against.
    ///
    /// `pruned` is `true` when the bounding-box pre-filter rejected the pair
    /// before any orientation test ran.
    fn tested(
        &mut self,
        candidate: &Segment<T>,
        stored: &Segment<T>,
        result: IntersectionResult,
        pruned: bool,
    );

    /// Called once when the query finishes, with its answer.
    fn end_query(&mut self, _candidate: &Segment<T>, _hit: bool) {}
}

impl<T: Coord> QueryTrace<T> for () {
    #[inline]
    fn tested(&mut self, _: &Segment<T>, _: &Segment<T>, _: IntersectionResult, _: bool) {}
}

/// Counts queries, pairwise tests, and outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Number of finished queries.
    pub queries: u64,
    /// Queries that found an intersection.
    pub colliding_queries: u64,
    /// Pairwise segment tests performed.
    pub tests: u64,
    /// Tests rejected by the bounding-box pre-filter.
    pub pruned: u64,
    /// Tests that returned [`IntersectionResult::General`].
    pub general: u64,
    /// Tests that returned [`IntersectionResult::Collinear`].
    pub collinear: u64,
    /// Tests that returned [`IntersectionResult::PointInSegment`].
    pub point_in_segment: u64,
}

impl QueryStats {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all counters.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Total tests that found an intersection.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.general + self.collinear + self.point_in_segment
    }
}

impl<T: Coord> QueryTrace<T> for QueryStats {
    fn tested(
        &mut self,
        _candidate: &Segment<T>,
        _stored: &Segment<T>,
        result: IntersectionResult,
        pruned: bool,
    ) {
        self.tests += 1;
        if pruned {
            self.pruned += 1;
        }
        match result {
            IntersectionResult::General => self.general += 1,
            IntersectionResult::Collinear => self.collinear += 1,
            IntersectionResult::PointInSegment => self.point_in_segment += 1,
            IntersectionResult::NoIntersection => {}
        }
    }

    fn end_query(&mut self, _candidate: &Segment<T>, hit: bool) {
        self.queries += 1;
        if hit {
            self.colliding_queries += 1;
        }
    }
}
