// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use crate::point::Coord;
use crate::polyline::Polyline;
use crate::segment::{IntersectParams, IntersectionResult, Segment};
use crate::trace::QueryTrace;

/// Error returned by [`GeometryStore::try_commit`] when a polyline that was
/// about to be committed hits geometry already in the store.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CommitError<T> {
    /// Index of the offending segment within the rejected polyline.
    pub index: usize,
    /// The offending segment.
    pub segment: Segment<T>,
    /// The stored segment it hit.
    pub stored: Segment<T>,
    /// How the two segments meet.
    pub result: IntersectionResult,
}

impl<T: fmt::Debug> fmt::Debug for CommitError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CommitError {{ index: {}, segment: {:?}, stored: {:?}, result: {:?} }}",
            self.index, self.segment, self.stored, self.result
        )
    }
}

impl<T: fmt::Debug> fmt::Display for CommitError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "segment {} ({:?} -> {:?}) intersects stored segment ({:?} -> {:?}): {:?}",
            self.index,
            self.segment.start,
            self.segment.stop,
            self.stored.start,
            self.stored.stop,
            self.result
        )
    }
}

impl<T: fmt::Debug> core::error::Error for CommitError<T> {}

/// Owner of every committed polyline.
///
/// The store grows monotonically: polylines are appended by
/// [`GeometryStore::commit`] and only leave all at once through
/// [`GeometryStore::clear`]. Every segment in the store was checked against
/// everything committed before it, so stored geometry never crosses or
/// touches itself across polylines.
///
/// ```
/// use uncross_segment::{GeometryStore, Polyline, Segment};
///
/// let mut store = GeometryStore::new();
/// let mut line = Polyline::new();
/// line.extend(Segment::new((0, 0), (10, 10)));
/// assert!(!store.polyline_intersects_any(&line));
/// store.commit(line);
///
/// assert!(store.intersects_any(&Segment::new((0, 10), (10, 0))));
/// assert!(!store.intersects_any(&Segment::new((20, 20), (30, 30))));
/// assert_eq!(store.segment_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GeometryStore<T: Coord> {
    polylines: Vec<Polyline<T>>,
    segment_count: usize,
    params: IntersectParams<T>,
    revision: u64,
}

impl<T: Coord> Default for GeometryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coord> GeometryStore<T> {
    /// Creates an empty store using exact intersection tests.
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(IntersectParams::default())
    }

    /// Creates an empty store whose queries use `params`.
    #[must_use]
    pub fn with_params(params: IntersectParams<T>) -> Self {
        Self {
            polylines: Vec::new(),
            segment_count: 0,
            params,
            revision: 0,
        }
    }

    /// Parameters used by every query on this store.
    #[inline]
    pub fn params(&self) -> &IntersectParams<T> {
        &self.params
    }

    /// Returns `true` if `segment` touches or crosses any stored segment.
    ///
    /// Polylines are visited in commit order and the scan stops at the first hit.
    pub fn intersects_any(&self, segment: &Segment<T>) -> bool {
        self.polylines
            .iter()
            .any(|p| p.intersects_with(segment, &self.params))
    }

    /// Like [`GeometryStore::intersects_any`], reporting every pairwise test to `trace`.
    pub fn intersects_any_traced<R: QueryTrace<T>>(
        &self,
        segment: &Segment<T>,
        trace: &mut R,
    ) -> bool {
        trace.begin_query(segment);
        let hit = self
            .polylines
            .iter()
            .any(|p| p.intersects_traced(segment, &self.params, trace));
        trace.end_query(segment, hit);
        hit
    }

    /// Returns `true` if any segment of `polyline` touches or crosses stored geometry.
    pub fn polyline_intersects_any(&self, polyline: &Polyline<T>) -> bool {
        polyline.iter().any(|s| self.intersects_any(s))
    }

    /// Appends `polyline` without checking it.
    ///
    /// The caller must already have verified that none of its segments
    /// intersect the store; see [`GeometryStore::try_commit`] for a checked
    /// variant. Empty polylines are accepted and counted.
    pub fn commit(&mut self, polyline: Polyline<T>) {
        self.segment_count += polyline.len();
        self.polylines.push(polyline);
        self.revision += 1;
    }

    /// Re-validates `polyline` against the store, then commits it.
    ///
    /// On failure the polyline is not stored and the first offending pair
    /// (in polyline order, then commit order) is reported.
    pub fn try_commit(&mut self, polyline: Polyline<T>) -> Result<(), CommitError<T>> {
        if let Some(err) = self.first_collision(&polyline) {
            return Err(err);
        }
        self.commit(polyline);
        Ok(())
    }

    fn first_collision(&self, polyline: &Polyline<T>) -> Option<CommitError<T>> {
        for (index, segment) in polyline.iter().enumerate() {
            for stored in self.segments() {
                let result = segment.intersects_with(stored, &self.params);
                if result.is_hit() {
                    return Some(CommitError {
                        index,
                        segment: *segment,
                        stored: *stored,
                        result,
                    });
                }
            }
        }
        None
    }

    /// Removes every polyline.
    pub fn clear(&mut self) {
        if self.polylines.is_empty() {
            return;
        }
        self.polylines.clear();
        self.segment_count = 0;
        self.revision += 1;
    }

    /// The committed polylines in commit order.
    #[inline]
    pub fn polylines(&self) -> &[Polyline<T>] {
        &self.polylines
    }

    /// Every stored segment, polyline by polyline.
    pub fn segments(&self) -> impl Iterator<Item = &Segment<T>> + '_ {
        self.polylines.iter().flat_map(|p| p.iter())
    }

    /// Number of committed polylines.
    #[inline]
    pub fn polyline_count(&self) -> usize {
        self.polylines.len()
    }

    /// Total number of stored segments across all polylines.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Returns `true` if nothing has been committed since creation or the last clear.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    /// Monotonic counter bumped by every change to the stored geometry.
    ///
    /// Renderers can cache imagery of the store and redraw only when this
    /// value moves.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
