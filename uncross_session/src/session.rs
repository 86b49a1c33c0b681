// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing session: one store plus one in-progress stroke, driven by pointer calls.
//!
//! ## Usage
//!
//! 1) Call [`DrawingSession::begin`] on pointer down.
//! 2) Call [`DrawingSession::move_to`] on every pointer move. Render
//!    [`DrawingSession::preview`] as the hypothetical segment, in a warning
//!    color when [`DrawingSession::preview_collides`] is `true`.
//! 3) Call [`DrawingSession::release`] on pointer up. The stroke is committed
//!    if it never collided and discarded otherwise.
//!
//! ## Minimal example
//!
//! ```
//! use uncross_session::{DrawingSession, MoveOutcome, ReleaseOutcome};
//!
//! let mut session = DrawingSession::<i32>::new();
//!
//! session.begin((0, 0));
//! assert_eq!(session.move_to((10, 0)), MoveOutcome::Extended);
//! assert_eq!(session.move_to((10, 10)), MoveOutcome::Extended);
//! assert_eq!(session.release((10, 10)), ReleaseOutcome::Committed { segments: 2 });
//!
//! // A stroke crossing the first one is discarded.
//! session.begin((5, -5));
//! assert_eq!(session.move_to((5, 5)), MoveOutcome::Collided);
//! assert_eq!(session.release((5, 5)), ReleaseOutcome::Discarded);
//!
//! assert_eq!(session.store().polyline_count(), 1);
//! ```

use uncross_segment::{
    Coord, GeometryStore, IntersectParams, Point, Polyline, QueryStats, Segment,
};

use crate::scatter::{Rng, ScatterConfig};

/// How pointer samples turn into segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StrokeMode {
    /// Every accepted move sample appends a segment from the previous sample.
    #[default]
    Polyline,
    /// A single straight segment from the press point to the release point.
    ///
    /// Moves only update the preview.
    Line,
}

/// Session configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig<T: Coord> {
    /// How pointer samples turn into segments.
    pub mode: StrokeMode,
    /// Samples closer than this to the last accepted point are coalesced.
    ///
    /// In [`StrokeMode::Line`] a release closer than this to the press point
    /// keeps the stroke alive, so the line can be finished with a second
    /// click. `None` only coalesces exact repeats.
    pub min_segment_length: Option<T>,
    /// Also reject segments that hit the stroke's own earlier segments.
    ///
    /// The segment immediately before a candidate always shares its joint
    /// with it and is not tested.
    pub check_self: bool,
    /// Parameters for every intersection test in the session.
    pub params: IntersectParams<T>,
}

impl<T: Coord> Default for SessionConfig<T> {
    fn default() -> Self {
        Self {
            mode: StrokeMode::default(),
            min_segment_length: None,
            check_self: false,
            params: IntersectParams::default(),
        }
    }
}

/// Where the in-progress stroke stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeState<T> {
    /// No stroke is being drawn.
    Idle,
    /// A stroke is being drawn and has not collided.
    Drawing {
        /// The last accepted point (the press point in [`StrokeMode::Line`]).
        anchor: Point<T>,
        /// The latest pointer position.
        cursor: Point<T>,
    },
    /// The stroke hit existing geometry and will be discarded on release.
    Collided {
        /// The last accepted point before the collision.
        anchor: Point<T>,
        /// The latest pointer position.
        cursor: Point<T>,
    },
}

/// Result of [`DrawingSession::move_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No stroke is active.
    Idle,
    /// The preview moved; nothing was appended ([`StrokeMode::Line`]).
    Previewed,
    /// The sample was too close to the last accepted point.
    Coalesced,
    /// A segment was appended to the stroke.
    Extended,
    /// The stroke collided, now or earlier.
    Collided,
}

/// Result of [`DrawingSession::release`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No stroke was active.
    Idle,
    /// The stroke was committed to the store.
    Committed {
        /// Number of segments in the committed polyline.
        segments: usize,
    },
    /// The stroke collided and was thrown away.
    Discarded,
    /// The stroke is still too short to commit and stays active.
    TooShort,
}

/// Counters for a session's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Polylines committed (strokes and scattered segments).
    pub committed: u64,
    /// Strokes discarded after a collision.
    pub discarded: u64,
    /// Store queries issued by the session.
    pub queries: QueryStats,
}

/// Owner of a [`GeometryStore`] and the one stroke being drawn into it.
///
/// The in-progress stroke is never visible to the store until it is
/// committed, and it is committed only if every one of its segments was
/// checked against the store first.
#[derive(Clone, Debug)]
pub struct DrawingSession<T: Coord> {
    config: SessionConfig<T>,
    store: GeometryStore<T>,
    stroke: Polyline<T>,
    state: StrokeState<T>,
    stats: SessionStats,
}

impl<T: Coord> Default for DrawingSession<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coord> DrawingSession<T> {
    /// Creates a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session with `config`.
    #[must_use]
    pub fn with_config(config: SessionConfig<T>) -> Self {
        Self {
            config,
            store: GeometryStore::with_params(config.params),
            stroke: Polyline::new(),
            state: StrokeState::Idle,
            stats: SessionStats::default(),
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig<T> {
        &self.config
    }

    /// Committed geometry.
    pub fn store(&self) -> &GeometryStore<T> {
        &self.store
    }

    /// Segments accepted so far for the stroke being drawn.
    pub fn in_progress(&self) -> &Polyline<T> {
        &self.stroke
    }

    /// Current stroke state.
    pub fn state(&self) -> StrokeState<T> {
        self.state
    }

    /// Returns `true` while a stroke is active, collided or not.
    pub fn is_drawing(&self) -> bool {
        !matches!(self.state, StrokeState::Idle)
    }

    /// Lifetime counters.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Starts a stroke at `at`. Ignored (returns `false`) while a stroke is active.
    pub fn begin(&mut self, at: impl Into<Point<T>>) -> bool {
        if self.is_drawing() {
            return false;
        }
        let at = at.into();
        self.stroke = Polyline::new();
        self.state = StrokeState::Drawing {
            anchor: at,
            cursor: at,
        };
        true
    }

    /// Feeds a pointer move.
    pub fn move_to(&mut self, to: impl Into<Point<T>>) -> MoveOutcome {
        let cursor = to.into();
        let anchor = match self.state {
            StrokeState::Idle => return MoveOutcome::Idle,
            StrokeState::Collided { anchor, .. } => {
                self.state = StrokeState::Collided { anchor, cursor };
                return MoveOutcome::Collided;
            }
            StrokeState::Drawing { anchor, .. } => anchor,
        };

        if self.config.mode == StrokeMode::Line {
            self.state = StrokeState::Drawing { anchor, cursor };
            return MoveOutcome::Previewed;
        }

        let candidate = Segment {
            start: anchor,
            stop: cursor,
        };
        if self.is_short(&candidate) {
            self.state = StrokeState::Drawing { anchor, cursor };
            return MoveOutcome::Coalesced;
        }
        if self.check(&candidate) {
            self.state = StrokeState::Collided { anchor, cursor };
            return MoveOutcome::Collided;
        }
        self.stroke.extend(candidate);
        self.state = StrokeState::Drawing {
            anchor: cursor,
            cursor,
        };
        MoveOutcome::Extended
    }

    /// Feeds a pointer release, committing or discarding the stroke.
    pub fn release(&mut self, at: impl Into<Point<T>>) -> ReleaseOutcome {
        let cursor = at.into();
        let anchor = match self.state {
            StrokeState::Idle => return ReleaseOutcome::Idle,
            StrokeState::Collided { .. } => {
                self.discard();
                return ReleaseOutcome::Discarded;
            }
            StrokeState::Drawing { anchor, .. } => anchor,
        };

        let tail = Segment {
            start: anchor,
            stop: cursor,
        };
        if self.stroke.is_empty() && self.is_short(&tail) {
            self.state = StrokeState::Drawing { anchor, cursor };
            return ReleaseOutcome::TooShort;
        }
        if !tail.is_degenerate() {
            if self.check(&tail) {
                self.discard();
                return ReleaseOutcome::Discarded;
            }
            self.stroke.extend(tail);
        }

        let stroke = core::mem::replace(&mut self.stroke, Polyline::new());
        let segments = stroke.len();
        self.store.commit(stroke);
        self.stats.committed += 1;
        self.state = StrokeState::Idle;
        ReleaseOutcome::Committed { segments }
    }

    /// Abandons the active stroke without counting it as discarded.
    pub fn cancel(&mut self) {
        self.stroke = Polyline::new();
        self.state = StrokeState::Idle;
    }

    /// Abandons the active stroke and empties the store.
    pub fn clear(&mut self) {
        self.cancel();
        self.store.clear();
    }

    /// The hypothetical segment from the last accepted point to the pointer.
    pub fn preview(&self) -> Option<Segment<T>> {
        let (anchor, cursor) = match self.state {
            StrokeState::Idle => return None,
            StrokeState::Drawing { anchor, cursor } | StrokeState::Collided { anchor, cursor } => {
                (anchor, cursor)
            }
        };
        let segment = Segment {
            start: anchor,
            stop: cursor,
        };
        (!segment.is_degenerate()).then_some(segment)
    }

    /// Returns `true` if the stroke has collided or its preview would collide.
    pub fn preview_collides(&self) -> bool {
        match self.state {
            StrokeState::Idle => false,
            StrokeState::Collided { .. } => true,
            StrokeState::Drawing { .. } => self
                .preview()
                .is_some_and(|p| self.store.intersects_any(&p) || self.hits_own_stroke(&p)),
        }
    }

    /// Scatters random short segments into the store (see [`crate::scatter`]).
    ///
    /// Segments touching the active stroke are skipped as well, so the stroke
    /// can still be committed afterwards. Returns how many were committed.
    pub fn scatter(&mut self, rng: &mut Rng, config: &ScatterConfig) -> usize
    where
        T: From<i32>,
    {
        let mut committed = 0;
        for _ in 0..config.count {
            let candidate = config.sample(rng);
            if candidate.is_degenerate()
                || self
                    .store
                    .intersects_any_traced(&candidate, &mut self.stats.queries)
                || self.stroke.intersects_with(&candidate, &self.config.params)
            {
                continue;
            }
            self.store.commit(Polyline::from_iter([candidate]));
            committed += 1;
        }
        self.stats.committed += committed as u64;
        committed
    }

    fn is_short(&self, segment: &Segment<T>) -> bool {
        if segment.is_degenerate() {
            return true;
        }
        self.config.min_segment_length.is_some_and(|min| {
            let min = min.widen();
            segment.length_squared() < min * min
        })
    }

    fn check(&mut self, candidate: &Segment<T>) -> bool {
        self.store
            .intersects_any_traced(candidate, &mut self.stats.queries)
            || self.hits_own_stroke(candidate)
    }

    fn hits_own_stroke(&self, candidate: &Segment<T>) -> bool {
        if !self.config.check_self {
            return false;
        }
        let segments = self.stroke.segments();
        let earlier = segments.split_last().map_or(segments, |(_, rest)| rest);
        earlier
            .iter()
            .any(|s| candidate.intersects_with(s, &self.config.params).is_hit())
    }

    fn discard(&mut self) {
        self.stroke = Polyline::new();
        self.state = StrokeState::Idle;
        self.stats.discarded += 1;
    }
}
