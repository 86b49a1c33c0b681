// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random short-segment generation for filling a store and stress-testing queries.
//!
//! Draws `count` short segments with random positions inside a
//! `width x height` canvas and commits every one that does not collide with
//! what is already stored. Generation is deterministic for a given seed.

use uncross_segment::{Coord, GeometryStore, Point, Polyline, QueryTrace, Segment};

/// Small xorshift generator. Not suitable for anything but test geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rng(u64);

impl Rng {
    /// Creates a generator from `seed`. A zero seed is replaced by a fixed non-zero one.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(if seed == 0 { 0x3C6E_F35F_4750_2932 } else { seed })
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform-ish value in `lo..hi`; returns `lo` when the range is empty.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = u64::from(hi.abs_diff(lo));
        let offset = i64::try_from(self.next_u64() % span).unwrap_or(0);
        i32::try_from(i64::from(lo) + offset).unwrap_or(lo)
    }
}

/// Parameters for [`scatter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScatterConfig {
    /// Number of segments to attempt.
    pub count: usize,
    /// Canvas width; start points have `x` in `0..width`.
    pub width: i32,
    /// Canvas height; start points have `y` in `0..height`.
    pub height: i32,
    /// Each axis extent of a segment is drawn from `-max_extent..max_extent`.
    pub max_extent: i32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: 100,
            width: 664,
            height: 460,
            max_extent: 15,
        }
    }
}

impl ScatterConfig {
    /// Draws one candidate segment. It may be zero length.
    pub fn sample<T: Coord + From<i32>>(&self, rng: &mut Rng) -> Segment<T> {
        let x = rng.range(0, self.width);
        let y = rng.range(0, self.height);
        let dx = rng.range(-self.max_extent, self.max_extent);
        let dy = rng.range(-self.max_extent, self.max_extent);
        Segment {
            start: Point::new(T::from(x), T::from(y)),
            stop: Point::new(
                T::from(x.saturating_add(dx)),
                T::from(y.saturating_add(dy)),
            ),
        }
    }
}

/// Commits up to `config.count` random single-segment polylines that collide
/// with nothing already stored. Returns how many were committed.
pub fn scatter<T: Coord + From<i32>>(
    store: &mut GeometryStore<T>,
    rng: &mut Rng,
    config: &ScatterConfig,
) -> usize {
    scatter_traced(store, rng, config, &mut ())
}

/// Like [`scatter`], reporting every collision query to `trace`.
pub fn scatter_traced<T, R>(
    store: &mut GeometryStore<T>,
    rng: &mut Rng,
    config: &ScatterConfig,
    trace: &mut R,
) -> usize
where
    T: Coord + From<i32>,
    R: QueryTrace<T>,
{
    let mut committed = 0;
    for _ in 0..config.count {
        let candidate = config.sample(rng);
        if candidate.is_degenerate() || store.intersects_any_traced(&candidate, trace) {
            continue;
        }
        store.commit(Polyline::from_iter([candidate]));
        committed += 1;
    }
    committed
}
