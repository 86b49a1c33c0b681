// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uncross Session: a headless drawing session over an `uncross_segment` store.
//!
//! This crate turns a stream of pointer events into committed, non-crossing
//! polylines. It owns no window and draws nothing: the host forwards pointer
//! down/move/up as [`DrawingSession::begin`], [`DrawingSession::move_to`] and
//! [`DrawingSession::release`], then renders [`DrawingSession::store`],
//! [`DrawingSession::in_progress`] and [`DrawingSession::preview`] however it
//! likes.
//!
//! Every accepted segment is checked against committed geometry before it is
//! appended to the stroke. Once a stroke collides it is frozen and thrown away
//! on release, so the store only ever holds geometry that crosses nothing.
//!
//! ## Minimal example
//!
//! ```rust
//! use uncross_session::{DrawingSession, ReleaseOutcome, Rng, ScatterConfig};
//!
//! let mut session = DrawingSession::<i32>::new();
//!
//! // Fill the canvas with short random segments first.
//! let scattered = session.scatter(&mut Rng::new(1), &ScatterConfig::default());
//! assert_eq!(session.store().polyline_count(), scattered);
//!
//! // Then draw a stroke through the clutter.
//! session.begin((0, -50));
//! session.move_to((100, -50));
//! match session.release((100, -40)) {
//!     ReleaseOutcome::Committed { segments } => assert_eq!(segments, 2),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Stroke modes
//!
//! - [`StrokeMode::Polyline`]: every pointer move appends a segment, so the
//!   stroke follows the pointer.
//! - [`StrokeMode::Line`]: moves only update the preview, and release appends
//!   one straight segment from the press point.
//!
//! Both modes honor [`SessionConfig::min_segment_length`] to coalesce jittery
//! samples, and [`SessionConfig::check_self`] to forbid a stroke from crossing
//! itself.
//!
//! ## Scattering
//!
//! [`scatter()`] and [`DrawingSession::scatter`] commit random short segments
//! that do not collide with what is already there. They are used to seed
//! demos and to load the store for benchmarks.
//!
//! This crate is `no_std`.

#![no_std]

pub mod scatter;
mod session;

pub use scatter::{Rng, ScatterConfig, scatter, scatter_traced};
pub use session::{
    DrawingSession, MoveOutcome, ReleaseOutcome, SessionConfig, SessionStats, StrokeMode,
    StrokeState,
};
