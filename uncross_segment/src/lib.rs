// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uncross Segment: exact 2D segment intersection for non-crossing drawings.
//!
//! This crate answers one question fast: does a new straight segment touch or
//! cross anything already drawn? It is the geometry core of editors where
//! strokes may not intersect each other, and is meant to be driven by an input
//! layer that feeds it point pairs (see `uncross_session` for a ready-made
//! pointer state machine).
//!
//! - [`Segment`]: a straight segment; [`Segment::intersects`] classifies a pair
//!   as an [`IntersectionResult`].
//! - [`Polyline`]: an ordered chain of segments built incrementally with
//!   [`Polyline::extend`], which drops zero-length segments.
//! - [`GeometryStore`]: owns every committed polyline and answers
//!   [`GeometryStore::intersects_any`] against all of them.
//!
//! ## Minimal example
//!
//! ```rust
//! use uncross_segment::{GeometryStore, IntersectionResult, Polyline, Segment};
//!
//! let a = Segment::new((0, 0), (10, 0));
//! assert_eq!(a.intersects(&Segment::new((5, 0), (15, 0))), IntersectionResult::Collinear);
//! assert_eq!(a.intersects(&Segment::new((20, 0), (30, 0))), IntersectionResult::NoIntersection);
//!
//! let mut store = GeometryStore::new();
//! let mut stroke = Polyline::new();
//! for seg in [a, Segment::new((10, 0), (10, 10))] {
//!     // Check each sample before accepting it.
//!     assert!(!store.intersects_any(&seg));
//!     stroke.extend(seg);
//! }
//! store.commit(stroke);
//!
//! assert!(store.intersects_any(&Segment::new((5, -5), (5, 5))));
//! assert_eq!(store.polyline_count(), 1);
//! assert_eq!(store.segment_count(), 2);
//! ```
//!
//! ## Classification
//!
//! [`Segment::intersects`] first rejects pairs whose bounding boxes do not
//! overlap, then computes the four orientations of each segment's endpoints
//! relative to the other segment's line:
//!
//! - [`IntersectionResult::General`]: the segments properly cross.
//! - [`IntersectionResult::Collinear`]: they lie on a shared line and each
//!   has an endpoint on the other (partial overlap, end-to-end, identical).
//! - [`IntersectionResult::PointInSegment`]: only one of them has an endpoint
//!   on the other (T-junctions, containment), or they share an endpoint at
//!   an angle.
//! - [`IntersectionResult::NoIntersection`]: they share no point.
//!
//! The test is symmetric and, for integer coordinates, exact. Cross products
//! are evaluated in a wider type (see [`Coord`]). Float coordinates can opt
//! into a collinear tolerance with [`IntersectParams`].
//!
//! ## Observability
//!
//! Queries do not log. Pass a [`QueryTrace`] sink, such as [`QueryStats`], to
//! [`GeometryStore::intersects_any_traced`] to count the work a query did.
//!
//! ## Kurbo interop
//!
//! `f64` geometry converts to and from Kurbo types for rendering:
//! [`Point<f64>`] with `kurbo::Point`, [`Segment<f64>`] with `kurbo::Line`,
//! and [`Aabb2D::to_rect`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod aabb;
mod orientation;
mod point;
mod polyline;
mod segment;
mod store;
pub mod trace;

pub use aabb::Aabb2D;
pub use orientation::{Orientation, cross};
pub use point::{Coord, Point};
pub use polyline::Polyline;
pub use segment::{IntersectParams, IntersectionResult, Segment};
pub use store::{CommitError, GeometryStore};
pub use trace::{QueryStats, QueryTrace};
