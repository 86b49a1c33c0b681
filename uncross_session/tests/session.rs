// Copyright 2026 the Uncross Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end drawing sessions: pointer sequences in, committed geometry out.

use uncross_segment::{GeometryStore, Point, Segment};
use uncross_session::{
    DrawingSession, MoveOutcome, ReleaseOutcome, Rng, ScatterConfig, SessionConfig, StrokeMode,
    StrokeState,
};

/// Drives a full press/move/release gesture through `points`.
fn stroke(session: &mut DrawingSession<i32>, points: &[(i32, i32)]) -> ReleaseOutcome {
    let (first, rest) = points.split_first().expect("at least one point");
    session.begin(*first);
    let (last, moves) = match rest.split_last() {
        Some(split) => split,
        None => (first, &[][..]),
    };
    for &p in moves {
        session.move_to(p);
    }
    session.release(*last)
}

/// No two stored segments from different polylines may touch.
fn assert_store_uncrossed(store: &GeometryStore<i32>) {
    let polylines = store.polylines();
    for (i, a) in polylines.iter().enumerate() {
        for b in &polylines[i + 1..] {
            for s in a {
                for t in b {
                    assert!(!s.intersects(t).is_hit(), "{s:?} touches {t:?}");
                }
            }
        }
    }
}

#[test]
fn committed_strokes_never_cross() {
    let mut session = DrawingSession::<i32>::new();
    assert_eq!(
        stroke(&mut session, &[(0, 0), (50, 0), (50, 50)]),
        ReleaseOutcome::Committed { segments: 2 }
    );
    assert_eq!(
        stroke(&mut session, &[(25, -10), (25, 10)]),
        ReleaseOutcome::Discarded
    );
    assert_eq!(
        stroke(&mut session, &[(0, 10), (40, 10), (40, 40)]),
        ReleaseOutcome::Committed { segments: 2 }
    );
    // Ends exactly on the first stroke's corner.
    assert_eq!(
        stroke(&mut session, &[(60, 60), (50, 50)]),
        ReleaseOutcome::Discarded
    );

    assert_eq!(session.store().polyline_count(), 2);
    assert_eq!(session.stats().committed, 2);
    assert_eq!(session.stats().discarded, 2);
    assert_store_uncrossed(session.store());
}

#[test]
fn collision_freezes_stroke_but_keeps_preview_live() {
    let mut session = DrawingSession::<i32>::new();
    stroke(&mut session, &[(0, 0), (0, 100)]);

    session.begin((-10, 50));
    assert_eq!(session.move_to((-5, 50)), MoveOutcome::Extended);
    assert!(!session.preview_collides());
    assert_eq!(session.move_to((10, 50)), MoveOutcome::Collided);
    assert_eq!(
        session.state(),
        StrokeState::Collided {
            anchor: Point::new(-5, 50),
            cursor: Point::new(10, 50),
        }
    );
    // Moving back does not un-collide the stroke.
    assert_eq!(session.move_to((-8, 50)), MoveOutcome::Collided);
    assert!(session.preview_collides());
    assert_eq!(session.in_progress().len(), 1);

    assert_eq!(session.release((-8, 50)), ReleaseOutcome::Discarded);
    assert!(session.in_progress().is_empty());
    assert!(!session.is_drawing());
    assert_eq!(session.store().segment_count(), 1);
}

#[test]
fn release_checks_the_tail_segment() {
    let mut session = DrawingSession::<i32>::new();
    stroke(&mut session, &[(0, 0), (0, 100)]);

    session.begin((-10, 10));
    assert_eq!(session.move_to((-10, 20)), MoveOutcome::Extended);
    // Release lands on the far side of the stored line without a move in between.
    assert_eq!(session.release((10, 20)), ReleaseOutcome::Discarded);
    assert_eq!(session.store().polyline_count(), 1);
}

#[test]
fn preview_reports_pending_collision() {
    let mut session = DrawingSession::<i32>::with_config(SessionConfig {
        mode: StrokeMode::Line,
        ..SessionConfig::default()
    });
    stroke(&mut session, &[(0, 0), (100, 0)]);

    session.begin((50, 10));
    assert_eq!(session.move_to((50, 5)), MoveOutcome::Previewed);
    assert!(!session.preview_collides());
    assert_eq!(session.move_to((50, -5)), MoveOutcome::Previewed);
    assert!(session.preview_collides());
    assert_eq!(session.preview(), Some(Segment::new((50, 10), (50, -5))));
    assert_eq!(session.release((50, -5)), ReleaseOutcome::Discarded);
}

#[test]
fn line_mode_commits_one_segment() {
    let mut session = DrawingSession::<i32>::with_config(SessionConfig {
        mode: StrokeMode::Line,
        ..SessionConfig::default()
    });
    session.begin((0, 0));
    for x in 1..20 {
        assert_eq!(session.move_to((x, x / 2)), MoveOutcome::Previewed);
    }
    assert_eq!(
        session.release((20, 5)),
        ReleaseOutcome::Committed { segments: 1 }
    );
    assert_eq!(
        session.store().segments().copied().collect::<Vec<_>>(),
        vec![Segment::new((0, 0), (20, 5))]
    );
}

#[test]
fn click_without_drag_is_too_short() {
    let mut session = DrawingSession::<i32>::new();
    session.begin((5, 5));
    assert_eq!(session.release((5, 5)), ReleaseOutcome::TooShort);
    assert!(session.is_drawing());
    session.cancel();
    assert!(!session.is_drawing());
    assert!(session.store().is_empty());
    assert_eq!(session.stats().discarded, 0);
}

#[test]
fn clear_resets_store_and_stroke() {
    let mut session = DrawingSession::<i32>::new();
    stroke(&mut session, &[(0, 0), (10, 0)]);
    session.begin((0, 5));
    session.move_to((10, 5));
    let before = session.store().revision();

    session.clear();
    assert!(session.store().is_empty());
    assert!(!session.is_drawing());
    assert!(session.store().revision() > before);

    // Previously blocked geometry is free again.
    assert_eq!(
        stroke(&mut session, &[(5, -5), (5, 5)]),
        ReleaseOutcome::Committed { segments: 1 }
    );
}

#[test]
fn scatter_then_draw_keeps_store_uncrossed() {
    let mut session = DrawingSession::<i32>::new();
    let config = ScatterConfig {
        count: 300,
        ..ScatterConfig::default()
    };
    let scattered = session.scatter(&mut Rng::new(2024), &config);
    assert!(scattered > 0);
    assert_eq!(session.stats().committed, scattered as u64);

    // Sweep strokes across the canvas; most will collide.
    let mut rng = Rng::new(7);
    for _ in 0..50 {
        let points: Vec<(i32, i32)> = (0..6)
            .map(|_| (rng.range(0, 664), rng.range(0, 460)))
            .collect();
        stroke(&mut session, &points);
        assert!(!session.is_drawing() || session.in_progress().is_empty());
        session.cancel();
    }
    assert_store_uncrossed(session.store());
    let stats = session.stats();
    assert_eq!(
        stats.committed,
        u64::try_from(session.store().polyline_count()).unwrap()
    );
    assert!(stats.queries.queries >= stats.queries.colliding_queries);
}

#[test]
fn scatter_avoids_stroke_in_progress() {
    let mut session = DrawingSession::<i32>::new();
    session.begin((0, 200));
    session.move_to((664, 200));
    assert_eq!(session.in_progress().len(), 1);

    session.scatter(&mut Rng::new(11), &ScatterConfig::default());
    assert_eq!(
        session.release((664, 200)),
        ReleaseOutcome::Committed { segments: 1 }
    );
    assert_store_uncrossed(session.store());
}
