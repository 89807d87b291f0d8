use super::*;

use std::f64::consts::PI;

use kurbo::PathEl;

use crate::geometry::Circle;

fn half_turn_arc() -> Arc {
    Arc::new(Circle::new((100.0, 100.0), 50.0), 0.0, PI)
}

#[test]
fn open_path_starts_at_the_arc_start_point() {
    let path = arc_path(&half_turn_arc(), ArcPathKind::Open);
    let Some(&PathEl::MoveTo(start)) = path.elements().first() else {
        panic!("open arc path must begin with MoveTo");
    };
    assert!((start.x - 150.0).abs() < 1e-6);
    assert!((start.y - 100.0).abs() < 1e-6);
}

#[test]
fn open_path_never_closes_or_draws_lines() {
    let path = arc_path(&half_turn_arc(), ArcPathKind::Open);
    assert!(
        path.elements()
            .iter()
            .all(|el| !matches!(el, PathEl::LineTo(_) | PathEl::ClosePath))
    );
}

#[test]
fn wedge_path_closes_back_to_the_center() {
    let arc = half_turn_arc();
    let path = arc_path(&arc, ArcPathKind::ClosedWedge);
    let els = path.elements();
    assert!(els.len() >= 3);
    let Some(&PathEl::LineTo(center)) = els.get(els.len() - 2) else {
        panic!("wedge must end with a line back to the center");
    };
    assert_eq!(center, arc.circle.origin);
    assert!(matches!(els.last(), Some(PathEl::ClosePath)));
}

#[test]
fn half_turn_bounding_box() {
    // Clockwise-positive screen sweep from 0 to π passes through the bottom
    // of the circle: x in [50, 150], y in [100, 150].
    let path = arc_path(&half_turn_arc(), ArcPathKind::Open);
    let bbox = path.bounding_box();
    assert!((bbox.x0 - 50.0).abs() < 0.5, "bbox: {bbox:?}");
    assert!((bbox.y0 - 100.0).abs() < 0.5, "bbox: {bbox:?}");
    assert!((bbox.x1 - 150.0).abs() < 0.5, "bbox: {bbox:?}");
    assert!((bbox.y1 - 150.0).abs() < 0.5, "bbox: {bbox:?}");
}

#[test]
fn full_circle_wedge_covers_the_disk() {
    let arc = Arc::full_circle(Circle::new((100.0, 100.0), 50.0));
    let path = arc_path(&arc, ArcPathKind::ClosedWedge);
    let bbox = path.bounding_box();
    assert!((bbox.x0 - 50.0).abs() < 0.5);
    assert!((bbox.y0 - 50.0).abs() < 0.5);
    assert!((bbox.x1 - 150.0).abs() < 0.5);
    assert!((bbox.y1 - 150.0).abs() < 0.5);
}

#[test]
fn zero_sweep_open_path_is_a_single_move() {
    let arc = Arc::new(Circle::new((0.0, 0.0), 10.0), 1.0, 1.0);
    let path = arc_path(&arc, ArcPathKind::Open);
    assert_eq!(path.elements().len(), 1);
    assert!(matches!(path.elements()[0], PathEl::MoveTo(_)));
}
