use kurbo::Shape;

use crate::foundation::core::BezPath;
use crate::geometry::Arc;

/// Flattening tolerance for arc-to-bezier conversion.
const ARC_TOLERANCE: f64 = 0.1;

/// Which path recipe to emit for an arc.
///
/// The two recipes have different closure semantics and must not be mixed:
/// stroking a closed wedge would draw the radius lines, and filling an open
/// arc would fill the chord instead of the pie slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ArcPathKind {
    /// Move to the arc's start point and sweep to its end point. Not closed;
    /// for stroke use.
    Open,
    /// The open arc plus a straight line back to the circle's center, closed.
    /// Filling produces a solid wedge (a full disk for a full-turn arc).
    ClosedWedge,
}

/// Build the path for `arc` using the given recipe.
///
/// The sweep runs from `start_angle` to `end_angle` in the crate's
/// clockwise-positive screen convention; a negative sweep runs the other way.
pub fn arc_path(arc: &Arc, kind: ArcPathKind) -> BezPath {
    let radius = arc.circle.radius;
    let segment = kurbo::Arc::new(
        arc.circle.origin,
        (radius, radius),
        arc.start_angle,
        arc.sweep(),
        0.0,
    );
    let mut path = segment.into_path(ARC_TOLERANCE);
    if kind == ArcPathKind::ClosedWedge {
        path.line_to(arc.circle.origin);
        path.close_path();
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/path.rs"]
mod tests;
