use kurbo::{Cap, Join, Stroke};

use crate::geometry::Arc;
use crate::render::path::{ArcPathKind, arc_path};
use crate::render::surface::{Surface, saved};

/// Which path operations to perform when drawing an arc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DrawMode {
    /// Stroke the open arc only.
    Stroke,
    /// Fill the closed wedge only.
    Fill,
    /// Fill the wedge, then stroke the open arc on top of it.
    FillStroke,
}

impl DrawMode {
    /// Return `true` when the mode fills the wedge.
    pub fn fills(self) -> bool {
        matches!(self, Self::Fill | Self::FillStroke)
    }

    /// Return `true` when the mode strokes the arc.
    pub fn strokes(self) -> bool {
        matches!(self, Self::Stroke | Self::FillStroke)
    }
}

/// The stroke style used for all arc outlines: round caps at the arc's free
/// ends and round joins.
pub(crate) fn round_stroke(line_width: f64) -> Stroke {
    Stroke::new(line_width)
        .with_caps(Cap::Round)
        .with_join(Join::Round)
}

/// Draw `arc` with the given line width and mode.
///
/// `DrawMode::Fill` never strokes, even with a nonzero `line_width`, and
/// `DrawMode::Stroke` never fills. For `FillStroke` the wedge is filled
/// first so the stroke sits visually on top of the fill's edges. Surface
/// state touched by the call is saved and restored.
pub fn draw_arc<S: Surface + ?Sized>(surface: &mut S, arc: &Arc, line_width: f64, mode: DrawMode) {
    let mut scope = saved(surface);
    if mode.fills() {
        scope.fill_path(&arc_path(arc, ArcPathKind::ClosedWedge));
    }
    if mode.strokes() {
        scope.stroke_path(&arc_path(arc, ArcPathKind::Open), &round_stroke(line_width));
    }
}

/// Fill the closed wedge for `arc` with no stroke.
///
/// Equivalent to [`draw_arc`] with `DrawMode::Fill` and line width forced to
/// zero; used for full-circle disks and filled progress regions.
pub fn draw_disk<S: Surface + ?Sized>(surface: &mut S, arc: &Arc) {
    let mut scope = saved(surface);
    scope.fill_path(&arc_path(arc, ArcPathKind::ClosedWedge));
}

#[cfg(test)]
#[path = "../../tests/unit/render/arc.rs"]
mod tests;
