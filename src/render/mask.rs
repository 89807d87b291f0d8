use kurbo::StrokeOpts;

use crate::assets::SliderImage;
use crate::foundation::core::Rect;
use crate::geometry::{Arc, Circle, FULL_TURN};
use crate::render::arc::round_stroke;
use crate::render::path::{ArcPathKind, arc_path};
use crate::render::surface::{Surface, saved};

/// Tolerance for expanding an arc stroke into its outline path.
const STROKE_TOLERANCE: f64 = 0.1;

/// Draw an image clipped to the stroked region of `arc`.
///
/// The image is masked, not stretched: the stroke outline of the arc (round
/// caps, width `line_width`) becomes the clip region, and `start_image` is
/// drawn scaled to the `2 * radius + line_width` square centered on the
/// arc's circle, so only pixels under the stroke survive.
///
/// When the arc wraps past a full turn, the portion beyond 2π is masked in a
/// second pass using `end_image`, falling back to `start_image` when no end
/// image is configured. This lets a wrapping track show a different image
/// (e.g. a color transition) only on the wrapped portion.
///
/// Each masked pass saves and restores surface state, so the clip never
/// leaks into subsequent drawing. A sub-range with no positive sweep (for
/// instance a degenerate arc, or a start angle already past the wrap
/// boundary) draws nothing at all.
pub fn draw_masked_image<S: Surface + ?Sized>(
    surface: &mut S,
    start_image: &SliderImage,
    end_image: Option<&SliderImage>,
    arc: &Arc,
    line_width: f64,
) {
    let bounds = mask_bounds(&arc.circle, line_width);
    let (first, wrap) = mask_segments(arc);

    if let Some(segment) = first {
        masked_draw(surface, start_image, &segment, line_width, bounds);
    }
    if let Some(segment) = wrap {
        let image = wrap_image(start_image, end_image);
        masked_draw(surface, image, &segment, line_width, bounds);
    }
}

/// Resolve which image covers the wrapped portion of a track.
fn wrap_image<'a>(
    start_image: &'a SliderImage,
    end_image: Option<&'a SliderImage>,
) -> &'a SliderImage {
    end_image.unwrap_or(start_image)
}

/// Square bounding box an arc mask image is scaled into: side
/// `2 * radius + line_width`, centered on the circle.
fn mask_bounds(circle: &Circle, line_width: f64) -> Rect {
    let half = circle.radius + line_width / 2.0;
    Rect::new(
        circle.origin.x - half,
        circle.origin.y - half,
        circle.origin.x + half,
        circle.origin.y + half,
    )
}

/// Split an arc into the sub-range below the wrap boundary and the sub-range
/// past it. Either side is `None` when its effective sweep is empty.
fn mask_segments(arc: &Arc) -> (Option<Arc>, Option<Arc>) {
    let first_end = arc.end_angle.min(FULL_TURN);
    let first = (arc.start_angle < first_end)
        .then(|| Arc::new(arc.circle, arc.start_angle, first_end));

    let wrap = if arc.end_angle > FULL_TURN {
        let wrap_start = arc.start_angle.max(FULL_TURN);
        (wrap_start < arc.end_angle).then(|| Arc::new(arc.circle, wrap_start, arc.end_angle))
    } else {
        None
    };

    (first, wrap)
}

fn masked_draw<S: Surface + ?Sized>(
    surface: &mut S,
    image: &SliderImage,
    segment: &Arc,
    line_width: f64,
    bounds: Rect,
) {
    let outline = kurbo::stroke(
        arc_path(segment, ArcPathKind::Open),
        &round_stroke(line_width),
        &StrokeOpts::default(),
        STROKE_TOLERANCE,
    );

    let mut scope = saved(surface);
    scope.clip_path(&outline);
    scope.draw_image(image, bounds);
}

#[cfg(test)]
#[path = "../../tests/unit/render/mask.rs"]
mod tests;
