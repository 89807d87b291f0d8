//! The slider composition layer: track, filled progress, shadow and thumb.
//!
//! Layer order is a correctness requirement, not a stylistic choice — each
//! layer composites over the previous one. [`SliderRenderer::draw`] runs the
//! full fixed-order pass; the individual entry points remain available for
//! hosts that interleave their own drawing.

use crate::assets::SliderImage;
use crate::foundation::core::{Affine, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::{ArcDialError, ArcDialResult};
use crate::geometry::{Arc, Circle};
use crate::render::arc::{DrawMode, draw_arc, draw_disk};
use crate::render::mask::draw_masked_image;
use crate::render::surface::{Surface, saved};

/// Persistent visual configuration of a circular slider.
///
/// Owned by the host widget and reconstructed into ephemeral draw state each
/// pass. Image fields are skipped by serde; hosts wire images up at load
/// time.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SliderStyle {
    /// Fill color of the disk under the track circle.
    pub disk_color: Rgba8,
    /// Stroke color of the track circle.
    pub track_color: Rgba8,
    /// Fill color of the progress wedge.
    pub disk_fill_color: Rgba8,
    /// Stroke color of the progress arc.
    pub track_fill_color: Rgba8,
    /// Stroke color of the shadow arc.
    pub track_shadow_color: Rgba8,
    /// Offset of the shadow arc's circle from the track circle. The full
    /// draw pass skips the shadow when this is zero.
    pub track_shadow_offset: Vec2,
    /// Line width of the track circle.
    pub backtrack_line_width: f64,
    /// Line width of the progress and shadow arcs.
    pub line_width: f64,
    /// Radius of the vector thumb disk.
    pub thumb_radius: f64,
    /// Line width of the vector thumb's outline.
    pub thumb_line_width: f64,
    /// Fill color of the vector thumb.
    pub thumb_tint_color: Rgba8,
    /// Stroke color of the vector thumb.
    pub thumb_stroke_color: Rgba8,
    /// When set, the thumb image rotates to follow the current angle.
    pub thumb_rotates: bool,
    /// Image masked onto the track circle instead of a plain stroke.
    #[serde(skip)]
    pub track_background_image: Option<SliderImage>,
    /// Image masked onto the progress arc instead of a plain stroke.
    #[serde(skip)]
    pub track_fill_image_start: Option<SliderImage>,
    /// Image for the wrapped portion of a multi-turn progress arc; falls
    /// back to [`SliderStyle::track_fill_image_start`] when unset.
    #[serde(skip)]
    pub track_fill_image_end: Option<SliderImage>,
    /// Image drawn centered on the thumb point instead of the vector thumb.
    #[serde(skip)]
    pub thumb_image: Option<SliderImage>,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            disk_color: Rgba8::TRANSPARENT,
            track_color: Rgba8::opaque(233, 233, 233),
            disk_fill_color: Rgba8::TRANSPARENT,
            track_fill_color: Rgba8::opaque(0, 122, 255),
            track_shadow_color: Rgba8::opaque(128, 128, 128),
            track_shadow_offset: Vec2::ZERO,
            backtrack_line_width: 5.0,
            line_width: 5.0,
            thumb_radius: 13.0,
            thumb_line_width: 4.0,
            thumb_tint_color: Rgba8::opaque(255, 255, 255),
            thumb_stroke_color: Rgba8::opaque(0, 122, 255),
            thumb_rotates: false,
            track_background_image: None,
            track_fill_image_start: None,
            track_fill_image_end: None,
            thumb_image: None,
        }
    }
}

impl SliderStyle {
    /// Validate the numeric fields at the host boundary.
    pub fn validate(&self) -> ArcDialResult<()> {
        for (name, v) in [
            ("backtrack_line_width", self.backtrack_line_width),
            ("line_width", self.line_width),
            ("thumb_line_width", self.thumb_line_width),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ArcDialError::validation(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        if !self.thumb_radius.is_finite() || self.thumb_radius <= 0.0 {
            return Err(ArcDialError::validation(format!(
                "thumb_radius must be finite and > 0 (got {})",
                self.thumb_radius
            )));
        }
        Ok(())
    }
}

/// Draws a slider's layers onto a [`Surface`].
///
/// Borrows the style and the control's current circle (center from the host
/// bounds, radius from its layout); both are cheap to rebuild per pass.
#[derive(Clone, Copy, Debug)]
pub struct SliderRenderer<'a> {
    style: &'a SliderStyle,
    circle: Circle,
}

impl<'a> SliderRenderer<'a> {
    /// Create a renderer for one draw pass.
    pub fn new(style: &'a SliderStyle, circle: Circle) -> Self {
        Self { style, circle }
    }

    /// Draw the full-circle track.
    ///
    /// Uses the configured background image mask when present, otherwise a
    /// plain disk-filled stroked circle.
    pub fn draw_track<S: Surface + ?Sized>(&self, surface: &mut S) {
        let arc = Arc::full_circle(self.circle);
        let mut scope = saved(surface);
        match &self.style.track_background_image {
            Some(image) => {
                draw_masked_image(&mut *scope, image, None, &arc, self.style.backtrack_line_width);
            }
            None => {
                scope.set_fill_color(self.style.disk_color);
                scope.set_stroke_color(self.style.track_color);
                draw_arc(
                    &mut *scope,
                    &arc,
                    self.style.backtrack_line_width,
                    DrawMode::FillStroke,
                );
            }
        }
    }

    /// Draw the filled progress arc between the given angles.
    ///
    /// The wedge fill lands first, then the stroke (plain or image-masked)
    /// on top of the fill's edges.
    pub fn draw_filled_arc<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        start_angle: f64,
        end_angle: f64,
    ) {
        let arc = Arc::new(self.circle, start_angle, end_angle);
        let mut scope = saved(surface);
        scope.set_fill_color(self.style.disk_fill_color);
        scope.set_stroke_color(self.style.track_fill_color);

        draw_disk(&mut *scope, &arc);
        match &self.style.track_fill_image_start {
            Some(image) => {
                draw_masked_image(
                    &mut *scope,
                    image,
                    self.style.track_fill_image_end.as_ref(),
                    &arc,
                    self.style.line_width,
                );
            }
            None => {
                draw_arc(&mut *scope, &arc, self.style.line_width, DrawMode::Stroke);
            }
        }
    }

    /// Stroke the shadow arc: the progress geometry with the circle's origin
    /// offset by the configured shadow offset.
    pub fn draw_shadow_arc<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        start_angle: f64,
        end_angle: f64,
    ) {
        let circle = Circle::new(
            self.circle.origin + self.style.track_shadow_offset,
            self.circle.radius,
        );
        let arc = Arc::new(circle, start_angle, end_angle);
        let mut scope = saved(surface);
        scope.set_stroke_color(self.style.track_shadow_color);
        draw_arc(&mut *scope, &arc, self.style.line_width, DrawMode::Stroke);
    }

    /// Draw the vector thumb at `angle` and return its center point.
    pub fn draw_thumb<S: Surface + ?Sized>(&self, surface: &mut S, angle: f64) -> Point {
        let thumb_origin = self.circle.point_at(angle);
        let thumb_arc = Arc::full_circle(Circle::new(thumb_origin, self.style.thumb_radius));

        let mut scope = saved(surface);
        scope.set_fill_color(self.style.thumb_tint_color);
        scope.set_stroke_color(self.style.thumb_stroke_color);
        draw_arc(
            &mut *scope,
            &thumb_arc,
            self.style.thumb_line_width,
            DrawMode::FillStroke,
        );
        thumb_origin
    }

    /// Draw an image thumb at `angle` and return its center point.
    ///
    /// The image is centered on the thumb point at its intrinsic size. With
    /// `rotate`, it is rotated by `angle` about its own center; the rotation
    /// is scoped and never affects subsequent draws.
    pub fn draw_thumb_image<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        image: &SliderImage,
        angle: f64,
        rotate: bool,
    ) -> Point {
        let thumb_origin = self.circle.point_at(angle);
        let frame = Rect::from_center_size(thumb_origin, image.size());

        let mut scope = saved(surface);
        if rotate {
            let center = frame.center().to_vec2();
            scope.transform(
                Affine::translate(center) * Affine::rotate(angle) * Affine::translate(-center),
            );
        }
        scope.draw_image(image, frame);
        thumb_origin
    }

    /// Run the full fixed-order draw pass and return the thumb center.
    ///
    /// Order: track, shadow (when the shadow offset is non-zero), filled
    /// arc, thumb (image thumb when configured, vector thumb otherwise).
    #[tracing::instrument(skip(self, surface))]
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        start_angle: f64,
        end_angle: f64,
        thumb_angle: f64,
    ) -> Point {
        self.draw_track(surface);
        if self.style.track_shadow_offset != Vec2::ZERO {
            self.draw_shadow_arc(surface, start_angle, end_angle);
        }
        self.draw_filled_arc(surface, start_angle, end_angle);
        match &self.style.thumb_image {
            Some(image) => {
                self.draw_thumb_image(surface, image, thumb_angle, self.style.thumb_rotates)
            }
            None => self.draw_thumb(surface, thumb_angle),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slider.rs"]
mod tests;
