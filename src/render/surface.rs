use std::ops::{Deref, DerefMut};

use crate::assets::SliderImage;
use crate::foundation::core::{Affine, BezPath, Rect, Rgba8};

pub use kurbo::{Cap, Join, Stroke};

/// An abstract 2D drawing surface.
///
/// This is the thin interface the geometry core draws through: path fills and
/// strokes, clipping, image blits and affine transforms, plus scoped
/// save/restore of all of that state. Implementations decide how the
/// operations reach pixels ([`crate::render::cpu::CpuSurface`]) or record
/// them ([`crate::render::recording::RecordingSurface`]).
///
/// All operations are infallible: inputs are pre-validated by the caller and
/// drawing either completes or the whole surface update is abandoned.
///
/// State discipline: every component that mutates surface state brackets the
/// mutation with [`saved`], so sibling and nested draw calls never observe
/// leaked transforms, clips or colors.
pub trait Surface {
    /// Push a copy of the current graphics state (transform, clip, colors).
    fn save(&mut self);

    /// Pop back to the most recently saved graphics state.
    ///
    /// Calling `restore` without a matching `save` is a caller bug;
    /// implementations ignore the unbalanced call.
    fn restore(&mut self);

    /// Set the color used by [`Surface::fill_path`].
    fn set_fill_color(&mut self, color: Rgba8);

    /// Set the color used by [`Surface::stroke_path`].
    fn set_stroke_color(&mut self, color: Rgba8);

    /// Concatenate `affine` onto the current transform.
    fn transform(&mut self, affine: Affine);

    /// Intersect the current clip region with `path`.
    fn clip_path(&mut self, path: &BezPath);

    /// Fill `path` with the current fill color.
    fn fill_path(&mut self, path: &BezPath);

    /// Stroke `path` with the current stroke color and the given style.
    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke);

    /// Draw `image` scaled into `dest`, in current-transform coordinates.
    fn draw_image(&mut self, image: &SliderImage, dest: Rect);
}

/// Save `surface` and return a guard that restores it when dropped.
///
/// The guard derefs to the surface, so scoped drawing reads naturally:
///
/// ```ignore
/// let mut scope = saved(surface);
/// scope.clip_path(&outline);
/// scope.draw_image(&img, bounds);
/// // restore runs here, on every exit path
/// ```
pub fn saved<S: Surface + ?Sized>(surface: &mut S) -> StateScope<'_, S> {
    surface.save();
    StateScope { surface }
}

/// Scope guard pairing a [`Surface::save`] with a [`Surface::restore`] on
/// drop, including early returns and panics.
pub struct StateScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<S: Surface + ?Sized> Deref for StateScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for StateScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for StateScope<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
