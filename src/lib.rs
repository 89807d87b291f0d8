//! Arcdial is the rendering and hit-geometry core of a circular slider control.
//!
//! The crate turns a value-derived pair of angles into pixels: an arc-shaped
//! track, a filled progress arc, an optional drop-shadow arc and a draggable
//! thumb (vector-drawn or image-based). The geometry and masking layers are
//! independent of any concrete rasterizer; drawing goes through the
//! [`Surface`] trait, with a CPU implementation backed by `vello_cpu`.
//!
//! - Build a [`Circle`] from the host control's bounds and an [`Arc`] from its
//!   value-derived angles
//! - Draw individual layers with [`SliderRenderer`], or run the full
//!   fixed-order pass with [`SliderRenderer::draw`]
//! - Rasterize with [`CpuSurface`] and read back a [`RasterFrame`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Raster image inputs (decode + premultiply).
pub mod assets;
/// Circle/arc geometry and value-to-angle conversion.
pub mod geometry;
/// Path construction, arc rendering, masking and drawing surfaces.
pub mod render;
/// The slider composition layer (track, fill, shadow, thumb).
pub mod slider;

pub use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Size, Vec2};
pub use crate::foundation::error::{ArcDialError, ArcDialResult};

pub use crate::assets::SliderImage;
pub use crate::geometry::{
    Arc, CIRCLE_INITIAL_ANGLE, CIRCLE_MAX_ANGLE, CIRCLE_MIN_ANGLE, Circle, FULL_TURN, Interval,
};
pub use crate::render::arc::{DrawMode, draw_arc, draw_disk};
pub use crate::render::cpu::{CpuSurface, CpuSurfaceOpts, RasterFrame};
pub use crate::render::mask::draw_masked_image;
pub use crate::render::path::{ArcPathKind, arc_path};
pub use crate::render::surface::{StateScope, Surface, saved};
pub use crate::slider::{SliderRenderer, SliderStyle};
