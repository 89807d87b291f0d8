//! Raster image inputs for image-based tracks, fills and thumbs.

use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::Size;
use crate::foundation::error::{ArcDialError, ArcDialResult};

/// Largest supported image edge, in pixels. Bounded by the CPU raster
/// backend's pixmap coordinate type.
const MAX_IMAGE_DIM: u32 = u16::MAX as u32;

/// A decoded raster image with intrinsic size and premultiplied RGBA8 pixels.
///
/// Pixels are shared, so clones are cheap and a style holding several images
/// stays a plain value type.
#[derive(Clone, Debug)]
pub struct SliderImage {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl SliderImage {
    /// Decode encoded image bytes (PNG, JPEG, ...) and premultiply.
    pub fn decode(bytes: &[u8]) -> ArcDialResult<Self> {
        let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
        let rgba = dyn_img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut rgba8_premul = rgba.into_raw();
        premultiply_rgba8_in_place(&mut rgba8_premul);
        Self::from_premul_parts(width, height, rgba8_premul)
    }

    /// Build an image from a straight-alpha RGBA8 buffer.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> ArcDialResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if rgba.len() != expected {
            return Err(ArcDialError::validation(format!(
                "rgba buffer length {} does not match {width}x{height}",
                rgba.len()
            )));
        }
        let mut rgba8_premul = rgba.to_vec();
        premultiply_rgba8_in_place(&mut rgba8_premul);
        Self::from_premul_parts(width, height, rgba8_premul)
    }

    fn from_premul_parts(width: u32, height: u32, rgba8_premul: Vec<u8>) -> ArcDialResult<Self> {
        if width == 0 || height == 0 {
            return Err(ArcDialError::validation("image dimensions must be > 0"));
        }
        if width > MAX_IMAGE_DIM || height > MAX_IMAGE_DIM {
            return Err(ArcDialError::validation(format!(
                "image dimensions {width}x{height} exceed the supported maximum {MAX_IMAGE_DIM}"
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Intrinsic size in (sub)pixels, as used for thumb image frames.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Premultiplied RGBA8 bytes, tightly packed, row-major.
    pub fn rgba8_premul(&self) -> &[u8] {
        &self.rgba8_premul
    }

    /// Return `true` when both images share the same pixel buffer.
    pub fn same_pixels(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rgba8_premul, &other.rgba8_premul)
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets.rs"]
mod tests;
