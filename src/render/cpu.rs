use std::sync::Arc;

use kurbo::{Cap, Join, Stroke};

use crate::assets::SliderImage;
use crate::foundation::core::{Affine, BezPath, Rect, Rgba8};
use crate::foundation::error::{ArcDialError, ArcDialResult};
use crate::render::surface::Surface;

/// Options for the CPU surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuSurfaceOpts {
    pub(crate) clear_rgba: Option<[u8; 4]>,
}

impl CpuSurfaceOpts {
    /// Return options with a configured straight-alpha clear color for the
    /// output frame. Unset, the frame starts fully transparent.
    pub fn with_clear_rgba(mut self, clear: Option<[u8; 4]>) -> Self {
        self.clear_rgba = clear;
        self
    }
}

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the `premultiplied` flag makes this
/// explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct RasterFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

#[derive(Clone, Copy, Debug)]
struct GraphicsState {
    transform: Affine,
    fill: Rgba8,
    stroke: Rgba8,
    // Number of vello clip layers open when this state was saved.
    layers: usize,
}

/// CPU raster [`Surface`] powered by `vello_cpu`.
///
/// The surface records drawing into a `vello_cpu::RenderContext`;
/// [`CpuSurface::finish`] rasterizes and reads back a [`RasterFrame`].
/// Save/restore is implemented with an explicit state stack: transforms and
/// paint colors are restored directly, clips by popping the layers pushed
/// since the matching save.
pub struct CpuSurface {
    width: u16,
    height: u16,
    opts: CpuSurfaceOpts,
    ctx: vello_cpu::RenderContext,
    current: GraphicsState,
    stack: Vec<GraphicsState>,
    open_layers: usize,
}

impl CpuSurface {
    /// Create a surface of the given pixel dimensions.
    pub fn new(width: u32, height: u32, opts: CpuSurfaceOpts) -> ArcDialResult<Self> {
        let w: u16 = width
            .try_into()
            .map_err(|_| ArcDialError::render("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| ArcDialError::render("surface height exceeds u16"))?;
        if w == 0 || h == 0 {
            return Err(ArcDialError::render("surface dimensions must be > 0"));
        }
        Ok(Self {
            width: w,
            height: h,
            opts,
            ctx: vello_cpu::RenderContext::new(w, h),
            current: GraphicsState {
                transform: Affine::IDENTITY,
                fill: Rgba8::opaque(0, 0, 0),
                stroke: Rgba8::opaque(0, 0, 0),
                layers: 0,
            },
            stack: Vec::new(),
            open_layers: 0,
        })
    }

    /// Rasterize everything drawn so far and read back the frame.
    pub fn finish(mut self) -> RasterFrame {
        while self.open_layers > 0 {
            self.ctx.pop_layer();
            self.open_layers -= 1;
        }
        self.ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        if let Some(clear) = self.opts.clear_rgba {
            composite_over_background(&mut data, premul_rgba8(clear));
        }

        RasterFrame {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
            premultiplied: true,
        }
    }

    fn apply_transform(&mut self) {
        self.ctx.set_transform(affine_to_cpu(self.current.transform));
    }
}

impl Surface for CpuSurface {
    fn save(&mut self) {
        self.stack.push(GraphicsState {
            layers: self.open_layers,
            ..self.current
        });
    }

    fn restore(&mut self) {
        let Some(saved) = self.stack.pop() else {
            return;
        };
        while self.open_layers > saved.layers {
            self.ctx.pop_layer();
            self.open_layers -= 1;
        }
        self.current = saved;
    }

    fn set_fill_color(&mut self, color: Rgba8) {
        self.current.fill = color;
    }

    fn set_stroke_color(&mut self, color: Rgba8) {
        self.current.stroke = color;
    }

    fn transform(&mut self, affine: Affine) {
        self.current.transform = self.current.transform * affine;
    }

    fn clip_path(&mut self, path: &BezPath) {
        self.apply_transform();
        self.ctx.push_clip_layer(&bezpath_to_cpu(path));
        self.open_layers += 1;
    }

    fn fill_path(&mut self, path: &BezPath) {
        self.apply_transform();
        self.ctx.set_paint(color_to_cpu(self.current.fill));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke) {
        self.apply_transform();
        self.ctx.set_paint(color_to_cpu(self.current.stroke));
        self.ctx.set_stroke(stroke_to_cpu(stroke));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn draw_image(&mut self, image: &SliderImage, dest: Rect) {
        let Some(paint) = image_to_paint(image) else {
            // Unreachable through public SliderImage constructors, which
            // bound dimensions to u16.
            debug_assert!(false, "image dimensions exceed pixmap range");
            return;
        };
        let (w, h) = (f64::from(image.width()), f64::from(image.height()));
        let blit = self.current.transform
            * Affine::translate((dest.x0, dest.y0))
            * Affine::scale_non_uniform(dest.width() / w, dest.height() / h);
        self.ctx.set_transform(affine_to_cpu(blit));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
    }
}

fn premul_rgba8(rgba: [u8; 4]) -> [u8; 4] {
    let [r, g, b, a] = rgba;
    Rgba8::new(r, g, b, a).to_premul_array()
}

// Premultiplied source-over onto a uniform background color.
fn composite_over_background(data: &mut [u8], bg_premul: [u8; 4]) {
    for px in data.chunks_exact_mut(4) {
        let inv = 255 - u16::from(px[3]);
        for i in 0..4 {
            let over = u16::from(px[i]) + ((u16::from(bg_premul[i]) * inv) + 127) / 255;
            px[i] = over.min(255) as u8;
        }
    }
}

fn color_to_cpu(color: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

// Dash patterns are not part of the slider's stroke vocabulary and are not
// forwarded.
fn stroke_to_cpu(stroke: &Stroke) -> vello_cpu::kurbo::Stroke {
    let cap = |c: Cap| match c {
        Cap::Butt => vello_cpu::kurbo::Cap::Butt,
        Cap::Round => vello_cpu::kurbo::Cap::Round,
        Cap::Square => vello_cpu::kurbo::Cap::Square,
    };
    let join = match stroke.join {
        Join::Bevel => vello_cpu::kurbo::Join::Bevel,
        Join::Miter => vello_cpu::kurbo::Join::Miter,
        Join::Round => vello_cpu::kurbo::Join::Round,
    };

    let mut out = vello_cpu::kurbo::Stroke::new(stroke.width)
        .with_join(join)
        .with_miter_limit(stroke.miter_limit);
    out.start_cap = cap(stroke.start_cap);
    out.end_cap = cap(stroke.end_cap);
    out
}

fn image_to_paint(image: &SliderImage) -> Option<vello_cpu::Image> {
    let w: u16 = image.width().try_into().ok()?;
    let h: u16 = image.height().try_into().ok()?;

    let bytes = image.rgba8_premul();
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (image.width() as usize) * (image.height() as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Some(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
