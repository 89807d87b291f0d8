use kurbo::Stroke;

use crate::assets::SliderImage;
use crate::foundation::core::{Affine, BezPath, Rect, Rgba8};
use crate::render::surface::Surface;

/// One recorded [`Surface`] operation.
#[derive(Clone, Debug)]
pub enum SurfaceCommand {
    /// [`Surface::save`].
    Save,
    /// [`Surface::restore`].
    Restore,
    /// [`Surface::set_fill_color`].
    SetFillColor(Rgba8),
    /// [`Surface::set_stroke_color`].
    SetStrokeColor(Rgba8),
    /// [`Surface::transform`].
    Transform(Affine),
    /// [`Surface::clip_path`].
    ClipPath(BezPath),
    /// [`Surface::fill_path`].
    FillPath(BezPath),
    /// [`Surface::stroke_path`].
    StrokePath {
        /// The stroked path.
        path: BezPath,
        /// The stroke style used.
        stroke: Stroke,
    },
    /// [`Surface::draw_image`].
    DrawImage {
        /// The blitted image.
        image: SliderImage,
        /// Destination rectangle.
        dest: Rect,
    },
}

/// A [`Surface`] that records its command stream instead of producing pixels.
///
/// Used by the unit tests to assert on operation counts, path recipes and
/// save/restore scoping; also handy when debugging a draw pass.
#[derive(Debug)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    transform: Affine,
    stack: Vec<Affine>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Create an empty recording surface with the identity transform.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            transform: Affine::IDENTITY,
            stack: Vec::new(),
        }
    }

    /// All commands recorded so far, in order.
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// The current transform, as affected by `transform`/`save`/`restore`.
    pub fn current_transform(&self) -> Affine {
        self.transform
    }

    /// Number of saves without a matching restore.
    pub fn open_saves(&self) -> usize {
        self.stack.len()
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.transform);
        self.commands.push(SurfaceCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
            self.commands.push(SurfaceCommand::Restore);
        }
    }

    fn set_fill_color(&mut self, color: Rgba8) {
        self.commands.push(SurfaceCommand::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Rgba8) {
        self.commands.push(SurfaceCommand::SetStrokeColor(color));
    }

    fn transform(&mut self, affine: Affine) {
        self.transform = self.transform * affine;
        self.commands.push(SurfaceCommand::Transform(affine));
    }

    fn clip_path(&mut self, path: &BezPath) {
        self.commands.push(SurfaceCommand::ClipPath(path.clone()));
    }

    fn fill_path(&mut self, path: &BezPath) {
        self.commands.push(SurfaceCommand::FillPath(path.clone()));
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke) {
        self.commands.push(SurfaceCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
        });
    }

    fn draw_image(&mut self, image: &SliderImage, dest: Rect) {
        self.commands.push(SurfaceCommand::DrawImage {
            image: image.clone(),
            dest,
        });
    }
}
