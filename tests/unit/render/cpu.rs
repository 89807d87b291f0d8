use super::*;

use crate::geometry::{Arc as DialArc, Circle};
use crate::render::path::{ArcPathKind, arc_path};

#[test]
fn rejects_unsupported_dimensions() {
    assert!(CpuSurface::new(70_000, 64, CpuSurfaceOpts::default()).is_err());
    assert!(CpuSurface::new(64, 70_000, CpuSurfaceOpts::default()).is_err());
    assert!(CpuSurface::new(0, 64, CpuSurfaceOpts::default()).is_err());
}

#[test]
fn finished_frame_has_expected_shape() {
    let surface = CpuSurface::new(32, 16, CpuSurfaceOpts::default()).unwrap();
    let frame = surface.finish();
    assert_eq!(frame.width, 32);
    assert_eq!(frame.height, 16);
    assert_eq!(frame.data.len(), 32 * 16 * 4);
    assert!(frame.premultiplied);
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn clear_color_fills_the_frame() {
    let opts = CpuSurfaceOpts::default().with_clear_rgba(Some([255, 0, 0, 255]));
    let surface = CpuSurface::new(2, 2, opts).unwrap();
    let frame = surface.finish();
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, [255, 0, 0, 255]);
    }
}

#[test]
fn filled_disk_reaches_pixels() {
    let mut surface = CpuSurface::new(64, 64, CpuSurfaceOpts::default()).unwrap();
    surface.set_fill_color(Rgba8::opaque(255, 255, 255));
    let disk = DialArc::full_circle(Circle::new((32.0, 32.0), 20.0));
    surface.fill_path(&arc_path(&disk, ArcPathKind::ClosedWedge));

    let frame = surface.finish();
    assert!(frame.data.iter().any(|&b| b != 0));

    // The disk center is solidly covered.
    let center = ((32 * 64 + 32) * 4) as usize;
    assert_eq!(&frame.data[center..center + 4], &[255, 255, 255, 255]);
}

#[test]
fn restore_pops_clips_and_transforms() {
    let mut surface = CpuSurface::new(8, 8, CpuSurfaceOpts::default()).unwrap();
    surface.save();
    surface.transform(Affine::translate((2.0, 2.0)));
    let clip = arc_path(
        &DialArc::full_circle(Circle::new((4.0, 4.0), 2.0)),
        ArcPathKind::ClosedWedge,
    );
    surface.clip_path(&clip);
    surface.restore();

    assert_eq!(surface.current.transform, Affine::IDENTITY);
    assert_eq!(surface.open_layers, 0);
}
