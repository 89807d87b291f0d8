use super::*;

#[test]
fn from_rgba8_premultiplies() {
    let img = SliderImage::from_rgba8(1, 1, &[255, 255, 255, 128]).unwrap();
    assert_eq!(img.rgba8_premul(), &[128, 128, 128, 128]);
}

#[test]
fn zero_alpha_zeroes_color_channels() {
    let img = SliderImage::from_rgba8(1, 1, &[200, 100, 50, 0]).unwrap();
    assert_eq!(img.rgba8_premul(), &[0, 0, 0, 0]);
}

#[test]
fn buffer_length_must_match_dimensions() {
    assert!(SliderImage::from_rgba8(2, 2, &[0u8; 12]).is_err());
}

#[test]
fn dimensions_are_bounded() {
    assert!(SliderImage::from_rgba8(0, 1, &[]).is_err());
    let too_wide = 70_000u32;
    let bytes = vec![0u8; (too_wide as usize) * 4];
    assert!(SliderImage::from_rgba8(too_wide, 1, &bytes).is_err());
}

#[test]
fn decode_rejects_garbage() {
    assert!(SliderImage::decode(b"not an image").is_err());
}

#[test]
fn intrinsic_size_in_subpixels() {
    let img = SliderImage::from_rgba8(2, 3, &[0u8; 24]).unwrap();
    assert_eq!(img.width(), 2);
    assert_eq!(img.height(), 3);
    assert_eq!(img.size(), Size::new(2.0, 3.0));
}

#[test]
fn clones_share_pixels() {
    let img = SliderImage::from_rgba8(1, 1, &[1, 2, 3, 255]).unwrap();
    let clone = img.clone();
    assert!(img.same_pixels(&clone));

    let other = SliderImage::from_rgba8(1, 1, &[1, 2, 3, 255]).unwrap();
    assert!(!img.same_pixels(&other));
}
