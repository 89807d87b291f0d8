use super::*;

#[test]
fn premul_matches_rounding_convention() {
    let half = Rgba8::new(255, 255, 255, 128).to_premul_array();
    assert_eq!(half, [128, 128, 128, 128]);

    let quarter = Rgba8::new(200, 100, 0, 64).to_premul_array();
    assert_eq!(quarter, [50, 25, 0, 64]);
}

#[test]
fn opaque_premul_is_identity() {
    let c = Rgba8::opaque(12, 34, 56);
    assert_eq!(c.to_premul_array(), [12, 34, 56, 255]);
}

#[test]
fn transparent_premul_is_zero() {
    assert_eq!(Rgba8::TRANSPARENT.to_premul_array(), [0, 0, 0, 0]);
}
