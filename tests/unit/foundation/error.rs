use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ArcDialError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ArcDialError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ArcDialError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
