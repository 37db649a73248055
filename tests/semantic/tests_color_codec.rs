//! Color codec behavior through the public API.

use gtkcolor::{CanonicalColor, is_light, to_canonical_hex};
use rstest::rstest;

#[rstest]
#[case("rgb(255, 0, 0)", Some("#ff0000"))]
#[case("rgba(0,128,0,0.5)", Some("#008000"))]
#[case("#abc", Some("#aabbcc"))]
#[case("#1A2B3C", Some("#1a2b3c"))]
#[case("notacolor", None)]
#[case("@blue_3", None)]
fn test_canonical_hex(#[case] raw: &str, #[case] expected: Option<&str>) {
    assert_eq!(to_canonical_hex(raw).map(|c| c.to_hex()).as_deref(), expected);
}

#[rstest]
#[case("#ffffff", true)]
#[case("#000000", false)]
#[case("#7f7f7f", false)]
#[case("#336699", false)]
#[case("#f6f5f4", true)]
fn test_light_classification(#[case] hex: &str, #[case] light: bool) {
    assert_eq!(is_light(hex), light);
}

#[test]
fn test_accent_luminance_below_threshold() {
    let accent = CanonicalColor::parse_hex("#336699").unwrap();
    assert!(accent.luminance() < 0.5);
    assert_eq!(accent.contrast_foreground(), "#ffffff");
}
