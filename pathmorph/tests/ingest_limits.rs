use pathmorph::geometry::limits;
use pathmorph::{MorphError, MorphOptions, MorphPair, Path};
use serde_json::json;

#[test]
fn svg_overlong_d_is_rejected() {
    let long = "M 0 0 L 1 1 ".repeat(1_000_000); // exceeds the length cap
    let err = Path::from_svg(&long).unwrap_err();
    assert!(matches!(err, MorphError::LimitExceeded { .. }), "{err:?}");
}

#[test]
fn svg_command_cap() {
    let d = "L1 1 ".repeat(limits::MAX_SVG_COMMANDS + 1);
    let err = Path::from_svg(&d).unwrap_err();
    assert_eq!(err.code(), "caps_exceeded");
}

#[test]
fn svg_segment_cap_counts_implicit_repeats() {
    let mut d = String::from("M0 0 L");
    d.push_str(&" 1 1".repeat(limits::MAX_SVG_SEGMENTS + 1));
    let err = Path::from_svg(&d).unwrap_err();
    assert_eq!(err.code(), "caps_exceeded");
}

#[test]
fn svg_out_of_range_coordinates() {
    assert_eq!(Path::from_svg("M 0 0 L 1e8 0").unwrap_err().code(), "svg_parse");
    // relative steps can walk out of range too
    let err = Path::from_svg("M 9000000 0 l 9000000 0").unwrap_err();
    assert_eq!(err.code(), "svg_parse");
}

#[test]
fn json_caps_exceeded_subpaths() {
    let sub = json!({"start": {"x": 0.0, "y": 0.0}, "segments": []});
    let subs: Vec<_> = (0..=limits::MAX_SUBPATHS).map(|_| sub.clone()).collect();
    let err = Path::from_json_value(json!({"version": 1, "subpaths": subs})).unwrap_err();
    assert_eq!(err.code(), "caps_exceeded");
}

#[test]
fn json_invalid_numbers() {
    let v = json!({"version": 1, "subpaths": [{
        "start": {"x": 1.0e38, "y": 0.0},
        "segments": [{"kind": "line", "to": {"x": 1.0, "y": 1.0}}]
    }]});
    assert_eq!(Path::from_json_value(v).unwrap_err().code(), "invalid_document");
}

#[test]
fn morph_target_cap() {
    let mut d = String::from("M0 0 L");
    for i in 0..16_000 {
        d.push_str(&format!(" {} {}", i % 100, i / 100));
    }
    let big = Path::from_svg(&d).unwrap();
    let options = MorphOptions {
        segment_factor: limits::MAX_SEGMENT_FACTOR,
        ..MorphOptions::default()
    };
    let err = MorphPair::prepare(&big, &Path::default(), &options).unwrap_err();
    assert_eq!(err.code(), "caps_exceeded");
}
