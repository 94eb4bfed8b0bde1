#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Float64Array, Object, Reflect, Uint32Array};
use pathmorph_wasm::Morph;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const SQUARE: &str = "M0 0 L10 0 L10 10 L0 10 Z";
const TRIANGLE: &str = "M0 0 L12 0 L6 9 Z";

fn is_ok(v: &JsValue) -> bool {
    Reflect::get(v, &JsValue::from_str("ok")).ok().and_then(|x| x.as_bool()).unwrap_or(false)
}
fn is_err_code(v: &JsValue, code: &str) -> bool {
    if is_ok(v) { return false; }
    if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
        if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) { return c.as_string().map_or(false, |s| s==code); }
    }
    false
}

#[wasm_bindgen_test]
fn build_and_sample() {
    let m = Morph::build(SQUARE, TRIANGLE).expect("morph");
    let counts: Uint32Array = m.segment_counts();
    assert_eq!(counts.to_vec(), vec![12]);
    assert_eq!(m.shortfall(), 0);
    assert!(m.from_svg().starts_with("M 0 0 C"));
    let frames: Array = m.frames(4);
    assert_eq!(frames.length(), 5);
    assert_eq!(frames.get(0).as_string().unwrap(), m.from_svg());
    assert_eq!(frames.get(4).as_string().unwrap(), m.to_svg());
    // start point plus three points per cubic
    let pos: Float64Array = m.positions_at(0.5);
    assert_eq!(pos.length(), 2 + 12 * 6);
}

#[wasm_bindgen_test]
fn build_res_reports_typed_errors() {
    let r = Morph::build_res("M0 0 L", TRIANGLE, JsValue::UNDEFINED);
    assert!(is_err_code(&r, "svg_parse"));
    let opts = Object::new();
    Reflect::set(&opts, &JsValue::from_str("segment_factor"), &JsValue::from_f64(0.0)).unwrap();
    let r = Morph::build_res(SQUARE, TRIANGLE, opts.into());
    assert!(is_err_code(&r, "invalid_options"));
    assert!(Morph::build("M0 0 X", SQUARE).is_none());
}

#[wasm_bindgen_test]
fn svg_at_res_checks_t() {
    let r = Morph::build_res(SQUARE, TRIANGLE, JsValue::NULL);
    assert!(is_ok(&r));
    let m = Morph::build(SQUARE, TRIANGLE).unwrap();
    assert!(is_err_code(&m.svg_at_res(f64::NAN), "non_finite"));
    assert!(is_err_code(&m.svg_at_res(1.5), "out_of_range"));
    assert!(is_ok(&m.svg_at_res(0.25)));
    assert!(is_err_code(&m.frames_res(0), "out_of_range"));
}

#[wasm_bindgen_test]
fn open_and_closed_shapes_share_a_command_stream() {
    let m = Morph::build("M0 0 L10 0 L10 10", SQUARE).unwrap();
    let len = |t: f64| Array::from(&m.commands_at(t)).length();
    assert_eq!(len(0.0), len(1.0));
    assert_eq!(len(0.5), len(0.0));
    assert!(!m.to_svg().ends_with('Z'));
}

#[wasm_bindgen_test]
fn json_documents_round_trip() {
    let m = Morph::build(SQUARE, TRIANGLE).unwrap();
    let from = m.from_json();
    let to = m.to_json();
    let again = Morph::build_json_res(from, to, JsValue::UNDEFINED);
    assert!(is_ok(&again));
    let cmds = m.commands_at(0.0);
    assert!(Array::is_array(&cmds));
}

// Deterministic LCG
struct Lcg(u64);
impl Lcg {
    fn next(&mut self) -> u64 { self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1); self.0 >> 33 }
}

#[wasm_bindgen_test]
fn fuzz_res_methods_never_throw() {
    let mut rng = Lcg(7);
    let alphabet = b"MLQCZmlqcz0123456789 -.";
    for _ in 0..300 {
        let d: String = (0..(rng.next() % 32)).map(|_| alphabet[(rng.next() % alphabet.len() as u64) as usize] as char).collect();
        let r = Morph::build_res(&d, SQUARE, JsValue::UNDEFINED);
        assert!(is_ok(&r) || is_err_code(&r, "svg_parse") || is_err_code(&r, "caps_exceeded"));
        if let Some(m) = Morph::build(&d, TRIANGLE) {
            let t = (rng.next() % 1000) as f64 / 999.0;
            assert!(is_ok(&m.svg_at_res(t)));
            assert_eq!(m.positions_at(t).length(), m.positions_at(0.0).length());
        }
    }
}
