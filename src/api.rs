use crate::{error, interop, Morph};
use js_sys::{Array, Float64Array, Uint32Array};
use pathmorph::{MorphOptions, Path};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[derive(Serialize)]
struct MorphInfo {
    subpaths: usize,
    segments: usize,
    segment_counts: Vec<usize>,
    shortfall: usize,
}

fn options_from_js(v: JsValue) -> Result<MorphOptions, JsValue> {
    if v.is_undefined() || v.is_null() {
        return Ok(MorphOptions::default());
    }
    let opts: MorphOptions = serde_wasm_bindgen::from_value(v)
        .map_err(|e| error::invalid_options(e.to_string()))?;
    opts.validate().map_err(|e| error::from_morph(None, &e))?;
    Ok(opts)
}

fn parse_side(side: &'static str, d: &str) -> Result<Path, JsValue> {
    Path::from_svg(d).map_err(|e| error::from_morph(Some(side), &e))
}

fn json_side(side: &'static str, v: JsValue) -> Result<Path, JsValue> {
    let val = serde_wasm_bindgen::from_value::<serde_json::Value>(v)
        .map_err(|e| error::err("json_parse", e.to_string(), None))?;
    Path::from_json_value(val).map_err(|e| error::from_morph(Some(side), &e))
}

fn finish(from: &Path, to: &Path, options: &MorphOptions) -> JsValue {
    match Morph::rs_prepare(from, to, options) {
        Ok(m) => {
            let short = m.inner.shortfall();
            if short > 0 {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "pathmorph: padded {} zero-length segments on degenerate input",
                    short
                )));
            }
            error::ok(m.into())
        }
        Err(e) => error::from_morph(None, &e),
    }
}

#[wasm_bindgen]
impl Morph {
    /// Prepare from two SVG path strings with default options. `undefined` on
    /// malformed input.
    pub fn build(from_d: &str, to_d: &str) -> Option<Morph> {
        let from = Path::from_svg(from_d).ok()?;
        let to = Path::from_svg(to_d).ok()?;
        Morph::rs_prepare(&from, &to, &MorphOptions::default()).ok()
    }
    pub fn build_res(from_d: &str, to_d: &str, options: JsValue) -> JsValue {
        let options = match options_from_js(options) { Ok(o) => o, Err(e) => return e };
        let from = match parse_side("from", from_d) { Ok(p) => p, Err(e) => return e };
        let to = match parse_side("to", to_d) { Ok(p) => p, Err(e) => return e };
        finish(&from, &to, &options)
    }
    /// Prepare from two JSON path documents.
    pub fn build_json_res(from: JsValue, to: JsValue, options: JsValue) -> JsValue {
        let options = match options_from_js(options) { Ok(o) => o, Err(e) => return e };
        let from = match json_side("from", from) { Ok(p) => p, Err(e) => return e };
        let to = match json_side("to", to) { Ok(p) => p, Err(e) => return e };
        finish(&from, &to, &options)
    }

    pub fn from_svg(&self) -> String { self.inner.from().to_svg() }
    pub fn to_svg(&self) -> String { self.inner.to().to_svg() }
    pub fn from_json(&self) -> JsValue { path_json(self.inner.from()) }
    pub fn to_json(&self) -> JsValue { path_json(self.inner.to()) }

    pub fn svg_at(&self, t: f64) -> String { self.inner.at(t).to_svg() }
    pub fn svg_at_res(&self, t: f64) -> JsValue {
        match self.inner.try_at(t) {
            Ok(p) => error::ok(JsValue::from_str(&p.to_svg())),
            Err(e) => error::from_morph(None, &e),
        }
    }

    /// `n + 1` SVG strings from the source to the target shape.
    pub fn frames(&self, n: u32) -> Array {
        self.inner.frames(n as usize).iter().map(|p| JsValue::from_str(&p.to_svg())).collect()
    }
    pub fn frames_res(&self, n: u32) -> JsValue {
        match self.inner.try_frames(n as usize) {
            Ok(frames) => {
                let arr: Array = frames.iter().map(|p| JsValue::from_str(&p.to_svg())).collect();
                error::ok(arr.into())
            }
            Err(e) => error::from_morph(None, &e),
        }
    }

    /// Command objects (`{kind, to, ...}`) of the path at `t`.
    pub fn commands_at(&self, t: f64) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.at(t).commands()).unwrap_or(JsValue::NULL)
    }

    /// Flat `[x, y, ...]` of every subpath's start followed by each segment's
    /// control points and terminal point. The layout is identical for every `t`.
    pub fn positions_at(&self, t: f64) -> Float64Array {
        let path = self.inner.at(t);
        let mut out = Vec::with_capacity(path.segment_count() * 6 + path.subpaths().len() * 2);
        for sub in path.subpaths() {
            out.extend([sub.start().x, sub.start().y]);
            for seg in sub.segments() {
                for p in seg.control_points().into_iter().chain(seg.end_point()) {
                    out.extend([p.x, p.y]);
                }
            }
        }
        interop::arr_f64(&out)
    }

    pub fn segment_counts(&self) -> Uint32Array {
        let counts: Vec<u32> = self.inner.segment_counts().iter().map(|&c| c as u32).collect();
        interop::arr_u32(&counts)
    }
    pub fn shortfall(&self) -> u32 { self.inner.shortfall() as u32 }
    pub fn info(&self) -> JsValue {
        let counts = self.inner.segment_counts();
        let info = MorphInfo {
            subpaths: counts.len(),
            segments: counts.iter().sum(),
            segment_counts: counts,
            shortfall: self.inner.shortfall(),
        };
        serde_wasm_bindgen::to_value(&info).unwrap_or(JsValue::NULL)
    }
}

// Plain objects rather than `Map`s, so the result round-trips through JSON.stringify.
fn path_json(p: &Path) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    p.to_json_value()
        .ok()
        .and_then(|v| v.serialize(&serializer).ok())
        .unwrap_or(JsValue::NULL)
}
