use pathmorph::MorphError;
use wasm_bindgen::prelude::*;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn invalid_options(message: impl Into<String>) -> JsValue {
    err("invalid_options", message, None)
}

/// Envelope for a core error, with the side (`from`/`to`) it came from when known.
pub fn from_morph(side: Option<&str>, e: &MorphError) -> JsValue {
    let d = new_obj();
    if let Some(s) = side { set_kv(&d, "side", &JsValue::from_str(s)); }
    match e {
        MorphError::SvgParse { offset, .. } => set_kv(&d, "offset", &JsValue::from_f64(*offset as f64)),
        MorphError::LimitExceeded { what, limit } => {
            set_kv(&d, "what", &JsValue::from_str(what));
            set_kv(&d, "limit", &JsValue::from_f64(*limit as f64));
        }
        MorphError::NonFinite(param) => set_kv(&d, "param", &JsValue::from_str(param)),
        MorphError::OutOfRange { param, min, max, got } => {
            set_kv(&d, "param", &JsValue::from_str(param));
            set_kv(&d, "min", &JsValue::from_f64(*min));
            set_kv(&d, "max", &JsValue::from_f64(*max));
            set_kv(&d, "got", &JsValue::from_f64(*got));
        }
        _ => {}
    }
    err(e.code(), e.to_string(), Some(d.into()))
}
