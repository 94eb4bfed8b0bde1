use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

/// A prepared morph between two paths, driven from JavaScript.
#[wasm_bindgen]
pub struct Morph { pub(crate) inner: pathmorph::MorphPair }

impl Morph {
    pub fn rs_prepare(from: &pathmorph::Path, to: &pathmorph::Path, options: &pathmorph::MorphOptions) -> Result<Morph, pathmorph::MorphError> {
        pathmorph::MorphPair::prepare(from, to, options).map(|inner| Morph { inner })
    }
    pub fn rs_pair(&self) -> &pathmorph::MorphPair { &self.inner }
}
