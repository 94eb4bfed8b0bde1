// Centralized tolerances and helpers for robust geometry

pub const EPS_LEN: f64 = 1e-12;           // zero-length vector threshold
pub const EPS_DENOM: f64 = 1e-12;         // denominator guard for ratios

// Default flattening tolerance for arc-length sampling (path units)
pub const DEFAULT_ARC_TOLERANCE: f64 = 1e-3;

// Adaptive subdivision cap
pub const MAX_SUBDIVISION_DEPTH: u32 = 16;

#[inline] pub fn clamp01(x: f64) -> f64 { x.clamp(0.0, 1.0) }
#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

#[inline]
pub fn safe_div(num: f64, den: f64, fallback: f64) -> f64 {
    if den.abs() <= EPS_DENOM { fallback } else { num / den }
}
