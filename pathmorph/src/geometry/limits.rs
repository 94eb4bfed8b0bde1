// Centralized ingestion limits to harden against untrusted input (JSON/SVG)

// Document size caps
pub const MAX_SUBPATHS: usize = 10_000;
pub const MAX_SEGMENTS: usize = 500_000; // across all subpaths

// SVG caps
pub const MAX_SVG_TOKENS: usize = 8 * 1024 * 1024; // 8 MB worth of characters in the 'd' string
pub const MAX_SVG_COMMANDS: usize = 200_000;
pub const MAX_SVG_SUBPATHS: usize = 10_000;
pub const MAX_SVG_SEGMENTS: usize = 200_000;

// Morph caps
pub const MAX_SEGMENT_FACTOR: usize = 64;
pub const MAX_MORPH_SEGMENTS: usize = 1_000_000; // equalized segments per subpath pair
pub const MAX_FRAMES: usize = 10_000;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 =  10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }
