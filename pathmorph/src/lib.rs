//! Path normalization and segment matching for shape morphing.
//!
//! Two vector paths are brought to the same segment structure (same number
//! of subpaths, same number of cubic segments per subpath) so that every
//! point of one can be linearly interpolated toward its partner in the other.

pub mod config;
pub mod error;
pub mod model;
pub mod path;
pub mod segment;
pub mod subpath;
pub mod geometry {
    pub mod bezier;
    pub mod limits;
    pub mod polygon;
    pub mod tolerance;
    pub mod vector;
}
pub mod algorithms {
    pub mod align;
    pub mod equalize;
    pub mod morph;
    pub mod sample;
}
mod json;
mod svg;

pub use algorithms::morph::MorphPair;
pub use algorithms::sample::PathPoint;
pub use config::{CentroidAlignment, MorphOptions, SideOptions};
pub use error::MorphError;
pub use geometry::bezier::Bezier;
pub use model::{Point, Segment, SegmentKind, Vector, Weight};
pub use path::{Path, PathSink, PathSource};
pub use subpath::Subpath;
pub use svg::SvgPathWriter;
