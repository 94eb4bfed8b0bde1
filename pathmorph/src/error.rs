//! Errors for the fallible surfaces: path data ingestion and morph options.
//!
//! Geometry itself never fails; degenerate input falls back to identity or
//! empty results.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MorphError {
    /// Malformed SVG path data.
    #[error("invalid path data at byte {offset}: {message}")]
    SvgParse { offset: usize, message: String },

    /// Input larger than an ingestion cap in `geometry::limits`.
    #[error("{what} exceeds the limit of {limit}")]
    LimitExceeded { what: &'static str, limit: usize },

    /// A JSON document that parsed but does not describe a path.
    #[error("invalid path document: {0}")]
    InvalidDocument(String),

    #[error("invalid morph options: {0}")]
    InvalidOptions(String),

    #[error("parameter '{0}' must be finite")]
    NonFinite(&'static str),

    #[error("parameter '{param}' out of range [{min}, {max}]: {got}")]
    OutOfRange {
        param: &'static str,
        min: f64,
        max: f64,
        got: f64,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MorphError {
    /// Stable machine-readable code, used by bindings.
    pub fn code(&self) -> &'static str {
        match self {
            MorphError::SvgParse { .. } => "svg_parse",
            MorphError::LimitExceeded { .. } => "caps_exceeded",
            MorphError::InvalidDocument(_) => "invalid_document",
            MorphError::InvalidOptions(_) => "invalid_options",
            MorphError::NonFinite(_) => "non_finite",
            MorphError::OutOfRange { .. } => "out_of_range",
            MorphError::Json(_) => "json_parse",
        }
    }

    pub(crate) fn svg(offset: usize, message: impl Into<String>) -> Self {
        MorphError::SvgParse {
            offset,
            message: message.into(),
        }
    }

    pub(crate) fn limit(what: &'static str, limit: usize) -> Self {
        MorphError::LimitExceeded { what, limit }
    }
}
