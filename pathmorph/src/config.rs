//! Morph configuration, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::error::MorphError;
use crate::geometry::limits::{MAX_SEGMENT_FACTOR, MAX_SUBPATHS};
use crate::model::{Point, Weight};

/// How the two shapes are positioned relative to each other after
/// equalization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CentroidAlignment {
    /// Leave both shapes where they are.
    #[default]
    None,
    /// Move the target so its centroid sits on the source's centroid.
    Shared,
    /// Like `Shared`, but per subpath pair: each target subpath is moved onto
    /// the centroid of the source subpath it is paired with.
    Pairs,
    /// Move both shapes so their centroids sit on `center`.
    At { center: Point },
}

/// Per-side adjustments.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SideOptions {
    /// Start shift applied to every closed subpath on this side.
    pub shift: i64,
    /// Start shift per subpath pair, by index. Pairs past the end use `shift`.
    pub shifts: Vec<i64>,
    /// Weight profile used when adding segments on this side.
    pub weights: Vec<Weight>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MorphOptions {
    /// The equalization target is the larger segment count of a subpath
    /// pair times this factor.
    pub segment_factor: usize,
    pub from: SideOptions,
    pub to: SideOptions,
    pub centroid: CentroidAlignment,
}

impl SideOptions {
    pub fn shift_for(&self, pair: usize) -> i64 {
        self.shifts.get(pair).copied().unwrap_or(self.shift)
    }
}

impl Default for MorphOptions {
    fn default() -> Self {
        Self {
            segment_factor: 3,
            from: SideOptions::default(),
            to: SideOptions::default(),
            centroid: CentroidAlignment::None,
        }
    }
}

impl MorphOptions {
    /// Parse and validate. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, MorphError> {
        let opts: MorphOptions = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<(), MorphError> {
        if self.segment_factor < 1 || self.segment_factor > MAX_SEGMENT_FACTOR {
            return Err(MorphError::InvalidOptions(format!(
                "segment_factor must be between 1 and {}, got {}",
                MAX_SEGMENT_FACTOR, self.segment_factor
            )));
        }
        for (side, opts) in [("from", &self.from), ("to", &self.to)] {
            validate_weights(side, &opts.weights)?;
            if opts.shifts.len() > MAX_SUBPATHS {
                return Err(MorphError::InvalidOptions(format!(
                    "{side}.shifts holds more than {MAX_SUBPATHS} entries"
                )));
            }
        }
        if let CentroidAlignment::At { center } = self.centroid {
            if !center.is_finite() {
                return Err(MorphError::NonFinite("centroid.center"));
            }
        }
        Ok(())
    }
}

fn validate_weights(side: &str, weights: &[Weight]) -> Result<(), MorphError> {
    let mut last = f64::NEG_INFINITY;
    for (i, w) in weights.iter().enumerate() {
        if !w.start_percentage.is_finite() || !w.value.is_finite() {
            return Err(MorphError::InvalidOptions(format!(
                "{side}.weights[{i}] must be finite"
            )));
        }
        if w.value <= 0.0 {
            return Err(MorphError::InvalidOptions(format!(
                "{side}.weights[{i}].value must be positive"
            )));
        }
        if w.start_percentage < last {
            return Err(MorphError::InvalidOptions(format!(
                "{side}.weights must be ascending by start_percentage"
            )));
        }
        last = w.start_percentage;
    }
    Ok(())
}
