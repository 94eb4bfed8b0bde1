use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MorphError;
use crate::geometry::limits;
use crate::model::{Point, Segment};
use crate::path::Path;
use crate::subpath::Subpath;

const DOC_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SubpathDoc {
    start: Point,
    #[serde(default)]
    closed: bool,
    segments: Vec<Segment>,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathDoc {
    version: u32,
    subpaths: Vec<SubpathDoc>,
}

impl Path {
    pub fn to_json_value(&self) -> Result<Value, MorphError> {
        let doc = PathDoc {
            version: DOC_VERSION,
            subpaths: self
                .subpaths
                .iter()
                .map(|s| SubpathDoc {
                    start: s.start,
                    closed: s.is_closed(),
                    segments: s.segments.clone(),
                })
                .collect(),
        };
        Ok(serde_json::to_value(doc)?)
    }

    /// Strict load: version, size caps, finite in-bounds coordinates and
    /// drawable segments only.
    pub fn from_json_value(v: Value) -> Result<Path, MorphError> {
        let doc: PathDoc = serde_json::from_value(v)?;
        if doc.version != DOC_VERSION {
            return Err(MorphError::InvalidDocument(format!(
                "unsupported version {}",
                doc.version
            )));
        }
        if doc.subpaths.len() > limits::MAX_SUBPATHS {
            return Err(MorphError::limit("subpaths", limits::MAX_SUBPATHS));
        }
        let mut total = 0usize;
        let mut subpaths = Vec::with_capacity(doc.subpaths.len());
        for (i, sub) in doc.subpaths.into_iter().enumerate() {
            total += sub.segments.len();
            if total > limits::MAX_SEGMENTS {
                return Err(MorphError::limit("segments", limits::MAX_SEGMENTS));
            }
            check_point(sub.start, i)?;
            for seg in &sub.segments {
                if !seg.is_splittable() {
                    return Err(MorphError::InvalidDocument(format!(
                        "subpaths[{i}] holds a {:?} segment",
                        seg.kind()
                    )));
                }
                for p in seg.control_points().into_iter().chain(seg.end_point()) {
                    check_point(p, i)?;
                }
            }
            subpaths.push(Subpath::new(sub.start, sub.segments, sub.closed));
        }
        Ok(Path::new(subpaths))
    }

    pub fn from_json_str(s: &str) -> Result<Path, MorphError> {
        Path::from_json_value(serde_json::from_str(s)?)
    }
}

fn check_point(p: Point, subpath: usize) -> Result<(), MorphError> {
    if limits::in_coord_bounds(p.x) && limits::in_coord_bounds(p.y) {
        Ok(())
    } else {
        Err(MorphError::InvalidDocument(format!(
            "subpaths[{subpath}] coordinate out of range"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_round_trip() {
        let p = Path::from_svg("M0 0 L10 0 Q15 5 10 10 Z M20 0 C21 1 22 1 23 0").unwrap();
        let v = p.to_json_value().unwrap();
        assert_eq!(v["version"], 1);
        assert_eq!(v["subpaths"][0]["closed"], true);
        assert_eq!(v["subpaths"][0]["segments"][1]["kind"], "quad");
        assert_eq!(v["subpaths"][1]["segments"][0]["kind"], "cubic");
        assert_eq!(Path::from_json_value(v).unwrap(), p);
    }

    #[test]
    fn closed_defaults_to_false() {
        let p = Path::from_json_value(json!({
            "version": 1,
            "subpaths": [{
                "start": {"x": 0.0, "y": 0.0},
                "segments": [{"kind": "line", "to": {"x": 1.0, "y": 0.0}}]
            }]
        }))
        .unwrap();
        assert!(!p.subpaths()[0].is_closed());
    }

    #[test]
    fn rejects_bad_documents() {
        let wrong_version = json!({"version": 2, "subpaths": []});
        assert_eq!(Path::from_json_value(wrong_version).unwrap_err().code(), "invalid_document");

        let structural = json!({"version": 1, "subpaths": [{
            "start": {"x": 0.0, "y": 0.0},
            "segments": [{"kind": "close"}]
        }]});
        assert_eq!(Path::from_json_value(structural).unwrap_err().code(), "invalid_document");

        let far = json!({"version": 1, "subpaths": [{
            "start": {"x": 0.0, "y": 0.0},
            "segments": [{"kind": "line", "to": {"x": 1e12, "y": 0.0}}]
        }]});
        assert_eq!(Path::from_json_value(far).unwrap_err().code(), "invalid_document");

        let unknown = json!({"version": 1, "subpaths": [], "extra": 1});
        assert_eq!(Path::from_json_value(unknown).unwrap_err().code(), "json_parse");

        assert_eq!(Path::from_json_str("[").unwrap_err().code(), "json_parse");
    }
}
