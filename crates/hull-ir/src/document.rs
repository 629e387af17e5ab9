//! The `.hull.json` document format.

use serde::{Deserialize, Serialize};

use crate::{Hull2DLineData, HullBasicParams, OffsetTable};

/// A hullcad document: principal dimensions, the lines plan and an optional
/// offset table for grid lofting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HullDocument {
    /// Format version string (e.g. "0.1").
    pub version: String,
    /// Principal dimensions.
    pub params: HullBasicParams,
    /// Lines plan control points.
    pub lines: Hull2DLineData,
    /// Station × waterline table, if the design has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offsets: Option<OffsetTable>,
}

impl HullDocument {
    /// Create a document without an offset table.
    pub fn new(params: HullBasicParams, lines: Hull2DLineData) -> Self {
        Self {
            version: "0.1".to_string(),
            params,
            lines,
            offsets: None,
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{points, CrossSection};

    #[test]
    fn roundtrip_document() {
        let params = HullBasicParams::new(12.0, 4.0, 3.0, 2.5, 100.0).with_loa(12.5);
        let lines = Hull2DLineData::new(
            points(&[(0.0, 0.0), (6.0, 2.0), (12.0, 0.0)]),
            points(&[(0.0, 0.5), (6.0, 2.0), (12.0, 0.5)]),
            vec![CrossSection::new(
                6.0,
                points(&[(0.0, 0.0), (2.0, 0.5), (2.0, 3.0), (-2.0, 3.0), (-2.0, 0.5)]),
            )],
        );
        let mut doc = HullDocument::new(params, lines);
        doc.offsets = Some(OffsetTable::new(
            vec![0.0, 12.0],
            vec![0.0, 3.0],
            vec![vec![0.5, 0.5], vec![0.5, 0.5]],
        ));

        let json = doc.to_json().expect("serialize");
        let restored = HullDocument::from_json(&json).expect("deserialize");
        assert_eq!(doc, restored);
    }

    #[test]
    fn offsets_are_optional() {
        let doc = HullDocument::new(
            HullBasicParams::new(12.0, 4.0, 3.0, 2.5, 100.0),
            Hull2DLineData::empty(),
        );
        let json = doc.to_json().unwrap();
        assert!(!json.contains("offsets"));
        let restored = HullDocument::from_json(&json).unwrap();
        assert!(restored.offsets.is_none());
        assert_eq!(restored.version, "0.1");
    }
}
