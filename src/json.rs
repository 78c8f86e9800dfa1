use serde_json::Value;

use crate::geometry::tolerance::Tolerances;
use crate::model::Segment;

pub fn segments_to_json(segments: &[Segment]) -> Result<Value, serde_json::Error> {
    serde_json::to_value(segments)
}

pub fn segments_from_json(v: Value) -> Result<Vec<Segment>, serde_json::Error> {
    serde_json::from_value(v)
}

/// Read a tolerance configuration from a JSON object. Missing fields
/// fall back to their defaults, so callers can override selectively.
pub fn tolerances_from_json(v: Value) -> Result<Tolerances, serde_json::Error> {
    serde_json::from_value(v)
}
