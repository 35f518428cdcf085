//! Flat key/value encoding

use crate::error::Result;
use crate::provenance::{Provenance, DISCLOSURE_KEY, GENERATION_INFO_KEY};
use clerk_domain::AssembledBrief;
use serde_json::{Map, Value};

/// Brief fields in order, followed by the two provenance fields
pub fn to_json(brief: &AssembledBrief, provenance: &Provenance) -> Map<String, Value> {
    let mut object: Map<String, Value> = brief
        .iter()
        .map(|(field, value)| (field.title().to_string(), Value::from(value)))
        .collect();
    object.insert(
        GENERATION_INFO_KEY.to_string(),
        Value::from(provenance.generation_note()),
    );
    object.insert(
        DISCLOSURE_KEY.to_string(),
        Value::from(provenance.disclosure()),
    );
    object
}

/// Pretty-printed JSON document
pub fn render(brief: &AssembledBrief, provenance: &Provenance) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json(brief, provenance))?)
}
