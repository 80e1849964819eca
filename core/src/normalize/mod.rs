//! Reply normalization.
//!
//! Model output is advisory. Recovery runs in fixed, pure stages and never calls back to the
//! model: trim, strip a code fence, parse one JSON object, extract by schema. Anything that fails
//! to parse becomes a [`ResultMode::RawFallback`] result carrying the raw reply verbatim.

pub mod extract;
pub mod fence;

use serde_json::Value;

use crate::task::{OutputSchema, ResultMode, StructuredResult};

pub use extract::{empty_record, extract_fields, fallback_fields};
pub use fence::strip_fence;

pub fn normalize(raw: &str, schema: &OutputSchema) -> StructuredResult {
    let working = strip_fence(raw.trim());

    match serde_json::from_str::<Value>(working) {
        Ok(Value::Object(object)) => {
            let fields = extract_fields(&object, schema.fields);
            tracing::debug!(
                target: "taskgate.gateway",
                stage = "normalize.structured",
                keys = object.len(),
                fields = fields.len()
            );
            StructuredResult::new(ResultMode::Structured, fields)
        }
        other => {
            let reason = match other {
                Ok(_) => "not a json object".to_string(),
                Err(e) => e.to_string(),
            };
            tracing::debug!(
                target: "taskgate.gateway",
                stage = "normalize.fallback",
                raw_len = raw.len(),
                reason = %reason
            );
            StructuredResult::new(ResultMode::RawFallback, fallback_fields(raw, schema))
        }
    }
}
