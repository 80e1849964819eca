use serde_json::{Map, Value};

use crate::task::{FallbackPlan, FieldKind, FieldSpec, FieldValue, OutputSchema, Record};

/// Pulls every declared field out of a parsed object. Absent or mistyped fields get the zero
/// value for their kind.
pub fn extract_fields(object: &Map<String, Value>, fields: &'static [FieldSpec]) -> Record {
    Record::new(
        fields
            .iter()
            .map(|spec| (spec.name, extract_value(object.get(spec.name), spec.kind)))
            .collect(),
    )
}

fn extract_value(value: Option<&Value>, kind: FieldKind) -> FieldValue {
    match kind {
        FieldKind::Text => FieldValue::Text(value.map(text_of).unwrap_or_default()),
        FieldKind::TextList => FieldValue::List(match value {
            Some(Value::Array(items)) => items.iter().map(text_of).collect(),
            // a lone string is still a one-step list
            Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        }),
        FieldKind::Records(record) => FieldValue::Records(match value {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_object)
                .map(|item| extract_fields(item, record.fields))
                .collect(),
            _ => Vec::new(),
        }),
    }
}

/// Scalars as their natural text; nested structures as compact JSON. `null` is empty.
fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Zero-valued record for a field set.
pub fn empty_record(fields: &'static [FieldSpec]) -> Record {
    Record::new(
        fields
            .iter()
            .map(|spec| (spec.name, zero_value(spec.kind)))
            .collect(),
    )
}

fn zero_value(kind: FieldKind) -> FieldValue {
    match kind {
        FieldKind::Text => FieldValue::Text(String::new()),
        FieldKind::TextList => FieldValue::List(Vec::new()),
        FieldKind::Records(_) => FieldValue::Records(Vec::new()),
    }
}

/// Builds the fallback field set for an unparseable reply. `raw` is stored verbatim.
pub fn fallback_fields(raw: &str, schema: &OutputSchema) -> Record {
    match schema.fallback {
        FallbackPlan::RawIntoPrimary => Record::new(
            schema
                .fields
                .iter()
                .map(|spec| {
                    if spec.name == schema.primary {
                        (spec.name, FieldValue::Text(raw.to_string()))
                    } else {
                        (spec.name, zero_value(spec.kind))
                    }
                })
                .collect(),
        ),
        FallbackPlan::PlaceholderRecord {
            record,
            raw_field,
            notices,
        } => Record::new(
            schema
                .fields
                .iter()
                .map(|spec| {
                    let value = match spec.kind {
                        FieldKind::Records(item) if spec.name == schema.primary => {
                            FieldValue::Records(vec![placeholder_record(item.fields, record)])
                        }
                        _ if spec.name == raw_field => FieldValue::Text(raw.to_string()),
                        FieldKind::Text => FieldValue::Text(lookup(notices, spec.name)),
                        kind => zero_value(kind),
                    };
                    (spec.name, value)
                })
                .collect(),
        ),
    }
}

fn placeholder_record(
    fields: &'static [FieldSpec],
    texts: &'static [(&'static str, &'static str)],
) -> Record {
    Record::new(
        fields
            .iter()
            .map(|spec| match spec.kind {
                FieldKind::Text => (spec.name, FieldValue::Text(lookup(texts, spec.name))),
                kind => (spec.name, zero_value(kind)),
            })
            .collect(),
    )
}

fn lookup(pairs: &[(&str, &str)], name: &str) -> String {
    pairs
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, text)| text.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::RecordSchema;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    static STEP: RecordSchema = RecordSchema {
        fields: &[FieldSpec::text("title"), FieldSpec::text_list("steps")],
    };

    static FIELDS: &[FieldSpec] = &[
        FieldSpec::text("answer"),
        FieldSpec::text_list("tags"),
        FieldSpec::records("items", &STEP),
    ];

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_scalars_become_text() {
        let record = extract_fields(
            &object(json!({ "answer": 42, "tags": [1, true, null, "x"] })),
            FIELDS,
        );
        assert_eq!(record.text("answer"), "42");
        assert_eq!(record.list("tags"), ["1", "true", "", "x"]);
        assert!(record.records("items").is_empty());
    }

    #[test]
    fn test_null_and_absent_are_empty() {
        let record = extract_fields(&object(json!({ "answer": null })), FIELDS);
        assert_eq!(record.text("answer"), "");
        assert_eq!(record.names().collect::<Vec<_>>(), vec!["answer", "tags", "items"]);
    }

    #[test]
    fn test_records_skip_non_objects() {
        let record = extract_fields(
            &object(json!({
                "items": [
                    { "title": "one", "steps": ["a", "b"], "extra": 1 },
                    "junk",
                    { "steps": "only step" }
                ]
            })),
            FIELDS,
        );
        let items = record.records("items");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text("title"), "one");
        assert_eq!(items[0].list("steps"), ["a", "b"]);
        assert!(items[0].get("extra").is_none());
        assert_eq!(items[1].text("title"), "");
        assert_eq!(items[1].list("steps"), ["only step"]);
    }

    #[test]
    fn test_nested_object_in_text_field_is_compact_json() {
        let record = extract_fields(&object(json!({ "answer": { "k": "v" } })), FIELDS);
        assert_eq!(record.text("answer"), r#"{"k":"v"}"#);
    }

    #[test]
    fn test_empty_record_has_every_field() {
        let record = empty_record(FIELDS);
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("tags"), Some(&FieldValue::List(vec![])));
    }
}
