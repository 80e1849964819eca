use std::collections::BTreeMap;

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    Number,
    /// Rendered as `Yes` / `No`.
    Flag,
    /// Rendered as a comma-separated line.
    List,
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Flag => "flag",
            Self::List => "list",
        }
    }
}

/// One caller-supplied knob. `default` is already in rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub default: &'static str,
}

impl ParamSpec {
    pub const fn new(name: &'static str, kind: ParamKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            default,
        }
    }
}

/// Resolves supplied parameters against the declared spec.
///
/// Declared names always appear in the output (default when absent or null). Undeclared keys are
/// dropped. Never fails: odd value types are rendered as their JSON text.
pub fn resolve_parameters(
    spec: &[ParamSpec],
    supplied: &Map<String, Value>,
) -> BTreeMap<&'static str, String> {
    for key in supplied.keys() {
        if !spec.iter().any(|p| p.name == key.as_str()) {
            tracing::debug!(
                target: "taskgate.prompt",
                stage = "prompt.params.drop",
                param = %key,
                "dropping undeclared parameter"
            );
        }
    }

    spec.iter()
        .map(|p| {
            let rendered = match supplied.get(p.name) {
                None | Some(Value::Null) => p.default.to_string(),
                Some(v) => render_value(p, v),
            };
            (p.name, rendered)
        })
        .collect()
}

fn render_value(spec: &ParamSpec, value: &Value) -> String {
    match spec.kind {
        ParamKind::Text | ParamKind::Number => scalar_text(value),
        ParamKind::Flag => match flag_value(value) {
            Some(true) => "Yes".to_string(),
            Some(false) => "No".to_string(),
            None => spec.default.to_string(),
        },
        ParamKind::List => match value {
            Value::Array(items) => items.iter().map(scalar_text).collect::<Vec<_>>().join(", "),
            other => scalar_text(other),
        },
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn flag_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Some(true),
            "false" | "no" | "0" | "off" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SPEC: &[ParamSpec] = &[
        ParamSpec::new("tone", ParamKind::Text, ""),
        ParamSpec::new("detailLevel", ParamKind::Number, "50"),
        ParamSpec::new("useExamples", ParamKind::Flag, "No"),
        ParamSpec::new("ingredients", ParamKind::List, ""),
    ];

    fn supplied(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn test_defaults_fill_missing_and_null() {
        let out = resolve_parameters(SPEC, &supplied(json!({ "tone": null })));
        assert_eq!(out["tone"], "");
        assert_eq!(out["detailLevel"], "50");
        assert_eq!(out["useExamples"], "No");
        assert_eq!(out["ingredients"], "");
    }

    #[test]
    fn test_renders_by_kind() {
        let out = resolve_parameters(
            SPEC,
            &supplied(json!({
                "tone": "witty",
                "detailLevel": 80,
                "useExamples": true,
                "ingredients": ["paneer", "spinach", 2]
            })),
        );
        assert_eq!(out["tone"], "witty");
        assert_eq!(out["detailLevel"], "80");
        assert_eq!(out["useExamples"], "Yes");
        assert_eq!(out["ingredients"], "paneer, spinach, 2");
    }

    #[test]
    fn test_undeclared_keys_are_dropped() {
        let out = resolve_parameters(SPEC, &supplied(json!({ "temperature": 2.0 })));
        assert_eq!(out.len(), SPEC.len());
        assert!(!out.contains_key("temperature"));
    }

    #[test]
    fn test_lenient_values_never_reject() {
        let out = resolve_parameters(
            SPEC,
            &supplied(json!({
                "tone": 7,
                "detailLevel": "high",
                "useExamples": "maybe",
                "ingredients": "rice, dal"
            })),
        );
        assert_eq!(out["tone"], "7");
        assert_eq!(out["detailLevel"], "high");
        assert_eq!(out["useExamples"], "No");
        assert_eq!(out["ingredients"], "rice, dal");
    }

    #[test]
    fn test_flag_strings() {
        let out = resolve_parameters(SPEC, &supplied(json!({ "useExamples": "YES" })));
        assert_eq!(out["useExamples"], "Yes");
    }
}
