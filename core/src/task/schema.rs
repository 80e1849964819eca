//! Output schemas: the named fields a task expects back from the model.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextList,
    /// A list of flat records (text / text-list fields only).
    Records(&'static RecordSchema),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    pub const fn text_list(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::TextList,
        }
    }

    pub const fn records(name: &'static str, schema: &'static RecordSchema) -> Self {
        Self {
            name,
            kind: FieldKind::Records(schema),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct RecordSchema {
    pub fields: &'static [FieldSpec],
}

/// What the normalizer writes when the reply cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPlan {
    /// Raw reply goes into the primary text field; every other field stays empty.
    RawIntoPrimary,
    /// Primary field is a record list: emit one placeholder record, route the raw reply to
    /// `raw_field`, and fill `notices` with fixed per-locale messages.
    PlaceholderRecord {
        record: &'static [(&'static str, &'static str)],
        raw_field: &'static str,
        notices: &'static [(&'static str, &'static str)],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSchema {
    pub fields: &'static [FieldSpec],
    pub primary: &'static str,
    pub fallback: FallbackPlan,
}

impl OutputSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Renders the JSON shape the model is asked to return, e.g. `{"answer": "...", ...}`.
    pub fn describe(&self) -> String {
        let mut out = String::from("{\n");
        for (idx, field) in self.fields.iter().enumerate() {
            out.push_str(&format!("  \"{}\": ", field.name));
            describe_kind(&mut out, field.kind, "  ");
            if idx + 1 < self.fields.len() {
                out.push(',');
            }
            out.push('\n');
        }
        out.push('}');
        out
    }
}

fn describe_kind(out: &mut String, kind: FieldKind, indent: &str) {
    match kind {
        FieldKind::Text => out.push_str("\"...\""),
        FieldKind::TextList => out.push_str("[]"),
        FieldKind::Records(record) => {
            out.push_str("[\n");
            out.push_str(indent);
            out.push_str("  {\n");
            for (idx, field) in record.fields.iter().enumerate() {
                out.push_str(&format!("{}    \"{}\": ", indent, field.name));
                describe_kind(out, field.kind, indent);
                if idx + 1 < record.fields.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(indent);
            out.push_str("  }\n");
            out.push_str(indent);
            out.push(']');
        }
    }
}
