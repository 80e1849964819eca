use serde::ser::{Serialize, SerializeMap, Serializer};

/// How a result was obtained from the model reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultMode {
    /// The reply parsed as a JSON object and fields were extracted by name.
    Structured,
    /// The reply was unusable; the raw text was preserved in the designated field.
    RawFallback,
}

impl ResultMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::RawFallback => "raw_fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Records(Vec<Record>),
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
            Self::Records(records) => records.serialize(serializer),
        }
    }
}

/// Ordered field set. Serializes as a JSON object in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(&'static str, FieldValue)>,
}

impl Record {
    pub fn new(fields: Vec<(&'static str, FieldValue)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn text(&self, name: &str) -> &str {
        match self.get(name) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn list(&self, name: &str) -> &[String] {
        match self.get(name) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }

    pub fn records(&self, name: &str) -> &[Record] {
        match self.get(name) {
            Some(FieldValue::Records(records)) => records,
            _ => &[],
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(n, _)| *n)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The normalized reply handed back to the caller.
///
/// Always carries every field of the task's output schema; nothing is ever null. Serializes to
/// the flat field object only, the mode is for logging and callers that care.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredResult {
    mode: ResultMode,
    fields: Record,
}

impl StructuredResult {
    pub fn new(mode: ResultMode, fields: Record) -> Self {
        Self { mode, fields }
    }

    pub fn mode(&self) -> ResultMode {
        self.mode
    }

    pub fn is_fallback(&self) -> bool {
        self.mode == ResultMode::RawFallback
    }

    pub fn fields(&self) -> &Record {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        self.fields.text(name)
    }

    pub fn list(&self, name: &str) -> &[String] {
        self.fields.list(name)
    }

    pub fn records(&self, name: &str) -> &[Record] {
        self.fields.records(name)
    }
}

impl Serialize for StructuredResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
