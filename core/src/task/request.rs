use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A knowledge file supplied with a request. Content is raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub name: String,
    #[serde(default)]
    pub content: String,
}

impl FileAttachment {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// One incoming call. Built at request entry and dropped once the reply is produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskRequest {
    pub task_id: String,
    pub primary_input: String,
    pub parameters: Map<String, Value>,
    pub files: Vec<FileAttachment>,
    pub conversation_context: Option<String>,
}

impl TaskRequest {
    pub fn new(task_id: impl Into<String>, primary_input: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            primary_input: primary_input.into(),
            ..Self::default()
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    pub fn with_file(mut self, file: FileAttachment) -> Self {
        self.files.push(file);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.conversation_context = Some(context.into());
        self
    }
}
