use serde::{Deserialize, Serialize};

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";

/// What came back from the upstream, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmResponse {
    pub content: String,
    pub status: u16,
    pub model: Option<String>,
}

impl LlmResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            status: 200,
            model: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ROLE_SYSTEM.to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ROLE_USER.to_string(),
            content: content.into(),
        }
    }
}

/// OpenAI-compatible `/chat/completions` body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    pub fn new(model_id: &str, system_prompt: &str, user_prompt: &str) -> Self {
        Self {
            model: model_id.to_string(),
            messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(user_prompt)],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionReply {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChatReplyMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatReplyMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionReply {
    /// `choices[0].message.content`, or empty when any step is missing.
    pub fn first_content(&self) -> &str {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .unwrap_or_default()
    }
}
