//! HTTP request / response models

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use taskgate_core::api::{FileAttachment, GatewayError, TaskProfile, TaskRequest};

// ============= Task Run =============

/// Body of `POST /api/{taskId}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRunRequest {
    #[serde(default)]
    pub primary_input: String,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default)]
    pub files: Vec<FileAttachment>,
    #[serde(default)]
    pub conversation_context: Option<String>,
}

impl TaskRunRequest {
    pub fn into_task_request(self, task_id: impl Into<String>) -> TaskRequest {
        TaskRequest {
            task_id: task_id.into(),
            primary_input: self.primary_input,
            parameters: self.parameters,
            files: self.files,
            conversation_context: self.conversation_context,
        }
    }
}

// ============= Health =============

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub session_id: String,
    pub uptime_seconds: f64,
    pub requests_handled: u64,
    pub timestamp: String,
}

// ============= Task Listing =============

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub task_id: String,
    pub title: String,
    pub model: String,
    pub parameters: Vec<String>,
    pub fields: Vec<String>,
}

impl From<&TaskProfile> for TaskSummary {
    fn from(profile: &TaskProfile) -> Self {
        Self {
            task_id: profile.task_id.to_string(),
            title: profile.title.to_string(),
            model: profile.upstream_model_id.clone(),
            parameters: profile
                .parameter_spec
                .iter()
                .map(|p| p.name.to_string())
                .collect(),
            fields: profile
                .output_schema
                .field_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<TaskSummary>,
}

// ============= Error Handling =============

/// `{ "error": "..." }`, the only failure shape callers see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug)]
pub enum HttpServerError {
    InvalidRequest(String),
    UnknownTask(String),
    Upstream(String),
    Internal(String),
}

impl HttpServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnknownTask(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidRequest(msg)
            | Self::UnknownTask(msg)
            | Self::Upstream(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

impl From<GatewayError> for HttpServerError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Rejected(rejection) => Self::InvalidRequest(rejection.to_string()),
            GatewayError::UnknownTask(_) => Self::UnknownTask(err.to_string()),
            GatewayError::Transport(e) => Self::Upstream(e.to_string()),
        }
    }
}

impl IntoResponse for HttpServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorEnvelope::new(self.message()))).into_response()
    }
}
