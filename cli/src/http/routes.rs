//! HTTP route handlers

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use taskgate_core::api::StructuredResult;

use crate::http::{models::*, state::AppState};

// Attachments travel inline; oversized files must reach the budget guard, not die at the body limit.
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Stats key shared by every path segment that names no registered task.
pub const UNKNOWN_TASK_KEY: &str = "unknown";

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/tasks", get(tasks_handler))
        .route("/api/:task_id", post(task_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// POST /api/{taskId} - run one task
async fn task_handler(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    body: Result<Json<TaskRunRequest>, JsonRejection>,
) -> Result<Json<StructuredResult>, HttpServerError> {
    let stats_key = match state.gateway.registry().get(&task_id) {
        Some(profile) => profile.task_id,
        None => UNKNOWN_TASK_KEY,
    };
    state.record_request(stats_key);

    let result = run_task(&state, task_id, body).await;
    if result.is_err() {
        state.record_failure(stats_key);
    }
    result.map(Json)
}

async fn run_task(
    state: &AppState,
    task_id: String,
    body: Result<Json<TaskRunRequest>, JsonRejection>,
) -> Result<StructuredResult, HttpServerError> {
    let Json(req) = body.map_err(|rejection| {
        HttpServerError::InvalidRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let request = req.into_task_request(task_id);
    Ok(state.gateway.execute(&request).await?)
}

/// GET /api/tasks - list task profiles
async fn tasks_handler(State(state): State<AppState>) -> Json<TasksResponse> {
    state.record_request("/api/tasks");
    Json(TasksResponse {
        tasks: state
            .gateway
            .registry()
            .iter()
            .map(TaskSummary::from)
            .collect(),
    })
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    state.record_request("/health");
    let (uptime_seconds, requests_handled) = state
        .stats
        .read()
        .map(|stats| (stats.uptime_seconds(), stats.requests_total))
        .unwrap_or_default();

    Json(HealthResponse {
        status: "healthy".into(),
        session_id: state.session_id.clone(),
        uptime_seconds,
        requests_handled,
        timestamp: Local::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use taskgate_core::api::{
        CompletionClient, LlmResponse, ProfileRegistry, TaskGateway, TokenBudgetGuard,
        TransportError,
    };
    use tower::ServiceExt;

    struct MockClient {
        calls: AtomicUsize,
        reply: Result<&'static str, u16>,
    }

    #[async_trait]
    impl CompletionClient for MockClient {
        fn name(&self) -> &str {
            "mock"
        }

        async fn send(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
            _model_id: &str,
        ) -> Result<LlmResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Ok(text) => Ok(LlmResponse::new(text)),
                Err(code) => Err(TransportError::status_error(code, "Service Unavailable")),
            }
        }
    }

    fn create_test_state(reply: Result<&'static str, u16>) -> (AppState, Arc<MockClient>) {
        let client = Arc::new(MockClient {
            calls: AtomicUsize::new(0),
            reply,
        });
        let gateway = TaskGateway::new(
            Arc::new(ProfileRegistry::builtin()),
            TokenBudgetGuard::default(),
            client.clone(),
        );
        (AppState::new("test-session".into(), gateway), client)
    }

    async fn call(
        state: AppState,
        method: &str,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("content-type", "application/json");
        }
        let request = builder
            .body(body.map(Body::from).unwrap_or_else(Body::empty))
            .unwrap();
        let response = create_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_task_success_returns_flat_fields() {
        let (state, client) =
            create_test_state(Ok("```json\n{\"answer\":\"42\",\"reasoning\":\"because\"}\n```"));
        let body = json!({ "primaryInput": "meaning of life?" }).to_string();

        let (status, value) = call(state.clone(), "POST", "/api/qa-chatbot", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value, json!({ "answer": "42", "reasoning": "because" }));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);

        let stats = state.stats.read().unwrap();
        assert_eq!(stats.requests_by_endpoint.get("qa-chatbot"), Some(&1));
        assert_eq!(stats.errors_total, 0);
    }

    #[tokio::test]
    async fn test_unparseable_reply_is_still_200() {
        let (state, _) = create_test_state(Ok("The answer is 42, no particular reason."));
        let body = json!({ "primaryInput": "why?" }).to_string();
        let (status, value) = call(state, "POST", "/api/qa-chatbot", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            value,
            json!({ "answer": "The answer is 42, no particular reason.", "reasoning": "" })
        );
    }

    #[tokio::test]
    async fn test_oversized_file_is_400_without_upstream_call() {
        let (state, client) = create_test_state(Ok("{}"));
        let body = json!({
            "primaryInput": "summarize",
            "files": [{ "name": "huge.txt", "content": "a".repeat(400_000) }]
        })
        .to_string();

        let (status, value) =
            call(state.clone(), "POST", "/api/deepthink-assistant", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            value["error"],
            "File \"huge.txt\" is too large (~100000 tokens). Please remove it and try again."
        );
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
        let stats = state.stats.read().unwrap();
        assert_eq!(stats.errors_total, 1);
        assert_eq!(stats.errors_by_task.get("deepthink-assistant"), Some(&1));
    }

    #[tokio::test]
    async fn test_body_over_axum_default_limit_reaches_guard() {
        let (state, client) = create_test_state(Ok("{}"));
        let body = json!({
            "primaryInput": "summarize",
            "files": [{ "name": "log.txt", "content": "a".repeat(3 * 1024 * 1024) }]
        })
        .to_string();

        let (status, value) = call(state, "POST", "/api/qa-chatbot", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(value["error"].as_str().unwrap().contains("log.txt"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unnamed_file_is_accepted() {
        let (state, client) = create_test_state(Ok("{\"answer\":\"ok\"}"));
        let body = json!({
            "primaryInput": "what is in the file?",
            "files": [{ "name": "", "content": "small" }]
        })
        .to_string();

        let (status, value) = call(state, "POST", "/api/qa-chatbot", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["answer"], "ok");
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unnamed_oversized_file_gets_budget_rejection() {
        let (state, client) = create_test_state(Ok("{}"));
        let body = json!({
            "files": [{ "name": "", "content": "a".repeat(400_000) }]
        })
        .to_string();

        let (status, value) = call(state, "POST", "/api/qa-chatbot", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            value["error"],
            "File \"\" is too large (~100000 tokens). Please remove it and try again."
        );
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_odd_task_id_reaches_gateway() {
        let (state, client) = create_test_state(Ok("{}"));
        let (status, value) =
            call(state.clone(), "POST", "/api/qa%20chatbot!", Some("{}".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(value["error"], "unknown task: qa chatbot!");

        let oversized = json!({
            "files": [{ "name": "big.txt", "content": "a".repeat(400_000) }]
        })
        .to_string();
        let (status, value) = call(state, "POST", "/api/qa%20chatbot!", Some(oversized)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(value["error"].as_str().unwrap().contains("big.txt"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unregistered_ids_share_one_stats_key() {
        let (state, _) = create_test_state(Ok("{}"));
        for i in 0..50 {
            let uri = format!("/api/bogus-{i}");
            let (status, _) = call(state.clone(), "POST", &uri, Some("{}".into())).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }

        let stats = state.stats.read().unwrap();
        assert_eq!(stats.requests_total, 50);
        assert_eq!(stats.requests_by_endpoint.len(), 1);
        assert_eq!(stats.requests_by_endpoint.get(UNKNOWN_TASK_KEY), Some(&50));
        assert_eq!(stats.errors_by_task.len(), 1);
        assert_eq!(stats.errors_by_task.get(UNKNOWN_TASK_KEY), Some(&50));
    }

    #[tokio::test]
    async fn test_upstream_503_is_500_envelope() {
        let (state, client) = create_test_state(Err(503));
        let body = json!({ "primaryInput": "hello" }).to_string();
        let (status, value) = call(state, "POST", "/api/content-generator", Some(body)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(value["error"].as_str().unwrap().contains("503"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_task_is_404() {
        let (state, client) = create_test_state(Ok("{}"));
        let (status, value) = call(state, "POST", "/api/horoscope", Some("{}".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(value["error"], "unknown task: horoscope");
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let (state, client) = create_test_state(Ok("{}"));
        let (status, value) =
            call(state, "POST", "/api/qa-chatbot", Some("{not json".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(value["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_tasks_listing() {
        let (state, _) = create_test_state(Ok("{}"));
        let (status, value) = call(state, "GET", "/api/tasks", None).await;
        assert_eq!(status, StatusCode::OK);
        let tasks = value["tasks"].as_array().unwrap();
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks[1]["taskId"], "qa-chatbot");
        assert_eq!(tasks[1]["fields"], json!(["answer", "reasoning"]));
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _) = create_test_state(Ok("{}"));
        let (status, value) = call(state, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["status"], "healthy");
        assert_eq!(value["session_id"], "test-session");
        assert_eq!(value["requests_handled"], 1);
    }
}
