use async_trait::async_trait;
use taskgate_core::api::{
    ChatCompletionReply, ChatCompletionRequest, CompletionClient, LlmResponse, TransportError,
    TransportErrorKind, UpstreamConfig,
};

const BODY_PREVIEW_LIMIT: usize = 512;

fn transport_from_reqwest(err: reqwest::Error) -> TransportError {
    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if err.is_connect() {
        TransportErrorKind::Connect
    } else if err.is_request() {
        TransportErrorKind::Request
    } else if err.is_body() {
        TransportErrorKind::Body
    } else if err.is_decode() {
        TransportErrorKind::Decode
    } else {
        TransportErrorKind::Unknown
    };
    let status = err.status().map(|s| s.as_u16());
    TransportError::new(kind, err.to_string())
        .with_status(status)
        .with_source(err)
}

fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }

    let mut out: String = trimmed.chars().take(BODY_PREVIEW_LIMIT).collect();
    if trimmed.chars().nth(BODY_PREVIEW_LIMIT).is_some() {
        out.push_str("...");
    }
    out
}

/// OpenAI-compatible chat completion client (OpenRouter by default).
///
/// The credential is fixed at construction and always sent as a bearer token, even when empty;
/// the upstream decides whether it is acceptable. No request timeout is set.
#[derive(Clone)]
pub struct OpenRouterClient {
    api_key: String,
    http: reqwest::Client,
    url_completions: String,
}

impl OpenRouterClient {
    pub fn new(url_completions: String, api_key: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            api_key,
            http,
            url_completions,
        })
    }

    pub fn from_config(cfg: &UpstreamConfig) -> anyhow::Result<Self> {
        Self::new(cfg.completions_url(), cfg.api_key.clone())
    }

    pub fn url(&self) -> &str {
        &self.url_completions
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn send(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        model_id: &str,
    ) -> Result<LlmResponse, TransportError> {
        let url = &self.url_completions;
        let payload = ChatCompletionRequest::new(model_id, system_prompt, user_prompt);
        tracing::debug!(
            target: "taskgate.completion",
            stage = "completion.http.in",
            url = %url,
            model = %model_id,
            system_len = system_prompt.len(),
            user_len = user_prompt.len()
        );

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(transport_from_reqwest)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport_from_reqwest)?;

        if !status.is_success() {
            tracing::debug!(
                target: "taskgate.completion",
                stage = "completion.http.status",
                status = %status,
                body = %preview_body(&body)
            );
            return Err(TransportError::status_error(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        let reply: ChatCompletionReply = serde_json::from_str(&body).map_err(|err| {
            TransportError::new(
                TransportErrorKind::Decode,
                format!(
                    "failed to decode response body: {} | body={}",
                    err,
                    preview_body(&body)
                ),
            )
            .with_status(Some(status.as_u16()))
            .with_source(err)
        })?;

        let content = reply.first_content().to_string();
        tracing::debug!(
            target: "taskgate.completion",
            stage = "completion.http.out",
            status = %status,
            model = ?reply.model,
            choices = reply.choices.len(),
            content_len = content.len()
        );

        Ok(LlmResponse {
            content,
            status: status.as_u16(),
            model: reply.model,
        })
    }
}
