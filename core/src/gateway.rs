use std::sync::Arc;
use std::time::Instant;

use crate::budget::TokenBudgetGuard;
use crate::completion::CompletionClient;
use crate::error::GatewayError;
use crate::normalize::normalize;
use crate::prompt::PromptBuilder;
use crate::task::{ProfileRegistry, StructuredResult, TaskRequest};

/// Runs one request through guard, prompt, completion and normalization.
///
/// Holds only read-only state; share it behind an `Arc` and call concurrently.
#[derive(Clone)]
pub struct TaskGateway {
    registry: Arc<ProfileRegistry>,
    guard: TokenBudgetGuard,
    client: Arc<dyn CompletionClient>,
}

impl TaskGateway {
    pub fn new(
        registry: Arc<ProfileRegistry>,
        guard: TokenBudgetGuard,
        client: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            registry,
            guard,
            client,
        }
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    pub fn guard(&self) -> &TokenBudgetGuard {
        &self.guard
    }

    pub async fn execute(&self, request: &TaskRequest) -> Result<StructuredResult, GatewayError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        tracing::info!(
            target: "taskgate.gateway",
            stage = "gateway.start",
            request_id = %request_id,
            task_id = %request.task_id,
            files = request.files.len(),
            params = request.parameters.len()
        );

        if let Err(rejection) = self.guard.check(&request.files) {
            tracing::warn!(
                target: "taskgate.gateway",
                stage = "gateway.guard.reject",
                request_id = %request_id,
                file = %rejection.file_name,
                estimated_tokens = rejection.estimated_tokens,
                limit = rejection.limit
            );
            return Err(rejection.into());
        }

        let Some(profile) = self.registry.get(&request.task_id) else {
            tracing::warn!(
                target: "taskgate.gateway",
                stage = "gateway.profile.unknown",
                request_id = %request_id,
                task_id = %request.task_id
            );
            return Err(GatewayError::UnknownTask(request.task_id.clone()));
        };

        let prompt = PromptBuilder::build(profile, request);

        let reply = self
            .client
            .send(&prompt.system, &prompt.user, &profile.upstream_model_id)
            .await
            .map_err(|e| {
                tracing::warn!(
                    target: "taskgate.gateway",
                    stage = "gateway.completion.error",
                    request_id = %request_id,
                    client = %self.client.name(),
                    model = %profile.upstream_model_id,
                    kind = %e.kind(),
                    status = ?e.status(),
                    error = %e
                );
                GatewayError::from(e)
            })?;

        let result = normalize(&reply.content, &profile.output_schema);

        tracing::info!(
            target: "taskgate.gateway",
            stage = "gateway.done",
            request_id = %request_id,
            task_id = %profile.task_id,
            model = %profile.upstream_model_id,
            reply_len = reply.content.len(),
            mode = result.mode().as_str(),
            elapsed_ms = started.elapsed().as_millis() as u64
        );

        Ok(result)
    }
}
