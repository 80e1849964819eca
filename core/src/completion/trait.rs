use async_trait::async_trait;

use super::models::LlmResponse;
use crate::error::TransportError;

/// One outbound completion call per invocation. Implementations never retry.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    fn name(&self) -> &str;

    async fn send(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        model_id: &str,
    ) -> Result<LlmResponse, TransportError>;
}
