use anyhow::Result;
use std::sync::Arc;

use taskgate_core::api::{AppConfig, CompletionClient};

use crate::completion::OpenRouterClient;

pub fn build_completion(cfg: &AppConfig) -> Result<Arc<dyn CompletionClient>> {
    let client = OpenRouterClient::from_config(&cfg.upstream)?;
    tracing::debug!(
        target: "taskgate.completion",
        stage = "completion.client.build",
        client = %client.name(),
        url = %client.url(),
        has_key = !cfg.upstream.api_key.trim().is_empty()
    );
    Ok(Arc::new(client))
}
