//! ServicesFactory implementation: builds the completion client from config for the CLI and server.
use async_trait::async_trait;
use taskgate_core::api::{AppConfig, CliError, Services, ServicesFactory};

use crate::factory;

pub struct PluginServicesFactory;

impl Default for PluginServicesFactory {
    fn default() -> Self {
        Self
    }
}

#[async_trait]
impl ServicesFactory for PluginServicesFactory {
    async fn build_services(&self, cfg: &AppConfig) -> Result<Services, CliError> {
        let completion = factory::build_completion(cfg)?;
        Ok(Services { completion })
    }
}
