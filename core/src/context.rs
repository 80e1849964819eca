use crate::budget::TokenBudgetGuard;
use crate::completion::CompletionClient;
use crate::config::AppConfig;
use crate::error::CliError;
use crate::gateway::TaskGateway;
use crate::task::ProfileRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct Services {
    pub completion: Arc<dyn CompletionClient>,
}

#[async_trait::async_trait]
pub trait ServicesFactory: Send + Sync {
    async fn build_services(&self, cfg: &AppConfig) -> Result<Services, CliError>;
}

#[derive(Clone)]
pub struct AppContext {
    cfg: AppConfig,
    services_factory: Option<Arc<dyn ServicesFactory>>,
}

impl AppContext {
    pub fn new(cfg: AppConfig, services_factory: Option<Arc<dyn ServicesFactory>>) -> Self {
        Self {
            cfg,
            services_factory,
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn with_config(&self, cfg: AppConfig) -> Self {
        Self {
            cfg,
            services_factory: self.services_factory.clone(),
        }
    }

    pub async fn build_services(&self) -> Result<Services, CliError> {
        let Some(factory) = self.services_factory.as_ref() else {
            return Err(CliError::Config(
                "services_factory missing (cannot build completion client)".into(),
            ));
        };
        factory.build_services(&self.cfg).await
    }

    /// Profiles with `[models]` overrides applied.
    pub fn registry(&self) -> ProfileRegistry {
        ProfileRegistry::builtin().with_model_overrides(&self.cfg.models)
    }

    /// Wires registry, budget guard and completion client into a ready gateway.
    pub async fn build_gateway(&self) -> Result<TaskGateway, CliError> {
        let services = self.build_services().await?;
        Ok(TaskGateway::new(
            Arc::new(self.registry()),
            TokenBudgetGuard::from_config(&self.cfg.budget),
            services.completion,
        ))
    }
}
