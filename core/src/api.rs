//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `taskgate_core::api` instead of reaching into internal modules.

pub use crate::budget::{estimate_tokens, BudgetRejection, TokenBudgetGuard};
pub use crate::completion::{
    ChatCompletionReply, ChatCompletionRequest, ChatMessage, CompletionClient, LlmResponse,
};
pub use crate::config::{
    apply_env_overrides, load_default, load_from_path, AppConfig, BudgetConfig, HttpServerConfig,
    LoggingConfig, UpstreamConfig,
};
pub use crate::context::{AppContext, Services, ServicesFactory};
pub use crate::error::{CliError, GatewayError, TransportError, TransportErrorKind};
pub use crate::gateway::TaskGateway;
pub use crate::normalize::normalize;
pub use crate::prompt::{PromptBuilder, PromptPair};
pub use crate::task::{
    FieldValue, FileAttachment, ParamKind, ParamSpec, ProfileRegistry, Record, ResultMode,
    StructuredResult, TaskProfile, TaskRequest,
};
