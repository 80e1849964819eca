use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub http_server: HttpServerConfig,

    #[serde(default)]
    pub budget: BudgetConfig,

    /// Per-task model overrides keyed by task id, e.g. `qa-chatbot = "openai/gpt-4o"`.
    #[serde(default)]
    pub models: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "taskgate_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    false
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}

/// Upstream OpenAI-compatible completion endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_upstream_base_url")]
    pub base_url: String,

    #[serde(default = "default_completions_path")]
    pub completions_path: String,

    /// Bearer credential. Usually supplied through `OPENROUTER_API_KEY` rather than the file.
    #[serde(default)]
    pub api_key: String,
}

fn default_upstream_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_completions_path() -> String {
    "/chat/completions".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_base_url(),
            completions_path: default_completions_path(),
            api_key: String::new(),
        }
    }
}

impl UpstreamConfig {
    pub fn completions_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.completions_path.trim();
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

// Keeps the credential out of `{:?}` output (config is logged at debug on startup).
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("completions_path", &self.completions_path)
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    "<unset>"
                } else {
                    "<redacted>"
                },
            )
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_http_host")]
    pub host: String,

    #[serde(default = "default_http_port")]
    pub port: u16,
}

fn default_http_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    8080
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_http_host(),
            port: default_http_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Per-attachment ceiling on estimated tokens.
    #[serde(default = "default_max_tokens_per_file")]
    pub max_tokens_per_file: usize,

    #[serde(default = "default_chars_per_token")]
    pub chars_per_token: usize,
}

fn default_max_tokens_per_file() -> usize {
    80_000
}

fn default_chars_per_token() -> usize {
    4
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            max_tokens_per_file: default_max_tokens_per_file(),
            chars_per_token: default_chars_per_token(),
        }
    }
}
