use thiserror::Error;

use crate::config::BudgetConfig;
use crate::task::FileAttachment;

/// Coarse token estimate: `ceil(len / chars_per_token)`, where `len` is the UTF-16 length.
/// Characters outside the BMP count twice.
pub fn estimate_tokens(text: &str, chars_per_token: usize) -> usize {
    text.encode_utf16().count().div_ceil(chars_per_token.max(1))
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("File \"{file_name}\" is too large (~{estimated_tokens} tokens). Please remove it and try again.")]
pub struct BudgetRejection {
    pub file_name: String,
    pub estimated_tokens: usize,
    pub limit: usize,
}

/// Per-attachment size gate. Runs before any prompt is built or remote call is made.
#[derive(Debug, Clone, Copy)]
pub struct TokenBudgetGuard {
    max_tokens_per_file: usize,
    chars_per_token: usize,
}

impl TokenBudgetGuard {
    pub fn new(max_tokens_per_file: usize, chars_per_token: usize) -> Self {
        Self {
            max_tokens_per_file,
            chars_per_token: chars_per_token.max(1),
        }
    }

    pub fn from_config(cfg: &BudgetConfig) -> Self {
        Self::new(cfg.max_tokens_per_file, cfg.chars_per_token)
    }

    pub fn limit(&self) -> usize {
        self.max_tokens_per_file
    }

    /// Stops at the first attachment over the limit.
    pub fn check(&self, attachments: &[FileAttachment]) -> Result<(), BudgetRejection> {
        for file in attachments {
            let estimated_tokens = estimate_tokens(&file.content, self.chars_per_token);
            tracing::debug!(
                target: "taskgate.gateway",
                stage = "gateway.guard.file",
                file = %file.name,
                estimated_tokens,
                limit = self.max_tokens_per_file
            );
            if estimated_tokens > self.max_tokens_per_file {
                return Err(BudgetRejection {
                    file_name: file.name.clone(),
                    estimated_tokens,
                    limit: self.max_tokens_per_file,
                });
            }
        }
        Ok(())
    }
}

impl Default for TokenBudgetGuard {
    fn default() -> Self {
        Self::from_config(&BudgetConfig::default())
    }
}
