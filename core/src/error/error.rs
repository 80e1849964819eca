use thiserror::Error;

use super::transport::TransportError;
use crate::budget::BudgetRejection;

/// Per-request failures surfaced to the caller. Reply parsing problems are not here: they always
/// degrade to a fallback result instead.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("unknown task: {0}")]
    UnknownTask(String),
    #[error(transparent)]
    Rejected(#[from] BudgetRejection),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),
    #[error("command failed: {0}")]
    Command(String),
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
