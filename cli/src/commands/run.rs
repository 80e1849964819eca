//! `taskgate run`: one request through the gateway, no server.
use std::path::Path;

use serde_json::Value;
use taskgate_core::api::{AppContext, CliError, FileAttachment, TaskRequest};

use crate::commands::cli::RunArgs;
use crate::http::ErrorEnvelope;

/// Prints the result object on success, or the `{ "error": .. }` envelope before returning the
/// error for exit-code mapping.
pub async fn handle_run(args: RunArgs, ctx: &AppContext) -> Result<(), CliError> {
    let request = build_request(&args).await?;
    let gateway = ctx.build_gateway().await?;

    match gateway.execute(&request).await {
        Ok(result) => {
            println!("{}", to_pretty(&result)?);
            Ok(())
        }
        Err(e) => {
            println!("{}", to_pretty(&ErrorEnvelope::new(e.to_string()))?);
            Err(e.into())
        }
    }
}

pub async fn build_request(args: &RunArgs) -> Result<TaskRequest, CliError> {
    let mut request = TaskRequest::new(args.task.clone(), args.input.clone());
    for raw in &args.params {
        let (key, value) = parse_param(raw)?;
        request = request.with_parameter(key, value);
    }
    for path in &args.files {
        request = request.with_file(read_attachment(Path::new(path)).await?);
    }
    if let Some(context) = &args.context {
        request = request.with_context(context.clone());
    }
    Ok(request)
}

/// `KEY=VALUE`; VALUE is taken as JSON when it parses (`350`, `true`, `["a","b"]`), else as text.
pub fn parse_param(raw: &str) -> Result<(String, Value), CliError> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(CliError::Command(format!(
            "invalid --param '{}': expected KEY=VALUE",
            raw
        )));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::Command(format!(
            "invalid --param '{}': empty key",
            raw
        )));
    }
    let value =
        serde_json::from_str::<Value>(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

async fn read_attachment(path: &Path) -> Result<FileAttachment, CliError> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        CliError::Command(format!("failed to read {}: {}", path.display(), e))
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(FileAttachment::new(name, content))
}

fn to_pretty<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Command(format!("failed to render output: {}", e)))
}
