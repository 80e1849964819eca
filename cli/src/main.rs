use clap::Parser;
use std::sync::Arc;
use taskgate_cli::{commands, http};
use taskgate_core::api::{AppContext, CliError, GatewayError, LoggingConfig};
use taskgate_plugins::services::PluginServicesFactory;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::cli;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let cfg = taskgate_core::api::load_default().map_err(|e| CliError::Config(e.to_string()))?;
    init_tracing(&cfg.logging).map_err(CliError::Command)?;
    tracing::debug!(target: "taskgate.gateway", config = ?cfg, "configuration loaded");

    let ctx = AppContext::new(cfg, Some(Arc::new(PluginServicesFactory)));
    dispatch(args.command, &ctx).await?;
    Ok(0)
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 11: config error
    // 20: command / IO error
    // 30: request rejected (oversized file, unknown task)
    // 40: upstream completion failure
    // 50: internal/uncategorized
    match e {
        CliError::Config(_) => 11,
        CliError::Command(_) | CliError::Io(_) => 20,
        CliError::Gateway(ge) => match ge {
            GatewayError::Rejected(_) | GatewayError::UnknownTask(_) => 30,
            GatewayError::Transport(_) => 40,
        },
        CliError::Anyhow(_) => 50,
    }
}

async fn dispatch(cmd: cli::Commands, ctx: &AppContext) -> Result<(), CliError> {
    match cmd {
        cli::Commands::Serve(serve_args) => http::handle_http_server(serve_args, ctx).await,
        cli::Commands::Run(run_args) => commands::run::handle_run(run_args, ctx).await,
        cli::Commands::Tasks(tasks_args) => commands::tasks::handle_tasks(tasks_args, ctx),
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = match logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => std::path::PathBuf::from(d),
            None => std::env::temp_dir().join("taskgate"),
        };

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let file_name = format!("taskgate.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
