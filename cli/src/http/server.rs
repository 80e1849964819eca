//! HTTP server lifecycle

use super::{
    middleware::{create_cors_layer, create_trace_layer, request_logger},
    routes::create_router,
    AppState,
};
use crate::commands::cli::ServeArgs;
use axum::{middleware, Router};
use std::future::Future;
use std::net::SocketAddr;
use taskgate_core::api::{AppContext, CliError};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// CLI flags win over the `[http_server]` section.
    pub fn resolve(args: &ServeArgs, ctx: &AppContext) -> Self {
        let config = &ctx.cfg().http_server;
        Self {
            host: args.host.clone().unwrap_or_else(|| config.host.clone()),
            port: args.port.unwrap_or(config.port),
        }
    }
}

/// Handles `taskgate serve`.
pub async fn handle_http_server(args: ServeArgs, ctx: &AppContext) -> Result<(), CliError> {
    let session_id = Uuid::new_v4().to_string();
    let config = ServerConfig::resolve(&args, ctx);

    let gateway = ctx.build_gateway().await?;
    if ctx.cfg().upstream.api_key.trim().is_empty() {
        tracing::warn!(
            target: "taskgate.http",
            "no upstream credential configured; completion calls will be rejected upstream"
        );
    }

    let state = AppState::new(session_id.clone(), gateway);

    start_server(session_id, config, state)
        .await
        .map_err(|e| CliError::Command(e.to_string()))
}

pub fn build_app(state: AppState) -> Router {
    create_router(state)
        .layer(middleware::from_fn(request_logger))
        .layer(create_trace_layer())
        .layer(create_cors_layer())
}

pub async fn start_server(
    session_id: String,
    config: ServerConfig,
    state: AppState,
) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(&addr).await?;

    info!(
        target: "taskgate.http",
        "HTTP server listening on http://{} (session: {})",
        listener.local_addr()?,
        session_id
    );

    serve_until(listener, build_app(state), shutdown_signal()).await?;

    info!(target: "taskgate.http", "Server shutdown complete");
    Ok(())
}

/// Serves until `shutdown` resolves, then drains in-flight requests.
pub async fn serve_until<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn shutdown_signal() {
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!(target: "taskgate.http", "Received Ctrl+C signal");
        }
        _ = wait_for_sigterm() => {
            info!(target: "taskgate.http", "Received SIGTERM signal");
        }
    }
    info!(target: "taskgate.http", "Starting graceful shutdown...");
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            tracing::warn!(target: "taskgate.http", error = %e, "SIGTERM handler unavailable");
            std::future::pending::<()>().await
        }
    }
}

/// No SIGTERM off unix; Ctrl+C still applies.
#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskgate_core::api::AppConfig;

    #[test]
    fn test_resolve_prefers_cli_flags() {
        let mut cfg = AppConfig::default();
        cfg.http_server.host = "0.0.0.0".into();
        cfg.http_server.port = 9000;
        let ctx = AppContext::new(cfg, None);

        let from_cfg = ServerConfig::resolve(&ServeArgs::default(), &ctx);
        assert_eq!(from_cfg.host, "0.0.0.0");
        assert_eq!(from_cfg.port, 9000);

        let args = ServeArgs {
            host: Some("127.0.0.1".into()),
            port: Some(7000),
        };
        let from_args = ServerConfig::resolve(&args, &ctx);
        assert_eq!(
            from_args,
            ServerConfig {
                host: "127.0.0.1".into(),
                port: 7000
            }
        );
    }

    #[tokio::test]
    async fn test_serve_until_stops_on_signal() {
        let ctx = AppContext::new(AppConfig::default(), None);
        let gateway = taskgate_core::api::TaskGateway::new(
            std::sync::Arc::new(ctx.registry()),
            taskgate_core::api::TokenBudgetGuard::default(),
            taskgate_plugins::factory::build_completion(ctx.cfg()).unwrap(),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let handle = tokio::spawn(serve_until(
            listener,
            build_app(AppState::new("s".into(), gateway)),
            async move {
                let _ = rx.await;
            },
        ));
        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
