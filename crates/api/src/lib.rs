//! HTTP status API for BookTrack.
//!
//! Serves a fixed welcome payload at `/`, with request tracing at the
//! HTTP layer and graceful shutdown on SIGINT/SIGTERM.

pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use error::ServerError;

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::root::status))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves until a shutdown signal arrives.
pub async fn serve(config: &Config) -> Result<(), ServerError> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(%addr, "starting API server");

    run(listener, shutdown_signal()).await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

/// Serves the application on an already-bound listener until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// A handler that fails to install is logged and never fires; the other
/// signal still triggers shutdown.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}
