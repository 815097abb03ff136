//! HTTP front of the MX resolver.
//!
//! Routes:
//! - `GET /mx?domain=<name>` - mail exchangers of one domain
//! - `POST /mx/bulk` - mail exchangers of up to 50 domains
//! - `GET /openapi.json` - OpenAPI document
//!
//! Every route can be mounted under a prefix (see [`ServerConfig::base_path`]).

mod error;
mod handlers;
mod openapi;
mod types;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::mx::LookupMx;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use handlers::{get_mx, get_mx_bulk, openapi_json};
pub use openapi::{ApiDoc, document};
pub use types::{AppState, BulkRequest, BulkResponse, MxQuery};

/// Builds the application router around `resolver`.
pub fn create_router(resolver: Arc<dyn LookupMx>, config: &ServerConfig) -> Router {
    let base_path = config.normalized_base_path();
    let state = AppState {
        resolver,
        openapi: Arc::new(document(base_path.as_deref())),
    };

    let routes = Router::new()
        .route("/mx", get(get_mx))
        .route("/mx/bulk", post(get_mx_bulk))
        .route("/openapi.json", get(openapi_json))
        .with_state(state);

    let app = match base_path {
        Some(prefix) => Router::new().nest(&prefix, routes),
        None => routes,
    };
    app.layer(TraceLayer::new_for_http())
}

/// Binds `config.listen` and serves until Ctrl-C or SIGTERM.
pub async fn serve(config: &ServerConfig, resolver: Arc<dyn LookupMx>) -> Result<(), anyhow::Error> {
    let app = create_router(resolver, config);

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind MX lookup server to {}: {}", config.listen, e))?;

    let prefix = config.normalized_base_path().unwrap_or_default();
    tracing::info!("MX lookup server listening on http://{}{}/", config.listen, prefix);
    tracing::info!("  - Single: GET {}/mx?domain=<name>", prefix);
    tracing::info!("  - Bulk: POST {}/mx/bulk", prefix);
    tracing::info!("  - OpenAPI: GET {}/openapi.json", prefix);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("MX lookup server error: {}", e))?;

    tracing::info!("MX lookup server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, SocketAddr};

    use async_trait::async_trait;
    use trust_dns_resolver::error::ResolveError;

    use crate::mx::MxRecord;

    struct Offline;

    #[async_trait]
    impl LookupMx for Offline {
        async fn lookup_mx(&self, _domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
            Err(ResolveError::from("offline"))
        }

        async fn lookup_host(&self, _host: &str) -> Result<Vec<IpAddr>, ResolveError> {
            Err(ResolveError::from("offline"))
        }
    }

    #[tokio::test]
    async fn serve_reports_bind_failure() {
        let occupied = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr: SocketAddr = occupied.local_addr().expect("local addr");
        let config = ServerConfig::new(addr, None);

        let err = serve(&config, Arc::new(Offline))
            .await
            .expect_err("port is already taken");
        let message = err.to_string();
        assert!(message.contains("Failed to bind MX lookup server"));
        assert!(message.contains(&addr.to_string()));
    }

    #[test]
    fn document_announces_base_path() {
        let doc = document(Some("/chatgpt/dns-actions"));
        let servers = doc.servers.expect("servers set");
        assert_eq!(servers[0].url, "/chatgpt/dns-actions");
        assert!(document(None).servers.is_none());
    }
}
