//! HTTP delivery surface.
//!
//! Serves the rendered page over axum. The document is rendered exactly once
//! into a process-wide [`LazyLock`] and handed out verbatim after that, so
//! every response body is byte-identical. Shutdown is cooperative via a
//! [`CancellationToken`].

use std::net::SocketAddr;
use std::sync::LazyLock;

use axum::Router;
use axum::response::Html;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::ServerError;
use crate::render::render_page;

/// The page, rendered once at first request.
static PAGE: LazyLock<String> = LazyLock::new(render_page);

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// The running page server.
#[derive(Debug)]
pub struct PageServer {
    handle: JoinHandle<()>,
}

impl PageServer {
    /// Binds the server to the given address and starts serving.
    ///
    /// Returns the server and the actual bound address (useful when binding
    /// to port 0 in tests).
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the TCP listener cannot bind.
    pub async fn bind(bind_addr: &str, cancel: CancellationToken) -> Result<(Self, SocketAddr)> {
        let listener = TcpListener::bind(bind_addr)
            .await
            .map_err(|e| ServerError::Bind(format!("{bind_addr}: {e}")))?;

        let bound_addr = listener
            .local_addr()
            .map_err(|e| ServerError::Bind(format!("local_addr failed: {e}")))?;

        let router = build_router();
        let server_cancel = cancel.clone();
        let handle = tokio::spawn(async move {
            info!(%bound_addr, "page server started");
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    server_cancel.cancelled().await;
                })
                .await
                .ok();
            debug!("page server shut down");
        });

        Ok((Self { handle }, bound_addr))
    }

    /// Waits until the serve loop exits (i.e. the cancellation token fired).
    pub async fn run_until_shutdown(self) {
        let _ = self.handle.await;
    }
}

/// Routes: the page itself and a liveness probe.
fn build_router() -> Router {
    Router::new()
        .route("/", get(serve_page))
        .route("/healthz", get(healthz))
}

async fn serve_page() -> Html<&'static str> {
    Html(PAGE.as_str())
}

async fn healthz() -> &'static str {
    "ok"
}

/// Expands a `[host:]port` argument into a full bind address.
///
/// A bare port binds loopback only; an explicit host is passed through.
#[must_use]
pub fn parse_bind_addr(raw: &str) -> String {
    if raw.contains(':') {
        raw.to_string()
    } else {
        format!("127.0.0.1:{raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_port_binds_loopback() {
        assert_eq!(parse_bind_addr("8080"), "127.0.0.1:8080");
    }

    #[test]
    fn host_port_passes_through() {
        assert_eq!(parse_bind_addr("0.0.0.0:9000"), "0.0.0.0:9000");
    }

    #[tokio::test]
    async fn bind_reports_actual_address() {
        let cancel = CancellationToken::new();
        let (server, addr) = PageServer::bind("127.0.0.1:0", cancel.clone()).await.unwrap();
        assert_ne!(addr.port(), 0, "port 0 should resolve to a real port");
        cancel.cancel();
        server.run_until_shutdown().await;
    }

    #[tokio::test]
    async fn bind_fails_on_bad_address() {
        let cancel = CancellationToken::new();
        let result = PageServer::bind("definitely-not-an-address", cancel).await;
        assert!(matches!(result, Err(ServerError::Bind(_))));
    }

    #[tokio::test]
    async fn cancel_stops_the_server() {
        let cancel = CancellationToken::new();
        let (server, _addr) = PageServer::bind("127.0.0.1:0", cancel.clone()).await.unwrap();
        cancel.cancel();
        tokio::time::timeout(std::time::Duration::from_secs(2), server.run_until_shutdown())
            .await
            .expect("server should shut down promptly after cancel");
    }
}
