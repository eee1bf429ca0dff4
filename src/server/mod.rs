//! Axum server wiring: routes, shared state, request tracing, and
//! graceful shutdown via a [`CancellationToken`].

use std::net::SocketAddr;

use anyhow::Context as _;
use axum::Router;
use axum::extract::{MatchedPath, Request};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};

mod error;
mod routes;
mod state;

pub use error::ApiError;
pub use state::AppState;

/// The bare application router, without the tracing middleware. Tests
/// drive this directly with `tower::ServiceExt::oneshot`.
pub fn router(state: AppState) -> Router {
    routes::router().with_state(state)
}

pub struct Server {
    router: Router,
    shutdown: CancellationToken,
}

impl Server {
    pub fn new(state: AppState) -> Self {
        let router = router(state).layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request| {
                    let method = req.method();
                    let uri = req.uri();

                    // axum automatically adds this extension.
                    let matched_path = req
                        .extensions()
                        .get::<MatchedPath>()
                        .map(|matched_path| matched_path.as_str());

                    tracing::info_span!("request", %method, %uri, matched_path)
                })
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        );

        let shutdown = CancellationToken::new();

        Self { router, shutdown }
    }

    #[must_use]
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub async fn bind(self, address: SocketAddr) -> anyhow::Result<()> {
        tracing::info!("Listening at http://{address}");
        let listener = TcpListener::bind(address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { self.shutdown.cancelled().await })
            .await?;
        Ok(())
    }
}
