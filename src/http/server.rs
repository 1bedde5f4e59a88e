//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the dispatch handler
//! - Wire up middleware (tracing, request ID, timeout, concurrency limit)
//! - Bind server to listener
//! - Stop on the shutdown broadcast

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::availability::InstanceState;
use crate::config::ServiceConfig;
use crate::http::handlers::dispatch;
use crate::http::request::MakeRequestUuid;
use crate::routing::Router as PathRouter;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub instance: Arc<InstanceState>,
    pub router: Arc<PathRouter>,
}

/// HTTP server for the availability toggle service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    instance: Arc<InstanceState>,
}

impl HttpServer {
    /// Create a new HTTP server serving the given instance state.
    pub fn new(config: ServiceConfig, instance: Arc<InstanceState>) -> Self {
        let state = AppState {
            instance: instance.clone(),
            router: Arc::new(PathRouter::default()),
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            instance,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(GlobalConcurrencyLimitLayer::new(config.listener.max_connections))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until a shutdown signal is broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            identity = %self.instance.identity(),
            state = %self.instance.availability(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// The instance state this server reads and toggles.
    pub fn instance(&self) -> &Arc<InstanceState> {
        &self.instance
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
