//! Axum server setup
//!
//! Server skeleton with:
//! - Any-origin CORS
//! - Access log middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use super::{access_log, routes};
use crate::db::PostStore;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8000)
    pub bind_addr: SocketAddr,

    /// Body of `GET /`
    pub greeting: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            greeting: routes::greeting::DEFAULT_GREETING.to_string(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}

/// Router for the persistence-backed server.
pub fn post_app(state: AppState, greeting: &str) -> Router {
    let app = Router::new()
        .merge(routes::greeting::router(greeting))
        .merge(routes::health::router())
        .merge(routes::posts::router())
        .with_state(state);

    with_middleware(app)
}

/// Router for the greeting-only server.
pub fn greeting_app(greeting: &str) -> Router {
    with_middleware(routes::greeting::echo_router(greeting))
}

fn with_middleware(app: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(cors)
        .layer(middleware::from_fn(access_log::log_request))
}

/// Run the persistence-backed server until shutdown.
///
/// # Example
///
/// ```ignore
/// let storage = Storage::open(&database_url).await?;
/// let store = Arc::new(PgPostStore::new(storage.clone()));
/// run_server(store, ServerConfig::default()).await?;
/// storage.close().await;
/// ```
pub async fn run_server(store: Arc<dyn PostStore>, config: ServerConfig) -> Result<(), ServerError> {
    let app = post_app(AppState::new(store), &config.greeting);
    serve(app, config.bind_addr).await
}

/// Run the greeting-only server until shutdown.
pub async fn run_greeter(config: ServerConfig) -> Result<(), ServerError> {
    serve(greeting_app(&config.greeting), config.bind_addr).await
}

async fn serve(app: Router, bind_addr: SocketAddr) -> Result<(), ServerError> {
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    // Connect info feeds the client address into the access log
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::db::MemoryPostStore;

    fn app() -> Router {
        post_app(
            AppState::new(Arc::new(MemoryPostStore::new())),
            routes::greeting::DEFAULT_GREETING,
        )
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8000);
        assert!(config.bind_addr.ip().is_unspecified());
        assert_eq!(config.greeting, "hello aaron, jake");
    }

    #[tokio::test]
    async fn post_app_serves_every_route() {
        for uri in ["/", "/ping", "/ping_db", "/healthz", "/post"] {
            let response = app()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        }
    }

    #[tokio::test]
    async fn post_app_has_no_name_echo() {
        let response = app()
            .oneshot(Request::builder().uri("/anyname").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn greeting_app_echoes_reserved_looking_names() {
        let response = greeting_app("hi")
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "hello: ping");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/ping")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn cors_preflight_succeeds() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/post")
                    .header(header::ORIGIN, "https://example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
