//! Greeting endpoints: `/` and `/{name}`

use std::sync::Arc;

use axum::{http::Uri, routing::get, Router};

/// Root greeting shared by both server variants
pub const DEFAULT_GREETING: &str = "hello aaron, jake";

/// GET /
async fn root(greeting: Arc<str>) -> String {
    greeting.to_string()
}

/// GET /{name}
///
/// Echoes the raw segment as received, percent-escapes included.
async fn hello(uri: Uri) -> String {
    let name = uri.path().trim_start_matches('/');
    format!("hello: {}", name)
}

/// Root greeting route
pub fn router<S>(greeting: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let greeting: Arc<str> = Arc::from(greeting);
    Router::new().route("/", get(move || root(greeting.clone())))
}

/// Root greeting plus the `/{name}` echo
pub fn echo_router<S>(greeting: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router(greeting).route("/{name}", get(hello))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn root_returns_greeting() {
        let (status, body) = get_text(echo_router(DEFAULT_GREETING), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "hello aaron, jake");
    }

    #[tokio::test]
    async fn root_greeting_is_configurable() {
        let (_, body) = get_text(router("hi there"), "/").await;
        assert_eq!(body, "hi there");
    }

    #[tokio::test]
    async fn name_is_echoed() {
        let (status, body) = get_text(echo_router(DEFAULT_GREETING), "/anyname").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "hello: anyname");
    }

    #[tokio::test]
    async fn special_characters_are_unmodified() {
        let app = echo_router(DEFAULT_GREETING);
        for name in ["a.b-c_d~e", "caf%C3%A9", "x%20y", "!$&()*+,;=:@"] {
            let (_, body) = get_text(app.clone(), &format!("/{}", name)).await;
            assert_eq!(body, format!("hello: {}", name));
        }
    }

    #[tokio::test]
    async fn nested_path_is_not_matched() {
        let (status, _) = get_text(echo_router(DEFAULT_GREETING), "/a/b").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
