//! Per-request access log: `[ip]:port status - method path`

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

/// Log every request once its response is ready.
///
/// The peer address is only known when the router was served with
/// `into_make_service_with_connect_info`; otherwise `[-]:-` is logged.
pub async fn log_request(req: Request, next: Next) -> Response {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;

    tracing::info!(
        target: "postboard::access",
        "{}",
        format_line(peer, response.status(), &method, &path)
    );
    response
}

pub fn format_line(
    peer: Option<SocketAddr>,
    status: StatusCode,
    method: &Method,
    path: &str,
) -> String {
    let client = match peer {
        Some(addr) => format!("[{}]:{}", addr.ip(), addr.port()),
        None => "[-]:-".to_string(),
    };
    format!("{} {} - {} {}", client, status.as_u16(), method, path)
}
