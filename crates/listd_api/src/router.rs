//! Route table and request logging.

use crate::handlers;
use crate::state::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use log::{info, warn};
use std::time::Instant;

/// Builds the service router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/list",
            get(handlers::list_lists).post(handlers::create_list),
        )
        .route(
            "/list/:id",
            get(handlers::get_list)
                .put(handlers::update_list)
                .delete(handlers::delete_list),
        )
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        warn!(
            "event=http_request module=api status=error method={} path={} http_status={} duration_ms={}",
            method,
            path,
            status.as_u16(),
            started_at.elapsed().as_millis()
        );
    } else {
        info!(
            "event=http_request module=api status=ok method={} path={} http_status={} duration_ms={}",
            method,
            path,
            status.as_u16(),
            started_at.elapsed().as_millis()
        );
    }
    response
}
