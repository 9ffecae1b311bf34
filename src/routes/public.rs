use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Endpoints that are open to any client. None of them are gated: the navigation
/// endpoint evaluates the policy itself and reports the outcome instead of enforcing it.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness probe for load balancers and container orchestration.
        .route("/health", get(|| async { "ok" }))
        // GET /api/routes
        // The validated route table, in declaration order.
        .route("/api/routes", get(handlers::list_routes))
        // GET /api/navigation?to=...
        // Access decision for a route name or path, based on the session cookie.
        .route("/api/navigation", get(handlers::resolve_navigation))
}
