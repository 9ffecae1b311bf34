use crate::{AppState, guard, handlers};
use axum::{Router, middleware};

/// Pages Router Module
///
/// Every path not claimed by the API falls through to the page handler. The guard is
/// applied with `layer` rather than `route_layer` so it also wraps the fallback.
pub fn page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .fallback(handlers::render_page)
        .layer(middleware::from_fn_with_state(
            state,
            guard::navigation_guard,
        ))
}
