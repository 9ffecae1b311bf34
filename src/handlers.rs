use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, Uri},
};
use serde::Deserialize;

use crate::{
    AppState, RouteTableState,
    error::ApiError,
    guard::{check_navigation, redirect_route},
    models::{ErrorBody, NavigationResponse, PageView, RouteDescriptor},
    session::CookieSessionStore,
};

// --- Query Structs ---

/// NavigationQuery
///
/// Query parameters accepted by `GET /api/navigation`.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct NavigationQuery {
    /// Route name (`login`) or concrete path (`/listings/42`). Values starting with `/`
    /// are resolved as paths, anything else as a name.
    pub to: String,
}

// --- Handlers ---

/// list_routes
///
/// [Public Route] Returns the validated route table in declaration order, so the SPA
/// router can be built from the same source of truth the guard enforces.
#[utoipa::path(
    get,
    path = "/api/routes",
    responses((status = 200, description = "Route table", body = [RouteDescriptor]))
)]
pub async fn list_routes(State(routes): State<RouteTableState>) -> Json<Vec<RouteDescriptor>> {
    Json(routes.iter().cloned().collect())
}

/// resolve_navigation
///
/// [Public Route] Answers whether the caller may navigate to a route, using the session
/// cookie carried by the request. This is what a client-side router calls from its
/// before-each hook.
#[utoipa::path(
    get,
    path = "/api/navigation",
    params(NavigationQuery),
    responses(
        (status = 200, description = "Navigation decision", body = NavigationResponse),
        (status = 404, description = "Unknown route", body = ErrorBody)
    )
)]
pub async fn resolve_navigation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NavigationQuery>,
) -> Result<Json<NavigationResponse>, ApiError> {
    let resolved = if query.to.starts_with('/') {
        state.routes.resolve(&query.to)
    } else {
        state.routes.by_name(&query.to)
    };
    let target = resolved.ok_or_else(|| ApiError::RouteNotFound {
        target: query.to.clone(),
    })?;

    let session = CookieSessionStore::from_headers(&headers, &state.config.session_cookie);
    let outcome = check_navigation(target, &session);
    let destination = redirect_route(&state.routes, &outcome);

    tracing::debug!(route = %target.name, outcome = ?outcome.kind(), "navigation resolved");

    Ok(Json(NavigationResponse {
        target: target.name.clone(),
        outcome: outcome.kind(),
        redirect_to: destination.map(|route| route.name.clone()),
        redirect_path: destination.map(|route| route.path.clone()),
    }))
}

/// render_page
///
/// Page fallback. Only reached once `navigation_guard` has allowed the navigation;
/// answers with the view descriptor of the matched route, or 404 for undeclared paths.
pub async fn render_page(
    State(routes): State<RouteTableState>,
    uri: Uri,
) -> Result<Json<PageView>, ApiError> {
    routes
        .resolve(uri.path())
        .map(|route| Json(PageView::from(route)))
        .ok_or_else(|| ApiError::PageNotFound {
            path: uri.path().to_string(),
        })
}
