use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::IntoResponse,
};
use listing_portal::{
    ApiError, AppConfig, AppState, RouteTable,
    handlers::{self, NavigationQuery},
    models::{ErrorBody, NavigationResponse, OutcomeKind, RouteDescriptor},
};
use std::sync::Arc;

// --- Test Utilities ---

/// Default routes plus a protected dashboard and a parameterized listing page.
fn test_state() -> AppState {
    let mut routes: Vec<RouteDescriptor> = RouteTable::default().iter().cloned().collect();
    routes.push(RouteDescriptor::new("dashboard", "/dashboard").authenticated_only());
    routes.push(RouteDescriptor::new("listing", "/listings/:id"));
    AppState::new(RouteTable::new(routes).unwrap(), AppConfig::default())
}

fn signed_in() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("token=abc123"));
    headers
}

async fn navigate(
    state: AppState,
    headers: HeaderMap,
    to: &str,
) -> Result<NavigationResponse, ApiError> {
    let query = Query(NavigationQuery { to: to.to_string() });
    handlers::resolve_navigation(State(state), headers, query)
        .await
        .map(|axum::Json(response)| response)
}

// --- list_routes ---

#[tokio::test]
async fn test_list_routes_preserves_order() {
    let state = test_state();
    let axum::Json(routes) = handlers::list_routes(State(state.routes.clone())).await;
    let names: Vec<&str> = routes.iter().map(|route| route.name.as_str()).collect();
    assert_eq!(
        names,
        ["home", "about", "login", "register", "dashboard", "listing"]
    );
}

// --- resolve_navigation ---

#[tokio::test]
async fn test_navigation_by_name_anonymous_protected_redirects_to_login() {
    let response = navigate(test_state(), HeaderMap::new(), "dashboard").await.unwrap();
    assert_eq!(response.outcome, OutcomeKind::Redirect);
    assert_eq!(response.redirect_to.as_deref(), Some("login"));
    assert_eq!(response.redirect_path.as_deref(), Some("/login"));
}

#[tokio::test]
async fn test_navigation_by_path_signed_in_login_redirects_to_about() {
    let response = navigate(test_state(), signed_in(), "/login").await.unwrap();
    assert_eq!(response.target, "login");
    assert_eq!(response.outcome, OutcomeKind::Redirect);
    assert_eq!(response.redirect_path.as_deref(), Some("/about"));
}

#[tokio::test]
async fn test_navigation_proceeds_for_parameterized_path() {
    let response = navigate(test_state(), HeaderMap::new(), "/listings/42").await.unwrap();
    assert_eq!(response.target, "listing");
    assert_eq!(response.outcome, OutcomeKind::Proceed);
    assert!(response.redirect_to.is_none());
    assert!(response.redirect_path.is_none());
}

#[tokio::test]
async fn test_navigation_signed_in_protected_proceeds() {
    let response = navigate(test_state(), signed_in(), "dashboard").await.unwrap();
    assert_eq!(response.outcome, OutcomeKind::Proceed);
}

#[tokio::test]
async fn test_navigation_unknown_target_is_not_found() {
    let by_name = navigate(test_state(), HeaderMap::new(), "nowhere").await.unwrap_err();
    assert_eq!(by_name.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        by_name,
        ApiError::RouteNotFound {
            target: "nowhere".to_string()
        }
    );

    let by_path = navigate(test_state(), HeaderMap::new(), "/nowhere").await.unwrap_err();
    assert_eq!(by_path.status(), StatusCode::NOT_FOUND);
    assert_eq!(by_path.code(), "ROUTE_NOT_FOUND");
}

#[tokio::test]
async fn test_navigation_respects_configured_cookie_name() {
    let mut state = test_state();
    state.config.session_cookie = "sid".to_string();

    // `token` is no longer the session cookie, so the caller is anonymous.
    let response = navigate(state, signed_in(), "dashboard").await.unwrap();
    assert_eq!(response.redirect_to.as_deref(), Some("login"));
}

// --- render_page ---

#[tokio::test]
async fn test_render_page_known_and_unknown_paths() {
    let routes = Arc::clone(&test_state().routes);

    let axum::Json(view) =
        handlers::render_page(State(routes.clone()), Uri::from_static("/register"))
            .await
            .unwrap();
    assert_eq!(view.name, "register");
    assert!(view.hide_navbar);

    let missing = handlers::render_page(State(routes), Uri::from_static("/nope"))
        .await
        .unwrap_err();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(missing.code(), "PAGE_NOT_FOUND");
}

// --- error responses ---

#[tokio::test]
async fn test_not_found_error_renders_json_body() {
    let err = navigate(test_state(), HeaderMap::new(), "nowhere").await.unwrap_err();
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.code, "ROUTE_NOT_FOUND");
    assert!(body.message.contains("nowhere"));
    assert_eq!(body.context.get("target").map(String::as_str), Some("nowhere"));
}
