use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    AppState,
    models::RouteDescriptor,
    policy::{self, NavigationOutcome},
    route_table::RouteTable,
    session::{CookieSessionStore, SessionStore},
};

/// check_navigation
///
/// Boundary adapter between a session store and the pure access policy: fetches the
/// token once and hands it to `policy::decide`.
pub fn check_navigation(
    target: &RouteDescriptor,
    session: &dyn SessionStore,
) -> NavigationOutcome {
    let token = session.get_token();
    policy::decide(target, token.as_deref())
}

/// Looks up the descriptor a redirect outcome points at.
///
/// Returns `None` for `Proceed`. Redirect targets are guaranteed to exist once a
/// `RouteTable` has been constructed.
pub fn redirect_route<'a>(
    routes: &'a RouteTable,
    outcome: &NavigationOutcome,
) -> Option<&'a RouteDescriptor> {
    outcome
        .redirect_target()
        .and_then(|name| routes.by_name(name))
}

/// navigation_guard
///
/// Middleware enforcing the access policy on every page path.
///
/// Paths that do not resolve to a declared route pass straight through (the page
/// fallback answers them with 404). For declared routes the token is read from the
/// configured session cookie; a redirect outcome short-circuits with `303 See Other`
/// pointing at the target route's path.
pub async fn navigation_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let Some(target) = state.routes.resolve(&path) else {
        return next.run(request).await;
    };

    let session =
        CookieSessionStore::from_headers(request.headers(), &state.config.session_cookie);
    let outcome = check_navigation(target, &session);

    match redirect_route(&state.routes, &outcome) {
        Some(destination) => {
            tracing::info!(
                route = %target.name,
                redirect_to = %destination.name,
                "navigation redirected"
            );
            Redirect::to(&destination.path).into_response()
        }
        None => {
            tracing::debug!(route = %target.name, "navigation allowed");
            next.run(request).await
        }
    }
}
