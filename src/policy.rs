use crate::models::{OutcomeKind, RouteDescriptor};

/// Route unauthenticated visitors are sent to when a route requires a session.
pub const LOGIN_ROUTE: &str = "login";

/// Route signed-in visitors are sent to when a route is reserved for anonymous users.
pub const SIGNED_IN_LANDING_ROUTE: &str = "about";

/// Every route name `decide` can redirect to. `RouteTable::new` refuses tables
/// that lack any of these.
pub const REDIRECT_TARGETS: [&str; 2] = [LOGIN_ROUTE, SIGNED_IN_LANDING_ROUTE];

/// NavigationOutcome
///
/// Result of the access policy for a single navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Navigation continues unmodified.
    Proceed,
    /// Navigation is replaced with the named route.
    RedirectTo(String),
}

impl NavigationOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            NavigationOutcome::Proceed => OutcomeKind::Proceed,
            NavigationOutcome::RedirectTo(_) => OutcomeKind::Redirect,
        }
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            NavigationOutcome::Proceed => None,
            NavigationOutcome::RedirectTo(name) => Some(name),
        }
    }
}

/// decide
///
/// The route access policy. A pure function of the target descriptor and token presence:
/// it never reads a session store itself, the caller hands the token in.
///
/// Rules, first match wins:
/// 1. `requires_auth` without a token redirects to `login`.
/// 2. `is_logged` with a token redirects to `about`.
/// 3. Anything else proceeds.
///
/// An empty or whitespace-only token counts as absent.
pub fn decide(target: &RouteDescriptor, token: Option<&str>) -> NavigationOutcome {
    let authenticated = has_session(token);

    if target.requires_auth && !authenticated {
        return NavigationOutcome::RedirectTo(LOGIN_ROUTE.to_string());
    }
    if target.is_logged && authenticated {
        return NavigationOutcome::RedirectTo(SIGNED_IN_LANDING_ROUTE.to_string());
    }
    NavigationOutcome::Proceed
}

/// Whether a token value signals an authenticated session.
pub fn has_session(token: Option<&str>) -> bool {
    token.is_some_and(|value| !value.trim().is_empty())
}
