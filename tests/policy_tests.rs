use listing_portal::{
    NavigationOutcome, decide,
    models::{OutcomeKind, RouteDescriptor},
    policy::{LOGIN_ROUTE, SIGNED_IN_LANDING_ROUTE, has_session},
};

// --- Test Utilities ---

fn route(name: &str, requires_auth: bool, is_logged: bool) -> RouteDescriptor {
    RouteDescriptor {
        name: name.to_string(),
        path: format!("/{name}"),
        requires_auth,
        is_logged,
        hide_navbar: false,
    }
}

fn redirect(name: &str) -> NavigationOutcome {
    NavigationOutcome::RedirectTo(name.to_string())
}

const TOKENS: [Option<&str>; 4] = [None, Some(""), Some("abc123"), Some("  ")];

// --- Scenarios ---

#[test]
fn test_scenario_a_public_route_anonymous_proceeds() {
    let home = route("home", false, false);
    assert_eq!(decide(&home, None), NavigationOutcome::Proceed);
}

#[test]
fn test_scenario_b_public_route_signed_in_proceeds() {
    let about = route("about", false, false);
    assert_eq!(decide(&about, Some("abc123")), NavigationOutcome::Proceed);
}

#[test]
fn test_scenario_c_anonymous_only_route_signed_in_redirects_to_about() {
    let login = route("login", false, true);
    assert_eq!(decide(&login, Some("abc123")), redirect("about"));
}

#[test]
fn test_scenario_d_anonymous_only_route_anonymous_proceeds() {
    let register = route("register", false, true);
    assert_eq!(decide(&register, None), NavigationOutcome::Proceed);
}

#[test]
fn test_scenario_e_protected_route_anonymous_redirects_to_login() {
    let dashboard = route("dashboard", true, false);
    assert_eq!(decide(&dashboard, None), redirect("login"));
}

// --- Properties ---

#[test]
fn test_protected_route_with_token_proceeds() {
    let dashboard = route("dashboard", true, false);
    assert_eq!(decide(&dashboard, Some("abc123")), NavigationOutcome::Proceed);
}

#[test]
fn test_empty_token_is_treated_as_absent() {
    let dashboard = route("dashboard", true, false);
    let login = route("login", false, true);

    for token in [Some(""), Some("   ")] {
        assert_eq!(decide(&dashboard, token), redirect(LOGIN_ROUTE));
        assert_eq!(decide(&login, token), NavigationOutcome::Proceed);
    }
}

#[test]
fn test_unflagged_routes_always_proceed() {
    let open = route("listings", false, false);
    for token in TOKENS {
        assert_eq!(decide(&open, token), NavigationOutcome::Proceed, "token {token:?}");
    }
}

#[test]
fn test_decide_is_idempotent() {
    let routes = [
        route("home", false, false),
        route("login", false, true),
        route("dashboard", true, false),
    ];
    for target in &routes {
        for token in TOKENS {
            assert_eq!(decide(target, token), decide(target, token));
        }
    }
}

#[test]
fn test_navbar_hint_does_not_affect_decision() {
    let plain = route("login", false, true);
    let hidden = plain.clone().without_navbar();
    for token in TOKENS {
        assert_eq!(decide(&plain, token), decide(&hidden, token));
    }
}

#[test]
fn test_outcome_accessors() {
    assert_eq!(NavigationOutcome::Proceed.kind(), OutcomeKind::Proceed);
    assert_eq!(NavigationOutcome::Proceed.redirect_target(), None);

    let outcome = redirect(SIGNED_IN_LANDING_ROUTE);
    assert_eq!(outcome.kind(), OutcomeKind::Redirect);
    assert_eq!(outcome.redirect_target(), Some("about"));
}

#[test]
fn test_has_session() {
    assert!(!has_session(None));
    assert!(!has_session(Some("")));
    assert!(!has_session(Some("\t")));
    assert!(has_session(Some("abc123")));
}
