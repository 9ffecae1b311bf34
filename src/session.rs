use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar};

// 1. SessionStore Contract
/// SessionStore
///
/// Read-only view of the current session token. The access policy only ever sees the
/// value returned here, so the storage mechanism (cookie, memory, anything else) can be
/// swapped without touching navigation logic.
///
/// Implementations must return `None` rather than an empty string when no session exists.
pub trait SessionStore: Send + Sync {
    fn get_token(&self) -> Option<String>;
}

// 2. The Real Implementation (request cookie)
/// CookieSessionStore
///
/// Reads the session token from a named cookie on an incoming request.
/// Built per request from the request headers; holds no shared state.
#[derive(Debug, Clone)]
pub struct CookieSessionStore {
    jar: CookieJar,
    cookie_name: String,
}

impl CookieSessionStore {
    pub fn from_headers(headers: &HeaderMap, cookie_name: &str) -> Self {
        Self {
            jar: CookieJar::from_headers(headers),
            cookie_name: cookie_name.to_string(),
        }
    }
}

impl SessionStore for CookieSessionStore {
    fn get_token(&self) -> Option<String> {
        self.jar
            .get(&self.cookie_name)
            .map(Cookie::value)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    }
}

// 3. The In-Memory Implementation
/// MemorySessionStore
///
/// Fixed token holder for tests and for embedding the policy outside an HTTP request.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    token: Option<String>,
}

impl MemorySessionStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get_token(&self) -> Option<String> {
        self.token
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(str::to_owned)
    }
}
