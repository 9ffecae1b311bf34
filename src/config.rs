use std::env;

/// Fallback bind address when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Cookie carrying the session token, as written by the SPA's login flow.
pub const DEFAULT_SESSION_COOKIE: &str = "token";

/// AppConfig
///
/// Holds the application's entire configuration state. It is loaded once at startup,
/// never mutated afterwards, and pulled into handlers via `FromRef`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Controls log format and which settings are mandatory.
    pub env: Env,
    // Socket address the HTTP server binds to.
    pub bind_addr: String,
    // Name of the cookie the session token is read from.
    pub session_cookie: String,
    // JSON route table. `None` means the built-in table is used (local only).
    pub route_table_path: Option<String>,
}

/// Env
///
/// Defines the runtime context: pretty logs and built-in defaults locally,
/// JSON logs and explicit configuration in production.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// Non-panicking configuration used for test state scaffolding.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            route_table_path: None,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads all parameters from environment variables and implements the **fail-fast** principle.
    ///
    /// # Panics
    /// Panics in production if `ROUTE_TABLE_PATH` is not set. A production deployment must
    /// declare its routes explicitly rather than silently serving the built-in table.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let session_cookie = env::var("SESSION_COOKIE_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string());

        let route_table_path = match env {
            Env::Production => Some(
                env::var("ROUTE_TABLE_PATH")
                    .expect("FATAL: ROUTE_TABLE_PATH must be set in production."),
            ),
            Env::Local => env::var("ROUTE_TABLE_PATH").ok(),
        };

        Self {
            env,
            bind_addr,
            session_cookie,
            route_table_path,
        }
    }
}
