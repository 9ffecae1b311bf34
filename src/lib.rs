use std::sync::Arc;

use axum::{Router, extract::FromRef, http::HeaderName};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod config;
pub mod error;
pub mod guard;
pub mod handlers;
pub mod models;
pub mod policy;
pub mod route_table;
pub mod session;

// Routing segregation (open API vs guarded pages).
pub mod routes;
use routes::{pages, public};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use error::ApiError;
pub use policy::{NavigationOutcome, decide};
pub use route_table::{RouteTable, RouteTableError};
pub use session::{CookieSessionStore, MemorySessionStore, SessionStore};

/// Shared, immutable route table. Cloning only bumps the reference count.
pub type RouteTableState = Arc<RouteTable>;

/// ApiDoc
///
/// OpenAPI document for the gateway, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::list_routes, handlers::resolve_navigation),
    components(
        schemas(
            models::RouteDescriptor, models::NavigationResponse, models::OutcomeKind,
            models::PageView, models::Property, models::PropertyInfo, models::ErrorBody,
        )
    ),
    tags(
        (name = "listing-portal", description = "Property listing portal navigation API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single container of everything handlers and middleware need. Both parts are
/// read-only after startup, so the state is freely cloned across requests.
#[derive(Clone)]
pub struct AppState {
    /// Validated route table, loaded once at startup.
    pub routes: RouteTableState,
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
}

impl AppState {
    pub fn new(routes: RouteTable, config: AppConfig) -> Self {
        Self {
            routes: Arc::new(routes),
            config,
        }
    }
}

// --- Axum FromRef Extractor Implementations ---

impl FromRef<AppState> for RouteTableState {
    fn from_ref(app_state: &AppState) -> RouteTableState {
        app_state.routes.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the routing structure, applies the navigation guard to page paths,
/// layers observability on top and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public::public_routes())
        // Pages carry the fallback, so this merge must stay the only one with a fallback.
        .merge(pages::page_routes(state.clone()))
        .with_state(state);

    // 3. Observability and Correlation Layers
    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Builds the per-request span, tagging it with the `x-request-id` set above so every
/// log line of one request can be correlated.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
