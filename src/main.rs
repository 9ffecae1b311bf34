use listing_portal::{
    AppState, RouteTable,
    config::{AppConfig, Env},
    create_router,
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Entry point: configuration, logging, route table, then the HTTP server.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // RUST_LOG wins; otherwise fall back to development-friendly defaults.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "listing_portal=debug,tower_http=info".into());

    // 3. Pretty logs locally, JSON for log aggregation in production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Route Table (Fail-Fast)
    // A misconfigured table must stop startup, never show up as a navigation failure.
    let routes = match config.route_table_path.as_deref() {
        Some(path) => match RouteTable::load(path) {
            Ok(routes) => {
                tracing::info!(path, routes = routes.len(), "route table loaded");
                routes
            }
            Err(err) => {
                tracing::error!(path, error = %err, "FATAL: invalid route table");
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("ROUTE_TABLE_PATH not set, using built-in route table");
            RouteTable::default()
        }
    };

    let bind_addr = config.bind_addr.clone();
    let app = create_router(AppState::new(routes, config));

    // 5. Server Startup
    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(addr = %bind_addr, error = %err, "FATAL: failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!("Listening on {bind_addr}");
    tracing::info!("API Documentation (Swagger UI) available at /swagger-ui");

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "server terminated");
        std::process::exit(1);
    }
}
