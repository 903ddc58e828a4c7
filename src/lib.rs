mod db;
pub mod errors;
mod http;
mod middleware;
pub mod models;
pub mod report;
mod state;

use axum::{Router, middleware as axum_middleware};
use middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware};
use sqlx::postgres::PgPoolOptions;
use state::AppState;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let postgres = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres");

    // Ensure the feedback table exists before serving requests
    if let Err(e) = db::init::init_schema(postgres.clone()).await {
        tracing::error!("Failed to initialize feedback schema: {}", e);
        panic!("Failed to initialize feedback schema: {}", e);
    }

    let state = AppState { postgres };

    let global_rate_limiter = create_global_rate_limiter();

    let app = Router::new()
        .merge(http::create_http_routes(state))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .fallback(|| async { "404 Not Found" });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3001);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind address");

    tracing::info!("Client Pulse server running at http://0.0.0.0:{port}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
