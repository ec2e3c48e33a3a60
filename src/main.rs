use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::Method, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;

mod database;
mod errors;
mod handlers;
mod models;
mod routes;
mod service;
mod store;

use database::connection::get_db_pool;
use service::MatchService;
use store::PgMatchStore;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Initialize database pool and schema
    let pool = get_db_pool().await;
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let service = MatchService::new(Arc::new(PgMatchStore::new(pool)));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any)
        .allow_origin(Any);

    // Build application
    let app = Router::new()
        .route_service("/", ServeFile::new("frontend/LaLigaTracker.html"))
        .nest("/api/matches", routes::matches::routes())
        .layer(cors)
        .with_state(service);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Server running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
