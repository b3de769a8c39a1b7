//! Server binary: wires the Postgres backend, ensures the Product table, and
//! serves the CRUD routes under /api.

use product_api::{
    common_routes_with_ready, product_routes, AppState, PgProductRepository, ProductService,
};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_api=info")),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/product_catalog".into());
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    PgProductRepository::ensure_product_table(&pool).await?;

    let service = ProductService::new(Arc::new(PgProductRepository::new(pool)));
    let state = AppState { service };

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api", product_routes(state))
        .layer(TraceLayer::new_for_http());

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
