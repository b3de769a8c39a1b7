//! Product catalog CRUD REST API: axum handlers over a swappable repository.

pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

pub use error::AppError;
pub use model::Product;
pub use repository::{PgProductRepository, ProductRepository, SqliteProductRepository};
pub use routes::{common_routes, common_routes_with_ready, product_routes};
pub use service::ProductService;
pub use state::AppState;
