//! Data-access boundary: one capability trait, one backend per database.

mod postgres;
mod sqlite;

pub use postgres::PgProductRepository;
pub use sqlite::SqliteProductRepository;

use crate::error::AppError;
use crate::model::Product;
use async_trait::async_trait;

/// The five storage operations behind the service seam. Implementations are
/// selected at process wiring time: Postgres in production, in-memory SQLite
/// in the integration tests.
///
/// Absence is always reported as `None`/`false`, never as an error; only
/// driver-level faults surface as `AppError::Db`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All rows. Empty vec when the table is empty.
    async fn list(&self) -> Result<Vec<Product>, AppError>;

    /// Row by id, for any integer id including non-positive ones.
    async fn get(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Persist name/price/stock (input id ignored) and return the generated id.
    async fn insert(&self, product: &Product) -> Result<i64, AppError>;

    /// Replace name/price/stock of the row matching `product.id`. Returns
    /// whether a row matched.
    async fn update(&self, product: &Product) -> Result<bool, AppError>;

    /// Remove the row by id. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
