//! ProductService: pass-through over the repository seam.

use crate::error::AppError;
use crate::model::Product;
use crate::repository::ProductRepository;
use std::sync::Arc;

/// Forwards each operation unmodified to the configured backend. The layer
/// exists so the HTTP handlers depend on a boundary that tests can double.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Product>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Product>, AppError> {
        self.repo.get(id).await
    }

    pub async fn insert(&self, product: &Product) -> Result<i64, AppError> {
        self.repo.insert(product).await
    }

    pub async fn update(&self, product: &Product) -> Result<bool, AppError> {
        self.repo.update(product).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.repo.delete(id).await
    }
}
