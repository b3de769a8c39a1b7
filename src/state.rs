//! Shared application state for all routes.

use crate::service::ProductService;

#[derive(Clone)]
pub struct AppState {
    pub service: ProductService,
}
