//! Product CRUD routes, mounted under `/api`.

use crate::handlers::product::{create, delete as delete_handler, get as get_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/product", get(list).post(create))
        .route(
            "/product/:id",
            get(get_handler).put(update).delete(delete_handler),
        )
        .with_state(state)
}
