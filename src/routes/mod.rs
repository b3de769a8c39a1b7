//! Router assembly.

mod common;
mod product;

pub use common::{common_routes, common_routes_with_ready};
pub use product::product_routes;
