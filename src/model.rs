//! The Product record exchanged between all layers.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One catalog row. `id` is assigned by the database on insert; request
/// bodies may omit it, in which case it deserializes to 0 and is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}
