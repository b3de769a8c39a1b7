//! HTTP handlers for the product CRUD surface.

pub mod product;
