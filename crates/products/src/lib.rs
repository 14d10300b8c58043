//! Products domain module (in-memory catalog).
//!
//! This crate contains the product entity, its validation rules, the
//! concurrency-safe store and the service that orchestrates them. No HTTP.

pub mod product;
pub mod service;
pub mod store;

pub use product::{Product, ProductId, ProductInput};
pub use service::ProductService;
pub use store::{InMemoryProductStore, ProductStore};
