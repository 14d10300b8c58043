//! HTTP API: the product REST service, the hello-world demo, and the plumbing
//! (CORS, panics, error bodies, config) they share.

pub mod app;
pub mod config;
pub mod middleware;
pub mod server;

pub use config::{ConfigError, ServerConfig};
