//! Server module for building the HTTP application
//!
//! `ServerBuilder` wires an invoice store and configuration into a router
//! exposing the invoice API, the invoice page and health checks.

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::rest::{API_PATH, AppState, RestExposure};
pub use host::ServerHost;
