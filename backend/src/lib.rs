//! Bookstore service library: domain records, storage ports and their
//! PostgreSQL and in-memory adapters, and the actix-web HTTP adapter.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI.
pub use doc::ApiDoc;
pub use middleware::Trace;
