//! HTTP inbound adapter exposing the bookstore REST endpoints.

pub mod books;
pub mod error;
pub mod health;
pub mod payload;
pub mod state;

pub use error::ApiResult;
