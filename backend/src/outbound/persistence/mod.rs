//! PostgreSQL persistence adapters using Diesel with `diesel-async` and bb8.
//!
//! Repositories only translate between row structs and domain records.
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module.
//!
//! ```ignore
//! use bookstore::outbound::persistence::{DbPool, DieselBookRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let books = DieselBookRepository::new(pool, Arc::new(DefaultClock));
//! ```

mod deadline;
mod diesel_book_repository;
mod diesel_user_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use deadline::QUERY_TIMEOUT;
pub use diesel_book_repository::DieselBookRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
