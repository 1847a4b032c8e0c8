//! In-process repositories with the same observable semantics as the
//! PostgreSQL adapters: generated ids start at 1, listings are ascending by
//! id, and keyed mutations on unknown ids report `Unmatched`.
//!
//! Used by handler tests and for running the service without a database.

mod book_repository;
mod user_repository;

pub use book_repository::InMemoryBookRepository;
pub use user_repository::InMemoryUserRepository;
