//! Domain ports: the storage contracts the HTTP adapter depends on.

mod macros;
pub(crate) use macros::define_port_error;

mod book_repository;
mod mutation_outcome;
mod user_repository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::{BookRepository, BookRepositoryError};
pub use mutation_outcome::MutationOutcome;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
