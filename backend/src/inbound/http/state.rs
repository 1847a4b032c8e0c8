//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the storage
//! ports, so tests can swap in the in-memory or mocked repositories.

use std::sync::Arc;

use crate::domain::ports::BookRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub books: Arc<dyn BookRepository>,
}

impl HttpState {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }
}
