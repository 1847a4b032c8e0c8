//! Port for book persistence.

use async_trait::async_trait;

use crate::domain::{Book, BookDraft, BookId};

use super::{MutationOutcome, define_port_error};

define_port_error! {
    /// Errors raised by book repository adapters.
    pub enum BookRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "book repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "book repository query failed: {message}",
        /// The store rejected the write on an integrity constraint.
        Constraint { message: String } =>
            "book repository constraint violated: {message}",
        /// The call did not complete before its deadline.
        Timeout { operation: String, millis: u64 } =>
            "book repository {operation} timed out after {millis} ms",
    }
}

/// Book storage contract used by the HTTP adapter.
///
/// Listing order: [`list_books`](Self::list_books),
/// [`list_sold_books`](Self::list_sold_books) and
/// [`list_unsold_books`](Self::list_unsold_books) are ascending by id. The
/// author, name and price lookups make no ordering promise.
///
/// Mutations keyed by id report [`MutationOutcome::Unmatched`] rather than an
/// error when the id does not exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a book and return its generated identifier.
    async fn insert_book(&self, draft: &BookDraft) -> Result<BookId, BookRepositoryError>;

    /// Every book, ascending by id.
    async fn list_books(&self) -> Result<Vec<Book>, BookRepositoryError>;

    /// Books marked sold, ascending by id.
    async fn list_sold_books(&self) -> Result<Vec<Book>, BookRepositoryError>;

    /// Books not yet sold, ascending by id.
    async fn list_unsold_books(&self) -> Result<Vec<Book>, BookRepositoryError>;

    /// Books whose author matches exactly.
    async fn list_books_by_author(&self, author: &str) -> Result<Vec<Book>, BookRepositoryError>;

    /// Books whose name matches exactly.
    async fn list_books_by_name(&self, name: &str) -> Result<Vec<Book>, BookRepositoryError>;

    /// Books priced at or below `ceiling`.
    async fn list_books_by_max_price(&self, ceiling: i32)
    -> Result<Vec<Book>, BookRepositoryError>;

    /// Mark a book sold. Repeating the call is harmless.
    async fn mark_book_sold(&self, id: BookId) -> Result<MutationOutcome, BookRepositoryError>;

    /// Replace a book's price.
    async fn update_book_price(
        &self,
        id: BookId,
        price: i32,
    ) -> Result<MutationOutcome, BookRepositoryError>;

    /// Remove a book.
    async fn delete_book(&self, id: BookId) -> Result<MutationOutcome, BookRepositoryError>;
}
