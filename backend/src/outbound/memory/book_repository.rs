//! `BookRepository` over a lock-guarded ordered map.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use tokio::sync::RwLock;

use crate::domain::ports::{BookRepository, BookRepositoryError, MutationOutcome};
use crate::domain::{Book, BookDraft, BookId};

#[derive(Debug, Default)]
struct BookTable {
    last_id: i32,
    rows: BTreeMap<BookId, Book>,
}

/// In-memory book store.
#[derive(Clone)]
pub struct InMemoryBookRepository {
    table: Arc<RwLock<BookTable>>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl InMemoryBookRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Arc::new(RwLock::new(BookTable::default())),
            clock,
        }
    }

    async fn select<P>(&self, predicate: P) -> Vec<Book>
    where
        P: Fn(&Book) -> bool,
    {
        let table = self.table.read().await;
        table
            .rows
            .values()
            .filter(|book| predicate(book))
            .cloned()
            .collect()
    }

    async fn modify<F>(&self, id: BookId, change: F) -> MutationOutcome
    where
        F: FnOnce(&mut Book),
    {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(book) => {
                change(book);
                book.updated_at = self.clock.utc();
                MutationOutcome::Applied
            }
            None => MutationOutcome::Unmatched,
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn insert_book(&self, draft: &BookDraft) -> Result<BookId, BookRepositoryError> {
        let mut table = self.table.write().await;
        let next = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| BookRepositoryError::query("book id sequence exhausted"))?;
        table.last_id = next;
        let id = BookId::new(next);
        let book = draft.clone().into_book(id, self.clock.utc());
        table.rows.insert(id, book);
        Ok(id)
    }

    async fn list_books(&self) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(self.select(|_| true).await)
    }

    async fn list_sold_books(&self) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(self.select(|book| book.is_sold).await)
    }

    async fn list_unsold_books(&self) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(self.select(|book| !book.is_sold).await)
    }

    async fn list_books_by_author(&self, author: &str) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(self.select(|book| book.author == author).await)
    }

    async fn list_books_by_name(&self, name: &str) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(self.select(|book| book.name == name).await)
    }

    async fn list_books_by_max_price(
        &self,
        ceiling: i32,
    ) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(self.select(|book| book.price <= ceiling).await)
    }

    async fn mark_book_sold(&self, id: BookId) -> Result<MutationOutcome, BookRepositoryError> {
        Ok(self.modify(id, |book| book.is_sold = true).await)
    }

    async fn update_book_price(
        &self,
        id: BookId,
        price: i32,
    ) -> Result<MutationOutcome, BookRepositoryError> {
        Ok(self.modify(id, |book| book.price = price).await)
    }

    async fn delete_book(&self, id: BookId) -> Result<MutationOutcome, BookRepositoryError> {
        let removed = self.table.write().await.rows.remove(&id);
        Ok(if removed.is_some() {
            MutationOutcome::Applied
        } else {
            MutationOutcome::Unmatched
        })
    }
}
