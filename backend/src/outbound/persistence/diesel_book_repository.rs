//! PostgreSQL-backed `BookRepository` using Diesel.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use mockable::Clock;

use crate::domain::ports::{BookRepository, BookRepositoryError, MutationOutcome};
use crate::domain::{Book, BookDraft, BookId};

use super::deadline::{QUERY_TIMEOUT, run_with_deadline};
use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BookRow, NewBookRow};
use super::pool::{DbPool, PoolError};
use super::schema::books;

/// Diesel adapter for the book table.
///
/// Each call checks out one connection and issues one statement, all within
/// [`QUERY_TIMEOUT`]. Timestamps come from the injected clock.
#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselBookRepository {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    async fn load_books(
        &self,
        operation: &'static str,
        query: books::BoxedQuery<'_, Pg>,
    ) -> Result<Vec<Book>, BookRepositoryError> {
        run_with_deadline(operation, QUERY_TIMEOUT, async {
            let mut conn = self.pool.get().await.map_err(pool_error)?;
            let rows: Vec<BookRow> = query
                .select(BookRow::as_select())
                .load(&mut conn)
                .await
                .map_err(diesel_error)?;
            Ok(rows.into_iter().map(Book::from).collect())
        })
        .await
    }
}

fn pool_error(error: PoolError) -> BookRepositoryError {
    map_pool_error(error)
}

fn diesel_error(error: diesel::result::Error) -> BookRepositoryError {
    map_diesel_error(error)
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn insert_book(&self, draft: &BookDraft) -> Result<BookId, BookRepositoryError> {
        run_with_deadline("insert_book", QUERY_TIMEOUT, async {
            let mut conn = self.pool.get().await.map_err(pool_error)?;
            let id: i32 = diesel::insert_into(books::table)
                .values(NewBookRow::from_draft(draft, self.clock.utc()))
                .returning(books::id)
                .get_result(&mut conn)
                .await
                .map_err(diesel_error)?;
            Ok(BookId::new(id))
        })
        .await
    }

    async fn list_books(&self) -> Result<Vec<Book>, BookRepositoryError> {
        let query = books::table.order(books::id.asc()).into_boxed();
        self.load_books("list_books", query).await
    }

    async fn list_sold_books(&self) -> Result<Vec<Book>, BookRepositoryError> {
        let query = books::table
            .filter(books::is_sold.eq(true))
            .order(books::id.asc())
            .into_boxed();
        self.load_books("list_sold_books", query).await
    }

    async fn list_unsold_books(&self) -> Result<Vec<Book>, BookRepositoryError> {
        let query = books::table
            .filter(books::is_sold.eq(false))
            .order(books::id.asc())
            .into_boxed();
        self.load_books("list_unsold_books", query).await
    }

    async fn list_books_by_author(&self, author: &str) -> Result<Vec<Book>, BookRepositoryError> {
        let query = books::table.filter(books::author.eq(author)).into_boxed();
        self.load_books("list_books_by_author", query).await
    }

    async fn list_books_by_name(&self, name: &str) -> Result<Vec<Book>, BookRepositoryError> {
        let query = books::table.filter(books::name.eq(name)).into_boxed();
        self.load_books("list_books_by_name", query).await
    }

    async fn list_books_by_max_price(
        &self,
        ceiling: i32,
    ) -> Result<Vec<Book>, BookRepositoryError> {
        let query = books::table.filter(books::price.le(ceiling)).into_boxed();
        self.load_books("list_books_by_max_price", query).await
    }

    async fn mark_book_sold(&self, id: BookId) -> Result<MutationOutcome, BookRepositoryError> {
        run_with_deadline("mark_book_sold", QUERY_TIMEOUT, async {
            let mut conn = self.pool.get().await.map_err(pool_error)?;
            let rows = diesel::update(books::table.find(id.get()))
                .set((
                    books::is_sold.eq(true),
                    books::updated_at.eq(self.clock.utc()),
                ))
                .execute(&mut conn)
                .await
                .map_err(diesel_error)?;
            Ok(MutationOutcome::from_rows(rows))
        })
        .await
    }

    async fn update_book_price(
        &self,
        id: BookId,
        price: i32,
    ) -> Result<MutationOutcome, BookRepositoryError> {
        run_with_deadline("update_book_price", QUERY_TIMEOUT, async {
            let mut conn = self.pool.get().await.map_err(pool_error)?;
            let rows = diesel::update(books::table.find(id.get()))
                .set((
                    books::price.eq(price),
                    books::updated_at.eq(self.clock.utc()),
                ))
                .execute(&mut conn)
                .await
                .map_err(diesel_error)?;
            Ok(MutationOutcome::from_rows(rows))
        })
        .await
    }

    async fn delete_book(&self, id: BookId) -> Result<MutationOutcome, BookRepositoryError> {
        run_with_deadline("delete_book", QUERY_TIMEOUT, async {
            let mut conn = self.pool.get().await.map_err(pool_error)?;
            let rows = diesel::delete(books::table.find(id.get()))
                .execute(&mut conn)
                .await
                .map_err(diesel_error)?;
            Ok(MutationOutcome::from_rows(rows))
        })
        .await
    }
}
