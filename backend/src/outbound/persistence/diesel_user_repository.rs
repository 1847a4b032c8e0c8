//! PostgreSQL-backed `UserRepository` using Diesel.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use mockable::Clock;

use crate::domain::ports::{MutationOutcome, UserRepository, UserRepositoryError};
use crate::domain::{User, UserDraft, UserId};

use super::deadline::{QUERY_TIMEOUT, run_with_deadline};
use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel adapter for the users table.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

fn pool_error(error: PoolError) -> UserRepositoryError {
    map_pool_error(error)
}

fn diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    map_diesel_error(error)
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert_user(&self, draft: &UserDraft) -> Result<UserId, UserRepositoryError> {
        run_with_deadline("insert_user", QUERY_TIMEOUT, async {
            let mut conn = self.pool.get().await.map_err(pool_error)?;
            let id: i32 = diesel::insert_into(users::table)
                .values(NewUserRow::from_draft(draft, self.clock.utc()))
                .returning(users::id)
                .get_result(&mut conn)
                .await
                .map_err(diesel_error)?;
            Ok(UserId::new(id))
        })
        .await
    }

    async fn delete_user(&self, id: UserId) -> Result<MutationOutcome, UserRepositoryError> {
        run_with_deadline("delete_user", QUERY_TIMEOUT, async {
            let mut conn = self.pool.get().await.map_err(pool_error)?;
            let rows = diesel::delete(users::table.find(id.get()))
                .execute(&mut conn)
                .await
                .map_err(diesel_error)?;
            Ok(MutationOutcome::from_rows(rows))
        })
        .await
    }

    async fn adjust_user_balance(
        &self,
        id: UserId,
        delta: i32,
    ) -> Result<MutationOutcome, UserRepositoryError> {
        // Applied as `balance = balance + delta` so concurrent calls compose.
        run_with_deadline("adjust_user_balance", QUERY_TIMEOUT, async {
            let mut conn = self.pool.get().await.map_err(pool_error)?;
            let rows = diesel::update(users::table.find(id.get()))
                .set((
                    users::balance.eq(users::balance + delta),
                    users::updated_at.eq(self.clock.utc()),
                ))
                .execute(&mut conn)
                .await
                .map_err(diesel_error)?;
            Ok(MutationOutcome::from_rows(rows))
        })
        .await
    }

    async fn update_user(&self, user: &User) -> Result<MutationOutcome, UserRepositoryError> {
        run_with_deadline("update_user", QUERY_TIMEOUT, async {
            let mut conn = self.pool.get().await.map_err(pool_error)?;
            let rows = diesel::update(users::table.find(user.id.get()))
                .set(UserUpdate::from_user(user, self.clock.utc()))
                .execute(&mut conn)
                .await
                .map_err(diesel_error)?;
            Ok(MutationOutcome::from_rows(rows))
        })
        .await
    }
}
