//! `UserRepository` over a lock-guarded ordered map.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use tokio::sync::RwLock;

use crate::domain::ports::{MutationOutcome, UserRepository, UserRepositoryError};
use crate::domain::{User, UserDraft, UserId};

#[derive(Debug, Default)]
struct UserTable {
    last_id: i32,
    rows: BTreeMap<UserId, User>,
}

/// In-memory user store.
///
/// The port has no read operations, so [`find_user`](Self::find_user) is
/// offered for inspection.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl InMemoryUserRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Arc::new(RwLock::new(UserTable::default())),
            clock,
        }
    }

    /// Current state of a stored user.
    pub async fn find_user(&self, id: UserId) -> Option<User> {
        self.table.read().await.rows.get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert_user(&self, draft: &UserDraft) -> Result<UserId, UserRepositoryError> {
        let mut table = self.table.write().await;
        let next = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| UserRepositoryError::query("user id sequence exhausted"))?;
        table.last_id = next;
        let id = UserId::new(next);
        table
            .rows
            .insert(id, draft.clone().into_user(id, self.clock.utc()));
        Ok(id)
    }

    async fn delete_user(&self, id: UserId) -> Result<MutationOutcome, UserRepositoryError> {
        let removed = self.table.write().await.rows.remove(&id);
        Ok(if removed.is_some() {
            MutationOutcome::Applied
        } else {
            MutationOutcome::Unmatched
        })
    }

    async fn adjust_user_balance(
        &self,
        id: UserId,
        delta: i32,
    ) -> Result<MutationOutcome, UserRepositoryError> {
        let mut table = self.table.write().await;
        let Some(user) = table.rows.get_mut(&id) else {
            return Ok(MutationOutcome::Unmatched);
        };
        // Same failure PostgreSQL raises for int4 overflow.
        user.balance = user
            .balance
            .checked_add(delta)
            .ok_or_else(|| UserRepositoryError::query("integer out of range"))?;
        user.updated_at = self.clock.utc();
        Ok(MutationOutcome::Applied)
    }

    async fn update_user(&self, user: &User) -> Result<MutationOutcome, UserRepositoryError> {
        let mut table = self.table.write().await;
        let Some(stored) = table.rows.get_mut(&user.id) else {
            return Ok(MutationOutcome::Unmatched);
        };
        stored.first_name.clone_from(&user.first_name);
        stored.last_name.clone_from(&user.last_name);
        stored.email.clone_from(&user.email);
        stored.password.clone_from(&user.password);
        stored.balance = user.balance;
        stored.updated_at = self.clock.utc();
        Ok(MutationOutcome::Applied)
    }
}
