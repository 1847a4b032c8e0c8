//! Port for user persistence.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::{MutationOutcome, define_port_error};

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
        /// The store rejected the write on an integrity constraint.
        Constraint { message: String } =>
            "user repository constraint violated: {message}",
        /// The call did not complete before its deadline.
        Timeout { operation: String, millis: u64 } =>
            "user repository {operation} timed out after {millis} ms",
    }
}

/// User storage contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the generated identifier.
    async fn insert_user(&self, draft: &UserDraft) -> Result<UserId, UserRepositoryError>;

    /// Remove a user. Books listing this user as seller are left untouched.
    async fn delete_user(&self, id: UserId) -> Result<MutationOutcome, UserRepositoryError>;

    /// Add `delta` (which may be negative) to the stored balance.
    async fn adjust_user_balance(
        &self,
        id: UserId,
        delta: i32,
    ) -> Result<MutationOutcome, UserRepositoryError>;

    /// Overwrite names, email, password and balance of `user.id`.
    ///
    /// Access level and the derived book lists are never written.
    async fn update_user(&self, user: &User) -> Result<MutationOutcome, UserRepositoryError>;
}
