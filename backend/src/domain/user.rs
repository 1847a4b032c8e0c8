//! User accounts.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Book;

/// Storage-generated user identifier.
///
/// Also used as the seller reference on [`Book`]; that reference is not
/// checked against the `users` table.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value as stored in the `users.id` column.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user.
///
/// `bought_books` and `sold_books` are derived views; the gateway never
/// persists them and leaves them empty when reading. The password is stored
/// as given and is never serialised back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: UserId,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Role tier.
    #[serde(rename = "accesslevel")]
    pub access_level: i32,
    /// Balance in the smallest currency unit.
    pub balance: i32,
    #[serde(rename = "boughtbooks", default)]
    pub bought_books: Vec<Book>,
    #[serde(rename = "sellbooks", default)]
    pub sold_books: Vec<Book>,
    #[serde(rename = "createdat")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedat")]
    pub updated_at: DateTime<Utc>,
}

/// Input for inserting a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub access_level: i32,
    pub balance: i32,
}

impl UserDraft {
    /// Materialise the draft into a record with the given identity and
    /// timestamp.
    pub fn into_user(self, id: UserId, now: DateTime<Utc>) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            access_level: self.access_level,
            balance: self.balance,
            bought_books: Vec::new(),
            sold_books: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn password_is_never_serialised() {
        let user = UserDraft {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "hunter2".into(),
            access_level: 1,
            balance: 0,
        }
        .into_user(UserId::new(3), Utc::now());

        let value = serde_json::to_value(&user).expect("serialise user");
        assert!(value.get("password").is_none());
        assert_eq!(value.get("firstname").and_then(|v| v.as_str()), Some("Ada"));
        assert_eq!(
            value.get("sellbooks").and_then(|v| v.as_array()).map(Vec::len),
            Some(0)
        );
    }
}
