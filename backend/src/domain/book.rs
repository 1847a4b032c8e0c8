//! Book records and identifiers.
//!
//! A [`Book`] is a value object describing one listing in the store. Books are
//! inserted from a [`BookDraft`], which carries no identifier or timestamps;
//! the storage engine assigns the identifier and the gateway stamps both
//! timestamps.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserId;

/// Storage-generated book identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct BookId(i32);

impl BookId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value as stored in the `bookstore.id` column.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for BookId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A book listing as persisted in the store.
///
/// ## Invariants
/// - `id` never changes once assigned.
/// - `updated_at >= created_at`.
///
/// Wire names are flattened lowercase: `issold`, `sellerid`, `createdat`,
/// `updatedat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: BookId,
    pub author: String,
    pub name: String,
    /// Price in the smallest currency unit.
    pub price: i32,
    #[serde(rename = "issold")]
    pub is_sold: bool,
    #[serde(rename = "sellerid")]
    pub seller_id: UserId,
    #[serde(rename = "createdat")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedat")]
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Project the mutable listing fields back into a draft.
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            author: self.author.clone(),
            name: self.name.clone(),
            price: self.price,
            is_sold: self.is_sold,
            seller_id: self.seller_id,
        }
    }
}

/// Input for inserting a new book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub author: String,
    pub name: String,
    pub price: i32,
    pub is_sold: bool,
    pub seller_id: UserId,
}

impl BookDraft {
    /// Materialise the draft into a record with the given identity and
    /// timestamp, as the store does on insert.
    pub fn into_book(self, id: BookId, now: DateTime<Utc>) -> Book {
        Book {
            id,
            author: self.author,
            name: self.name,
            price: self.price,
            is_sold: self.is_sold,
            seller_id: self.seller_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn fixture_book() -> Book {
        let now = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        BookDraft {
            author: "Orwell".into(),
            name: "1984".into(),
            price: 500,
            is_sold: false,
            seller_id: UserId::new(1),
        }
        .into_book(BookId::new(7), now)
    }

    #[rstest]
    fn serialises_with_flattened_wire_names() {
        let value = serde_json::to_value(fixture_book()).expect("serialise book");
        assert_eq!(value.get("id"), Some(&json!(7)));
        assert_eq!(value.get("issold"), Some(&Value::Bool(false)));
        assert_eq!(value.get("sellerid"), Some(&json!(1)));
        assert!(value.get("createdat").is_some());
        assert!(value.get("is_sold").is_none());
    }

    #[rstest]
    fn into_book_stamps_both_timestamps() {
        let book = fixture_book();
        assert_eq!(book.created_at, book.updated_at);
        assert_eq!(book.to_draft().price, 500);
    }
}
