//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them to
//! and from the domain records.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Book, BookDraft, BookId, User, UserDraft, UserId};

use super::schema::{books, users};

/// Row struct for reading from the book table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookRow {
    pub id: i32,
    pub author: String,
    pub name: String,
    pub price: i32,
    pub is_sold: bool,
    pub seller_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: BookId::new(row.id),
            author: row.author,
            name: row.name,
            price: row.price,
            is_sold: row.is_sold,
            seller_id: UserId::new(row.seller_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable struct for new book records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub(crate) struct NewBookRow<'a> {
    pub author: &'a str,
    pub name: &'a str,
    pub price: i32,
    pub is_sold: bool,
    pub seller_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> NewBookRow<'a> {
    /// Bind a draft with both timestamps set to `now`.
    pub fn from_draft(draft: &'a BookDraft, now: DateTime<Utc>) -> Self {
        Self {
            author: &draft.author,
            name: &draft.name,
            price: draft.price,
            is_sold: draft.is_sold,
            seller_id: draft.seller_id.get(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Insertable struct for new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub access_level: i32,
    pub balance: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> NewUserRow<'a> {
    pub fn from_draft(draft: &'a UserDraft, now: DateTime<Utc>) -> Self {
        Self {
            first_name: &draft.first_name,
            last_name: &draft.last_name,
            email: &draft.email,
            password: &draft.password,
            access_level: draft.access_level,
            balance: draft.balance,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Changeset for a full user update.
///
/// Access level and creation time are deliberately absent.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub balance: i32,
    pub updated_at: DateTime<Utc>,
}

impl<'a> UserUpdate<'a> {
    pub fn from_user(user: &'a User, now: DateTime<Utc>) -> Self {
        Self {
            first_name: &user.first_name,
            last_name: &user.last_name,
            email: &user.email,
            password: &user.password,
            balance: user.balance,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn book_row_maps_every_column() {
        let at = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp");
        let book = Book::from(BookRow {
            id: 9,
            author: "Le Guin".into(),
            name: "The Dispossessed".into(),
            price: 1200,
            is_sold: true,
            seller_id: 4,
            created_at: at,
            updated_at: at,
        });

        assert_eq!(book.id, BookId::new(9));
        assert_eq!(book.seller_id, UserId::new(4));
        assert!(book.is_sold);
        assert_eq!(book.price, 1200);
    }

    #[rstest]
    fn user_update_omits_access_level() {
        let at = Utc::now();
        let user = UserDraft {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "engine".into(),
            access_level: 3,
            balance: 40,
        }
        .into_user(UserId::new(1), at);

        let update = UserUpdate::from_user(&user, at);
        assert_eq!(update.balance, 40);
        assert_eq!(update.first_name, "Ada");
    }
}
