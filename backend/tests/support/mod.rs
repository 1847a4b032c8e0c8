//! Shared fixtures for integration tests.
//!
//! Each file under `tests/` is its own crate, so not every helper is used
//! everywhere.
#![allow(dead_code)]

pub mod embedded_postgres;

use bookstore::domain::{BookDraft, UserDraft, UserId};

pub fn book_draft(author: &str, name: &str, price: i32, is_sold: bool) -> BookDraft {
    BookDraft {
        author: author.to_owned(),
        name: name.to_owned(),
        price,
        is_sold,
        seller_id: UserId::new(1),
    }
}

pub fn user_draft(email: &str, balance: i32) -> UserDraft {
    UserDraft {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: email.to_owned(),
        password: "engine".to_owned(),
        access_level: 1,
        balance,
    }
}
