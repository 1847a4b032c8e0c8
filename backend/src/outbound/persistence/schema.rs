//! Diesel table definitions for the PostgreSQL schema.
//!
//! Column declaration order is the record layout: `Queryable` rows scan in
//! this order and inserts bind in it. Keep these in step with the live
//! tables; `diesel print-schema` regenerates them from a database.

diesel::table! {
    /// Book listings.
    #[sql_name = "bookstore"]
    books (id) {
        /// Primary key, generated by the database.
        id -> Int4,
        author -> Text,
        name -> Text,
        /// Price in the smallest currency unit.
        price -> Int4,
        #[sql_name = "issold"]
        is_sold -> Bool,
        /// Unvalidated reference to `users.id`.
        #[sql_name = "sellerid"]
        seller_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// User accounts.
    users (id) {
        /// Primary key, generated by the database.
        id -> Int4,
        first_name -> Text,
        last_name -> Text,
        email -> Text,
        /// Stored exactly as submitted.
        password -> Text,
        #[sql_name = "accesslevel"]
        access_level -> Int4,
        balance -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
