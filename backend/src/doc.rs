//! OpenAPI document for the REST API.
//!
//! Served through Swagger UI at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{Book, BookId, Error, ErrorCode, User, UserId};
use crate::inbound::http::payload::BookPayload;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        description = "Book listings backed by PostgreSQL, plus health probes."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::books::insert_book,
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::list_books_by_author,
        crate::inbound::http::books::list_books_by_price,
        crate::inbound::http::books::list_books_by_status,
        crate::inbound::http::books::list_books_by_name,
        crate::inbound::http::books::mark_book_sold,
        crate::inbound::http::books::update_book_price,
        crate::inbound::http::books::delete_book,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Book, BookId, BookPayload, User, UserId, Error, ErrorCode)),
    tags(
        (name = "books", description = "Book listings"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;
