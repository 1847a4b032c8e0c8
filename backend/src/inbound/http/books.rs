//! Book listing endpoints.
//!
//! ```text
//! POST   /books                    {"author":"Orwell","name":"1984","price":500}
//! GET    /books
//! GET    /books/{author}
//! GET    /books/price/{price}
//! GET    /books/status/{issold}
//! GET    /books/name/{name}
//! PUT    /books/statusu/{id}
//! PUT    /books/priceid/{id}       {"price":650}
//! DELETE /books/delete/{id}
//! ```
//!
//! Storage failures answer 400 with the repository's message. Mutations on
//! ids that match nothing still answer 200.

use std::fmt::Display;
use std::str::FromStr;

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::{BookRepositoryError, MutationOutcome};
use crate::domain::{Book, BookId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::{BookPayload, require_json};
use crate::inbound::http::state::HttpState;

/// Register every book endpoint.
///
/// ```
/// use actix_web::{App, web};
/// use bookstore::inbound::http::books;
///
/// let _app = App::new().configure(books::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(insert_book)
        .service(list_books)
        .service(list_books_by_price)
        .service(list_books_by_status)
        .service(list_books_by_name)
        .service(list_books_by_author)
        .service(mark_book_sold)
        .service(update_book_price)
        .service(delete_book);
}

fn map_repository_error(err: BookRepositoryError) -> Error {
    warn!(error = %err, "book repository call failed");
    Error::invalid_request(err.to_string())
}

fn parse_segment<T>(raw: &str, field: &'static str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|err| {
        Error::invalid_request(format!("invalid {field} {raw:?}: {err}"))
            .with_details(json!({ "field": field, "value": raw }))
    })
}

fn report(outcome: MutationOutcome, operation: &'static str, id: BookId) -> HttpResponse {
    if !outcome.is_applied() {
        debug!(operation, %id, "no book matched");
    }
    HttpResponse::Ok().finish()
}

/// Insert a book and echo it back with its generated id.
#[utoipa::path(
    post,
    path = "/books",
    request_body = BookPayload,
    responses(
        (status = 200, description = "Stored book", body = BookPayload),
        (status = 400, description = "Malformed body or storage failure", body = Error),
        (status = 415, description = "Body is not JSON", body = Error)
    ),
    tags = ["books"],
    operation_id = "insertBook"
)]
#[post("/books")]
pub async fn insert_book(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<web::Json<BookPayload>> {
    require_json(&req)?;
    let payload = BookPayload::from_json(&body)?;
    let id = state
        .books
        .insert_book(&payload.to_draft())
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(payload.with_id(id)))
}

/// Every book, ascending by id.
#[utoipa::path(
    get,
    path = "/books",
    responses(
        (status = 200, description = "All books", body = [Book]),
        (status = 400, description = "Storage failure", body = Error)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/books")]
pub async fn list_books(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Book>>> {
    let books = state.books.list_books().await.map_err(map_repository_error)?;
    Ok(web::Json(books))
}

/// Books by exact author.
#[utoipa::path(
    get,
    path = "/books/{author}",
    params(("author" = String, Path, description = "Exact author name")),
    responses(
        (status = 200, description = "Matching books", body = [Book]),
        (status = 400, description = "Storage failure", body = Error)
    ),
    tags = ["books"],
    operation_id = "listBooksByAuthor"
)]
#[get("/books/{author}")]
pub async fn list_books_by_author(
    state: web::Data<HttpState>,
    author: web::Path<String>,
) -> ApiResult<web::Json<Vec<Book>>> {
    let books = state
        .books
        .list_books_by_author(&author)
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(books))
}

/// Books priced at or below the ceiling.
#[utoipa::path(
    get,
    path = "/books/price/{price}",
    params(("price" = i32, Path, description = "Inclusive price ceiling")),
    responses(
        (status = 200, description = "Matching books", body = [Book]),
        (status = 400, description = "Non-integer price or storage failure", body = Error)
    ),
    tags = ["books"],
    operation_id = "listBooksByPrice"
)]
#[get("/books/price/{price}")]
pub async fn list_books_by_price(
    state: web::Data<HttpState>,
    price: web::Path<String>,
) -> ApiResult<web::Json<Vec<Book>>> {
    let ceiling: i32 = parse_segment(&price, "price")?;
    let books = state
        .books
        .list_books_by_max_price(ceiling)
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(books))
}

/// Sold (`true`) or unsold (`false`) books, ascending by id.
#[utoipa::path(
    get,
    path = "/books/status/{issold}",
    params(("issold" = bool, Path, description = "`true` for sold books, `false` for unsold")),
    responses(
        (status = 200, description = "Matching books", body = [Book]),
        (status = 400, description = "Non-boolean segment or storage failure", body = Error)
    ),
    tags = ["books"],
    operation_id = "listBooksByStatus"
)]
#[get("/books/status/{issold}")]
pub async fn list_books_by_status(
    state: web::Data<HttpState>,
    is_sold: web::Path<String>,
) -> ApiResult<web::Json<Vec<Book>>> {
    let books = if parse_segment::<bool>(&is_sold, "issold")? {
        state.books.list_sold_books().await
    } else {
        state.books.list_unsold_books().await
    }
    .map_err(map_repository_error)?;
    Ok(web::Json(books))
}

/// Books by exact title.
#[utoipa::path(
    get,
    path = "/books/name/{name}",
    params(("name" = String, Path, description = "Exact book title")),
    responses(
        (status = 200, description = "Matching books", body = [Book]),
        (status = 400, description = "Storage failure", body = Error)
    ),
    tags = ["books"],
    operation_id = "listBooksByName"
)]
#[get("/books/name/{name}")]
pub async fn list_books_by_name(
    state: web::Data<HttpState>,
    name: web::Path<String>,
) -> ApiResult<web::Json<Vec<Book>>> {
    let books = state
        .books
        .list_books_by_name(&name)
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(books))
}

/// Mark a book sold.
#[utoipa::path(
    put,
    path = "/books/statusu/{id}",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Applied, or no book had this id"),
        (status = 400, description = "Non-integer id or storage failure", body = Error)
    ),
    tags = ["books"],
    operation_id = "markBookSold"
)]
#[put("/books/statusu/{id}")]
pub async fn mark_book_sold(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = BookId::new(parse_segment(&id, "id")?);
    let outcome = state
        .books
        .mark_book_sold(id)
        .await
        .map_err(map_repository_error)?;
    Ok(report(outcome, "mark_book_sold", id))
}

/// Replace a book's price with the `price` field of the body.
#[utoipa::path(
    put,
    path = "/books/priceid/{id}",
    params(("id" = i32, Path, description = "Book id")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Applied, or no book had this id"),
        (status = 400, description = "Malformed input or storage failure", body = Error)
    ),
    tags = ["books"],
    operation_id = "updateBookPrice"
)]
#[put("/books/priceid/{id}")]
pub async fn update_book_price(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let id = BookId::new(parse_segment(&id, "id")?);
    let payload = BookPayload::from_json(&body)?;
    let outcome = state
        .books
        .update_book_price(id, payload.price)
        .await
        .map_err(map_repository_error)?;
    Ok(report(outcome, "update_book_price", id))
}

/// Remove a book.
#[utoipa::path(
    delete,
    path = "/books/delete/{id}",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Removed, or no book had this id"),
        (status = 400, description = "Non-integer id or storage failure", body = Error)
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
#[delete("/books/delete/{id}")]
pub async fn delete_book(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = BookId::new(parse_segment(&id, "id")?);
    let outcome = state
        .books
        .delete_book(id)
        .await
        .map_err(map_repository_error)?;
    Ok(report(outcome, "delete_book", id))
}
