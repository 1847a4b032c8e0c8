//! Domain primitives and storage ports.
//!
//! Purpose: define the bookstore's records and the contracts adapters
//! implement. Serialisation contracts live on each type's Rustdoc.
//!
//! Public surface:
//! - Book, BookDraft, BookId: a listing and its insert payload.
//! - User, UserDraft, UserId: an account and its insert payload.
//! - Error, ErrorCode: transport-agnostic failure envelope.
//! - TraceId: per-request correlation identifier.

pub mod book;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::book::{Book, BookDraft, BookId};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use bookstore::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::invalid_request("price must be an integer"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
