//! Request body types and decoding.
//!
//! Bodies are read as raw bytes and decoded here rather than through
//! `web::Json`, so decoding failures produce the same error envelope as
//! every other failure and unknown fields are rejected.

use actix_web::{HttpMessage, HttpRequest};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::domain::{BookDraft, BookId, Error, UserId};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Book as submitted by clients.
///
/// Every field is optional on input and defaults to zero or empty; an
/// explicit `null` counts as absent. Field names match case-insensitively
/// (`Author`, `SellerID`). The identifier and timestamps are accepted but
/// ignored on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct BookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BookId>,
    pub author: String,
    pub name: String,
    pub price: i32,
    #[serde(rename = "issold")]
    pub is_sold: bool,
    #[serde(rename = "sellerid")]
    pub seller_id: UserId,
    #[serde(rename = "createdat", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedat", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BookPayload {
    /// Decode a request body, folding field names to lower case and dropping
    /// `null` members before the strict decode.
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        let value: Value = decode_json(body)?;
        serde_json::from_value(fold_members(value)).map_err(|err| {
            Error::invalid_request(format!("invalid JSON body: {err}"))
                .with_details(json!({ "field": "body" }))
        })
    }

    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            author: self.author.clone(),
            name: self.name.clone(),
            price: self.price,
            is_sold: self.is_sold,
            seller_id: self.seller_id,
        }
    }

    /// Echo of the submission carrying the identifier storage assigned.
    pub fn with_id(mut self, id: BookId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Reject anything but a well-formed `application/json` content type.
///
/// A missing or unparsable header is a bad request; a parsable but
/// different media type is unsupported.
pub fn require_json(req: &HttpRequest) -> Result<(), Error> {
    match req.mime_type() {
        Err(err) => Err(Error::invalid_request(format!(
            "invalid Content-Type header: {err}"
        ))),
        Ok(None) => Err(Error::invalid_request("missing Content-Type header")),
        Ok(Some(mime)) if mime.essence_str() != JSON_MEDIA_TYPE => {
            Err(Error::unsupported_media_type(format!(
                "expected {JSON_MEDIA_TYPE} Content-Type, got {}",
                mime.essence_str()
            ))
            .with_details(json!({ "field": "Content-Type" })))
        }
        Ok(Some(_)) => Ok(()),
    }
}

fn fold_members(value: Value) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .filter(|(_, member)| !member.is_null())
                .map(|(key, member)| (key.to_lowercase(), member))
                .collect(),
        ),
        other => other,
    }
}

/// Decode a JSON body, reporting where decoding stopped.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|err| {
        Error::invalid_request(format!("invalid JSON body: {err}")).with_details(json!({
            "field": "body",
            "line": err.line(),
            "column": err.column(),
        }))
    })
}
