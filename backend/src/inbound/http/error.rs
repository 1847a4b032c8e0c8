//! HTTP mapping for domain errors.
//!
//! Handlers return [`Error`]; this module picks the status code and renders
//! the JSON envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::unsupported_media_type("text/plain"), StatusCode::UNSUPPORTED_MEDIA_TYPE)]
    fn maps_codes_to_statuses(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[actix_web::test]
    async fn trace_id_is_echoed_in_header_and_body() {
        let error = Error::unsupported_media_type("text/plain").with_trace_id("abc");

        let response = error.error_response();
        assert_eq!(
            response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some("abc")
        );
        let body = to_bytes(response.into_body()).await.expect("body");
        let value: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(value["code"], "unsupported_media_type");
        assert_eq!(value["traceId"], "abc");
    }

    #[actix_web::test]
    async fn request_errors_keep_their_text() {
        let response =
            Error::invalid_request("book repository query failed: boom").error_response();

        let body = to_bytes(response.into_body()).await.expect("body");
        let value: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(value["code"], "invalid_request");
        assert_eq!(value["message"], "book repository query failed: boom");
    }
}
