//! HTTP adapter mapping for domain errors.
//!
//! Keeps [`Error`] HTTP-agnostic while letting handlers return it directly:
//! the code picks the status, internal failures are redacted, and the trace
//! identifier is echoed in the `trace-id` header.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message substituted for internal error details in responses.
pub const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal(REDACTED_MESSAGE);
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

/// Promote a domain failure the handler has no mapping for into an internal
/// error.
///
/// Codes other than `NotFound` and `Conflict` already describe
/// infrastructure failures and pass through untouched.
pub fn unhandled(err: Error) -> Error {
    match err.code() {
        ErrorCode::NotFound | ErrorCode::Conflict => {
            error!(
                code = ?err.code(),
                message = err.message(),
                trace_id = err.trace_id(),
                "unhandled domain error"
            );
            let promoted = Error::internal(err.message());
            match err.trace_id() {
                Some(id) => promoted.with_trace_id(id.to_owned()),
                None => promoted,
            }
        }
        _ => err,
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

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(REDACTED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::{fixture, rstest};
    use serde_json::json;

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    #[fixture]
    fn trace_id() -> String {
        TRACE_ID.to_owned()
    }

    async fn respond(error: Error) -> (StatusCode, Option<String>, Error) {
        let response = ResponseError::error_response(&error);
        let status = response.status();
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .map(|value| value.to_str().expect("ascii header").to_owned());
        let bytes = to_bytes(response.into_body())
            .await
            .expect("reading response body succeeds");
        let payload = serde_json::from_slice(&bytes).expect("error JSON");
        (status, header, payload)
    }

    #[rstest]
    #[case(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
    #[case(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
    #[case(ErrorCode::Conflict, StatusCode::CONFLICT)]
    #[case(ErrorCode::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE)]
    #[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_follows_code(#[case] code: ErrorCode, #[case] expected: StatusCode) {
        assert_eq!(status_for(code), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn internal_errors_are_redacted(trace_id: String) {
        let error = Error::internal("pool exhausted")
            .with_trace_id(trace_id.clone())
            .with_details(json!({ "secret": true }));

        let (status, header, payload) = respond(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(header.as_deref(), Some(trace_id.as_str()));
        assert_eq!(payload.message(), REDACTED_MESSAGE);
        assert!(payload.details().is_none());
        assert_eq!(payload.trace_id(), Some(trace_id.as_str()));
    }

    #[rstest]
    #[actix_web::test]
    async fn client_errors_keep_message_and_details() {
        let error = Error::invalid_request("bad id").with_details(json!({ "field": "id" }));

        let (status, header, payload) = respond(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(header.is_none());
        assert_eq!(payload.message(), "bad id");
        assert_eq!(payload.details(), Some(&json!({ "field": "id" })));
    }

    #[rstest]
    #[case(Error::not_found("Employee not found"))]
    #[case(Error::conflict("Employee already exists"))]
    fn unhandled_promotes_business_errors(#[case] error: Error) {
        let message = error.message().to_owned();
        let promoted = unhandled(error.with_trace_id(TRACE_ID));

        assert_eq!(promoted.code(), ErrorCode::InternalError);
        assert_eq!(promoted.message(), message);
        assert_eq!(promoted.trace_id(), Some(TRACE_ID));
    }

    #[test]
    fn unhandled_passes_infrastructure_errors_through() {
        let error = Error::service_unavailable("database down");
        assert_eq!(unhandled(error.clone()), error);
    }

    #[test]
    fn actix_errors_become_redacted_internal_errors() {
        let err: Error = actix_web::error::ErrorBadRequest("boom").into();

        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), REDACTED_MESSAGE);
    }
}
