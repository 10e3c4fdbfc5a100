//! Error types for the API client.

use std::fmt;

use serde_json::Value;

/// Status reported for failures where no HTTP response was received.
pub const NETWORK_ERROR_STATUS: u16 = 500;

const FALLBACK_MESSAGE: &str = "An unexpected error occurred";

/// Classification of a failed API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// HTTP 401: the API key was missing or rejected.
    Authentication,
    /// HTTP 400: the request parameters were rejected.
    Validation,
    /// HTTP 404: the resource does not exist.
    NotFound,
    /// HTTP 429: the account exceeded its request quota.
    RateLimit,
    /// HTTP 500, 502, 503 or 504.
    Server,
    /// Any other non-success status, or a success body that could not be decoded.
    Generic,
    /// No response was received at all (connect failure, DNS, timeout).
    Network,
}

impl ErrorKind {
    /// Maps a non-success HTTP status onto its error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ErrorKind::Authentication,
            400 => ErrorKind::Validation,
            404 => ErrorKind::NotFound,
            429 => ErrorKind::RateLimit,
            500 | 502 | 503 | 504 => ErrorKind::Server,
            _ => ErrorKind::Generic,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ErrorKind::Authentication => "authentication error",
                ErrorKind::Validation => "validation error",
                ErrorKind::NotFound => "not found",
                ErrorKind::RateLimit => "rate limited",
                ErrorKind::Server => "server error",
                ErrorKind::Generic => "api error",
                ErrorKind::Network => "network error",
            }
        )
    }
}

/// A failed API call.
///
/// Every failure surfaces as exactly one `Error`: match on [`Error::kind`] for
/// specific handling, or fall back to the message and status. The decoded
/// response body is kept for inspection when one was received.
#[derive(thiserror::Error, Debug)]
#[error("{kind} (HTTP {status}): {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: u16,
    body: Option<Value>,
}

impl Error {
    /// Builds an error from a non-success response.
    ///
    /// `body` is the raw response text; it is kept as JSON when it parses and
    /// as a JSON string otherwise. `reason` is the status line text, used when
    /// the body carries no message.
    pub(crate) fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        let body = parse_body(body);
        let message = extract_message(body.as_ref(), reason);
        Self {
            kind: ErrorKind::from_status(status),
            message,
            status,
            body,
        }
    }

    /// Builds an error for a transport failure where no response arrived.
    pub(crate) fn network(source: impl fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Network,
            message: format!("Network error: {}", source),
            status: NETWORK_ERROR_STATUS,
            body: None,
        }
    }

    /// Builds an error for a success response whose body could not be decoded.
    pub(crate) fn decode(status: u16, source: impl fmt::Display, body: &str) -> Self {
        Self {
            kind: ErrorKind::Generic,
            message: format!("Failed to decode response body: {}", source),
            status,
            body: Some(Value::String(body.to_string())),
        }
    }

    /// Builds a generic error for failures raised before a request is sent.
    pub(crate) fn generic(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Generic,
            message: message.into(),
            status: NETWORK_ERROR_STATUS,
            body: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the failed response, or 500 when none was received.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The response body, if one was received.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Whether the caller may reasonably retry: rate limits, server and network errors.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::RateLimit | ErrorKind::Server | ErrorKind::Network
        )
    }
}

fn parse_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
}

fn extract_message(body: Option<&Value>, reason: Option<&str>) -> String {
    let from_body = body.and_then(|body| match body {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Object(map) => ["error", "message"]
            .iter()
            .filter_map(|field| map.get(*field))
            .find_map(field_text),
        _ => None,
    });
    from_body
        .or_else(|| reason.filter(|r| !r.is_empty()).map(str::to_string))
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Error, ErrorKind, NETWORK_ERROR_STATUS};

    #[test]
    fn classifies_listed_statuses() {
        let cases = [
            (401, ErrorKind::Authentication),
            (400, ErrorKind::Validation),
            (404, ErrorKind::NotFound),
            (429, ErrorKind::RateLimit),
            (500, ErrorKind::Server),
            (502, ErrorKind::Server),
            (503, ErrorKind::Server),
            (504, ErrorKind::Server),
        ];
        for (status, kind) in cases {
            assert_eq!(ErrorKind::from_status(status), kind, "status {}", status);
        }
    }

    #[test]
    fn unlisted_statuses_are_generic() {
        for status in [402, 403, 405, 409, 418, 422, 501, 505] {
            assert_eq!(ErrorKind::from_status(status), ErrorKind::Generic);
        }
    }

    #[test]
    fn message_prefers_error_field() {
        let err = Error::from_response(
            400,
            Some("Bad Request"),
            r#"{"error":"bad season","message":"ignored"}"#,
        );
        assert_eq!(err.message(), "bad season");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.body(), Some(&json!({"error":"bad season","message":"ignored"})));
    }

    #[test]
    fn message_falls_back_to_message_field() {
        let err = Error::from_response(404, Some("Not Found"), r#"{"message":"x"}"#);
        assert_eq!(err.message(), "x");
    }

    #[test]
    fn plain_text_body_is_used_verbatim() {
        let err = Error::from_response(500, Some("Internal Server Error"), "oops");
        assert_eq!(err.message(), "oops");
        assert_eq!(err.body(), Some(&json!("oops")));
    }

    #[test]
    fn json_string_body_is_used_verbatim() {
        let err = Error::from_response(503, None, r#""down for maintenance""#);
        assert_eq!(err.message(), "down for maintenance");
    }

    #[test]
    fn empty_body_uses_status_reason() {
        let err = Error::from_response(503, Some("Service Unavailable"), "");
        assert_eq!(err.message(), "Service Unavailable");
        assert!(err.body().is_none());
    }

    #[test]
    fn object_without_message_uses_status_reason() {
        let err = Error::from_response(429, Some("Too Many Requests"), r#"{"detail":"slow"}"#);
        assert_eq!(err.message(), "Too Many Requests");
        assert_eq!(err.kind(), ErrorKind::RateLimit);
    }

    #[test]
    fn no_reason_uses_generic_fallback() {
        let err = Error::from_response(499, None, "{}");
        assert_eq!(err.message(), "An unexpected error occurred");
        assert_eq!(err.kind(), ErrorKind::Generic);
    }

    #[test]
    fn non_string_error_field_is_stringified() {
        let err = Error::from_response(400, None, r#"{"error":{"season":"required"}}"#);
        assert_eq!(err.message(), r#"{"season":"required"}"#);
    }

    #[test]
    fn network_error_uses_sentinel_status() {
        let err = Error::network("connection refused");
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.status(), NETWORK_ERROR_STATUS);
        assert!(err.body().is_none());
        assert!(err.message().contains("connection refused"));
        assert!(err.is_retryable());
    }

    #[test]
    fn decode_error_keeps_raw_body() {
        let err = Error::decode(200, "expected value", "{not json}");
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.status(), 200);
        assert_eq!(err.body(), Some(&json!("{not json}")));
        assert!(!err.is_retryable());
    }

    #[test]
    fn display_includes_kind_status_and_message() {
        let err = Error::from_response(404, None, r#"{"error":"Team not found"}"#);
        assert_eq!(err.to_string(), "not found (HTTP 404): Team not found");
    }
}
