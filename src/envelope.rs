//! Wire envelope handling: payload rendering, transport outcomes, and the
//! response classification that every operation funnels through.
//!
//! The API wraps both success and failure payloads in a JSON envelope whose
//! exact shape varies per endpoint. Classification is therefore layered:
//! the transport status text is checked first (timeouts and HTTP error
//! names), then the envelope's own `status` discriminant, and only for
//! bodies carrying no discriminant at all does the legacy substring
//! heuristic decide. Decoding is a pure function of the outcome, so the
//! same `(status, body)` pair always classifies the same way.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Error, ErrorDetails};
use crate::Result;

/// Status text reported when the configured deadline cancels a call.
pub(crate) const TIMEOUT_MARKER: &str = "Request cancelled due to timeout.";

/// Coarse result of one transport round trip. `status` is an HTTP status
/// name, the timeout marker, or a transport error's display text; `body` is
/// the raw response text and is empty for every transport-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiOutcome {
    pub status: String,
    pub body: String,
}

impl ApiOutcome {
    pub(crate) fn new(status: impl Into<String>, body: impl Into<String>) -> Self {
        ApiOutcome {
            status: status.into(),
            body: body.into(),
        }
    }

    /// Outcome for a call cancelled by the configured timeout.
    pub(crate) fn timeout() -> Self {
        ApiOutcome {
            status: TIMEOUT_MARKER.to_string(),
            body: String::new(),
        }
    }
}

/// HTTP status rendered the way the API's other SDKs report it: the
/// canonical reason phrase with separators removed (`OK`, `BadRequest`,
/// `InternalServerError`). Unregistered codes fall back to the number.
pub(crate) fn status_name(status: reqwest::StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.chars().filter(char::is_ascii_alphanumeric).collect(),
        None => status.as_u16().to_string(),
    }
}

/// Request body in one of its two accepted forms.
#[derive(Debug, Clone)]
pub(crate) enum Payload {
    /// A typed request, already serialized.
    Json(String),
    /// Caller-supplied text, rendered through the pass-through heuristic.
    Text(String),
}

impl Payload {
    /// Serialize a typed request up front so serialization failures surface
    /// before anything touches the network.
    pub(crate) fn json<T>(request: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        Ok(Payload::Json(serde_json::to_string(request)?))
    }

    pub(crate) fn text(body: impl Into<String>) -> Self {
        Payload::Text(body.into())
    }

    /// Render the wire body. Text that already looks like JSON (contains a
    /// `{`) is sent byte-for-byte; any other text is encoded as a JSON
    /// string. The heuristic is load-bearing for wire compatibility and must
    /// not be tightened.
    pub(crate) fn render(self) -> String {
        match self {
            Payload::Json(body) => body,
            Payload::Text(body) if body.contains('{') => body,
            Payload::Text(body) => Value::String(body).to_string(),
        }
    }
}

/// Decode a transport outcome into the operation's response type.
///
/// Timeouts never parse the body (it is known empty; a non-empty body is
/// ignored). Outcomes classified as failed produce [`Error::Api`] carrying
/// the raw status text, with details decoded from the error envelope when
/// one is present. Everything else deserializes the body into `T`; a body
/// that cannot be read is a [`Error::MalformedResponse`], never a silent
/// empty result.
pub(crate) fn decode<T>(outcome: ApiOutcome) -> Result<T>
where
    T: DeserializeOwned,
{
    let status_lower = outcome.status.to_ascii_lowercase();

    if status_lower.contains("timeout") {
        return Err(Error::Api(ApiError {
            details: Some(ErrorDetails::timeout(&outcome.status)),
            status: outcome.status,
        }));
    }

    let parsed: Option<Value> = serde_json::from_str(&outcome.body).ok();

    if is_error_outcome(&status_lower, &outcome.body, parsed.as_ref()) {
        return Err(error_from_body(outcome.status, &outcome.body, parsed.as_ref()));
    }

    match parsed {
        Some(value) => serde_json::from_value(value).map_err(|source| {
            malformed(
                format!("response did not match the expected shape: {source}"),
                &outcome.body,
            )
        }),
        None => Err(malformed("response body is not valid JSON", &outcome.body)),
    }
}

/// Layered error classification.
///
/// The status text rules are inherited from the wire contract: HTTP error
/// names contain "error", and cancellations carry the timeout marker. The
/// body is consulted through its `status` discriminant when it has one; the
/// substring scan survives only for discriminant-free bodies, so a success
/// envelope whose payload happens to contain the word "error" still decodes
/// as success.
fn is_error_outcome(status_lower: &str, body: &str, parsed: Option<&Value>) -> bool {
    if status_lower.contains("cancelled") || status_lower.contains("error") {
        return true;
    }

    if let Some(status) = envelope_status(parsed) {
        return !status.eq_ignore_ascii_case("success");
    }

    if let Some(object) = parsed.and_then(Value::as_object) {
        if object.contains_key("error") {
            return true;
        }
    }

    body.to_ascii_lowercase().contains("error")
}

fn envelope_status(parsed: Option<&Value>) -> Option<&str> {
    parsed?.get("status")?.as_str()
}

fn error_from_body(status: String, body: &str, parsed: Option<&Value>) -> Error {
    if body.trim().is_empty() {
        // Transport failures report through the status text alone.
        return Error::Api(ApiError {
            status,
            details: None,
        });
    }

    match parsed.and_then(error_details_from) {
        Some(details) => Error::Api(ApiError {
            status,
            details: Some(details),
        }),
        None => malformed("error envelope did not decode", body),
    }
}

/// Extract `ErrorDetails` from an error envelope. Accepts both the nested
/// `{"status": "error", "error": {"code": N, "message": "..."}}` form and
/// the flat `code`/`message` form some endpoints return. A body with none
/// of the envelope's fields is not an error envelope at all.
fn error_details_from(value: &Value) -> Option<ErrorDetails> {
    let object = value.as_object()?;
    let nested = object.get("error").and_then(Value::as_object);
    let fields = nested.unwrap_or(object);

    let status = object.get("status").and_then(Value::as_str);
    let code = fields.get("code").and_then(Value::as_i64);
    let message = fields.get("message").and_then(Value::as_str);

    if nested.is_none() && status.is_none() && code.is_none() && message.is_none() {
        return None;
    }

    Some(ErrorDetails {
        status: status.unwrap_or("error").to_string(),
        code: code.unwrap_or(0),
        message: message.unwrap_or_default().to_string(),
    })
}

fn malformed(reason: impl Into<String>, body: &str) -> Error {
    Error::MalformedResponse {
        reason: reason.into(),
        snippet: body.chars().take(120).collect(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Reply {
        status: Option<String>,
        job_id: Option<String>,
    }

    fn outcome(status: &str, body: &str) -> ApiOutcome {
        ApiOutcome::new(status, body)
    }

    #[test]
    fn success_envelope_decodes() {
        let reply: Reply = decode(outcome(
            "OK",
            r#"{"status":"success","job_id":"1ZymBc-00041N-9X"}"#,
        ))
        .unwrap();

        assert_eq!(reply.status.as_deref(), Some("success"));
        assert_eq!(reply.job_id.as_deref(), Some("1ZymBc-00041N-9X"));
    }

    #[test]
    fn error_status_text_overrides_body() {
        let err = decode::<Reply>(outcome(
            "InternalServerError",
            r#"{"status":"error","error":{"code":500,"message":"boom"}}"#,
        ))
        .unwrap_err();

        let api = err.as_api().expect("classified error");
        assert_eq!(api.status, "InternalServerError");
        let details = api.details.as_ref().unwrap();
        assert_eq!(details.code, 500);
        assert_eq!(details.message, "boom");
    }

    #[test]
    fn error_status_with_empty_body_has_no_details() {
        let err = decode::<Reply>(outcome("error sending request: connection refused", ""))
            .unwrap_err();

        let api = err.as_api().expect("classified error");
        assert_eq!(api.status, "error sending request: connection refused");
        assert!(api.details.is_none());
    }

    #[test]
    fn timeout_never_parses_the_body() {
        let err = decode::<Reply>(outcome(TIMEOUT_MARKER, "%%% not json at all %%%")).unwrap_err();

        let api = err.as_api().expect("classified error");
        assert_eq!(api.status, TIMEOUT_MARKER);
        assert!(api.is_timeout());
        assert_eq!(
            api.details,
            Some(ErrorDetails {
                status: "TIMEOUT".to_string(),
                code: 0,
                message: TIMEOUT_MARKER.to_string(),
            })
        );
    }

    #[test]
    fn envelope_discriminant_marks_errors_even_on_http_ok() {
        let err = decode::<Reply>(outcome(
            "OK",
            r#"{"status":"error","error":{"code":401,"message":"invalid key"}}"#,
        ))
        .unwrap_err();

        let api = err.as_api().expect("classified error");
        assert_eq!(api.status, "OK");
        assert_eq!(api.code(), Some(401));
    }

    #[test]
    fn success_discriminant_wins_over_error_substring() {
        // The payload mentions "error" but the envelope says success; the
        // discriminant decides.
        let reply: Reply = decode(outcome(
            "OK",
            r#"{"status":"success","job_id":"error-report-digest"}"#,
        ))
        .unwrap();

        assert_eq!(reply.job_id.as_deref(), Some("error-report-digest"));
    }

    #[test]
    fn substring_fallback_applies_without_discriminant() {
        let err = decode::<Reply>(outcome("OK", r#"{"error":{"code":7,"message":"nope"}}"#))
            .unwrap_err();

        let api = err.as_api().expect("classified error");
        assert_eq!(api.status, "OK");
        assert_eq!(api.code(), Some(7));

        let reply: Reply = decode(outcome("OK", r#"{"job_id":"abc"}"#)).unwrap();
        assert_eq!(reply.job_id.as_deref(), Some("abc"));
    }

    #[test]
    fn unreadable_error_body_is_malformed() {
        let err = decode::<Reply>(outcome("BadRequest", "<html>gateway error</html>")).unwrap_err();

        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn unreadable_success_body_is_malformed() {
        let err = decode::<Reply>(outcome("OK", "plainly not json")).unwrap_err();

        match err {
            Error::MalformedResponse { snippet, .. } => {
                assert_eq!(snippet, "plainly not json");
            }
            other => panic!("expected malformed response, got {other:?}"),
        }
    }

    #[test]
    fn decoding_is_idempotent() {
        let pair = outcome(
            "BadRequest",
            r#"{"status":"error","error":{"code":401,"message":"invalid key"}}"#,
        );

        let first = decode::<Reply>(pair.clone()).unwrap_err();
        let second = decode::<Reply>(pair).unwrap_err();

        assert_eq!(first.as_api(), second.as_api());
    }

    #[test]
    fn text_payload_with_brace_passes_through() {
        assert_eq!(Payload::text(r#"{"a":1}"#).render(), r#"{"a":1}"#);
    }

    #[test]
    fn text_payload_without_brace_is_json_encoded() {
        assert_eq!(Payload::text("plain").render(), r#""plain""#);
    }

    #[test]
    fn typed_payload_is_serialized() {
        #[derive(Serialize)]
        struct Req {
            domain: &'static str,
        }

        let payload = Payload::json(&Req { domain: "example.com" }).unwrap();
        assert_eq!(payload.render(), r#"{"domain":"example.com"}"#);
    }

    #[test]
    fn status_names_match_the_wire_contract() {
        assert_eq!(status_name(reqwest::StatusCode::OK), "OK");
        assert_eq!(status_name(reqwest::StatusCode::BAD_REQUEST), "BadRequest");
        assert_eq!(
            status_name(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            "InternalServerError"
        );
    }
}
