//! Types for composing and sending transactional messages.

use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::api_datetime;
use crate::error::Error;

/// A single destination mailbox with optional personalization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmailRecipient {
    pub email: String,
    /// Display name used in the `To` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Values substituted into `{{placeholders}}` for this recipient only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitutions: Option<HashMap<String, Value>>,
    /// Opaque keys echoed back in delivery events for this recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

impl EmailRecipient {
    /// Builds a recipient, rejecting addresses that do not look like
    /// `local@domain.tld`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEmailAddress`] when the address fails the
    /// format check.
    ///
    /// # Examples
    ///
    /// ```
    /// # use unione_client::EmailRecipient;
    /// let recipient = EmailRecipient::new("user@example.com")?;
    /// assert!(EmailRecipient::new("not-an-address").is_err());
    /// # Ok::<(), unione_client::Error>(())
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, Error> {
        let email = email.into();
        if !is_valid_address(&email) {
            return Err(Error::InvalidEmailAddress { address: email });
        }

        Ok(EmailRecipient {
            email,
            ..Default::default()
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_substitutions(mut self, substitutions: HashMap<String, Value>) -> Self {
        self.substitutions = Some(substitutions);
        self
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Message content; at least one of `html` or `plaintext` is expected by the
/// API unless a template supplies the body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmailBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plaintext: Option<String>,
    /// AMP-HTML variant rendered by mailers that support it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amp: Option<String>,
}

/// A file attached to a message, with base64-encoded content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAttachment {
    /// MIME type, e.g. `application/pdf`.
    #[serde(rename = "type")]
    pub content_type: String,
    pub name: String,
    pub content: String,
}

/// Delivery tuning knobs nested under `message.options`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SendOptions {
    /// Deferred delivery time; past times send immediately.
    #[serde(
        default,
        with = "api_datetime::opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub send_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribe_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_backend_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_pool_id: Option<String>,
}

/// A transactional message addressed to up to 500 recipients.
///
/// Only `recipients` is mandatory on the wire; everything else is optional
/// and omitted from the request when unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmailMessage {
    pub recipients: Vec<EmailRecipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// `1` suppresses the list-unsubscribe footer (requires account support).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_unsubscribe: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_language: Option<String>,
    /// `simple`, `velocity` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_engine: Option<String>,
    /// Substitutions applied to every recipient unless overridden per
    /// recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_substitutions: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_metadata: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<EmailBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_links: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_read: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<EmailAttachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_attachments: Option<Vec<EmailAttachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SendOptions>,
}

/// Wire envelope for `email/send.json`: `{"message": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SendEmailRequest {
    pub message: EmailMessage,
}

/// Acknowledgement for a sent message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SendEmailResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Identifier for looking the send up in event dumps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// Addresses accepted for delivery.
    #[serde(default)]
    pub emails: Vec<String>,
    /// Rejected addresses mapped to the rejection reason.
    #[serde(default)]
    pub failed_emails: HashMap<String, String>,
}

/// Body for `email/subscribe.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SubscribeRequest {
    pub from_email: String,
    pub from_name: String,
    pub to_email: String,
}

pub(crate) fn is_valid_address(address: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(EMAIL_PATTERN).expect("hard-coded email pattern compiles")
    });
    pattern.is_match(address)
}

const EMAIL_PATTERN: &str = r"^([\w\.\-]+)@([\w\-]+)((\.(\w){2,3})+)$";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        for address in [
            "user@example.com",
            "first.last@example.co.uk",
            "with-dash@sub-domain.org",
        ] {
            assert!(
                EmailRecipient::new(address).is_ok(),
                "{address} should be accepted"
            );
        }
    }

    #[test]
    fn rejects_garbage_addresses() {
        for address in ["", "plain", "missing@tld", "two@@example.com", "@example.com"] {
            let err = EmailRecipient::new(address).unwrap_err();
            assert!(
                matches!(err, Error::InvalidEmailAddress { .. }),
                "{address} should be rejected"
            );
        }
    }

    #[test]
    fn recipient_serializes_without_unset_fields() {
        let recipient = EmailRecipient::new("user@example.com").unwrap();
        assert_eq!(
            serde_json::to_string(&recipient).unwrap(),
            r#"{"email":"user@example.com"}"#
        );
    }

    #[test]
    fn attachment_renames_content_type() {
        let attachment = EmailAttachment {
            content_type: "text/plain".to_string(),
            name: "readme.txt".to_string(),
            content: "aGVsbG8=".to_string(),
        };

        let json = serde_json::to_value(&attachment).unwrap();
        assert_eq!(json["type"], "text/plain");
        assert!(json.get("content_type").is_none());
    }

    #[test]
    fn send_response_tolerates_a_minimal_envelope() {
        let response: SendEmailResponse =
            serde_json::from_str(r#"{"status":"success"}"#).unwrap();

        assert_eq!(response.status.as_deref(), Some("success"));
        assert!(response.emails.is_empty());
        assert!(response.failed_emails.is_empty());
    }
}
