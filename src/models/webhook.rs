//! Webhook subscription types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A webhook subscription; one per notification URL.
///
/// `events` maps an event class to the statuses to deliver, e.g.
/// `{"email_status": ["delivered", "hard_bounced"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(default)]
    pub url: String,
    /// `active` or `disabled`; the API disables hooks whose URL keeps
    /// failing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `json_post`, `json_post_gzip` or `json_post_compact`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_format: Option<String>,
    /// `1` delivers events one per request instead of batched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_event: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_parallel: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<HashMap<String, Vec<String>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct UrlRef {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebhookResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<Webhook>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebhookList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub objects: Vec<Webhook>,
}
