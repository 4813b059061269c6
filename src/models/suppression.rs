//! Suppression list types.
//!
//! Suppressed addresses are skipped at send time; entries carry the cause
//! (`unsubscribed`, `temporary_unavailable`, `permanent_unavailable`,
//! `complained`, `blocked`) and the source that created them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::api_datetime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SuppressionSetRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(with = "api_datetime")]
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SuppressionGetRequest {
    pub email: String,
    pub all_projects: bool,
}

/// Narrowing filters for `suppression/list.json`. The API pages with an
/// opaque cursor rather than an offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuppressionFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(with = "api_datetime::opt", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// Cursor from the previous page's response; empty for the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    pub limit: u32,
}

impl Default for SuppressionFilters {
    fn default() -> Self {
        SuppressionFilters {
            cause: None,
            source: None,
            start_time: None,
            cursor: None,
            limit: 50,
        }
    }
}

/// One suppressed address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuppressionEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    /// `user` for entries added through the API, `system` for bounces and
    /// complaints recorded by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// System entries cannot be deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deletable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuppressionList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub suppressions: Vec<SuppressionEntry>,
    /// Present when another page exists; feed it back through
    /// [`SuppressionFilters::cursor`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn set_request_formats_the_creation_time() {
        let request = SuppressionSetRequest {
            email: "user@example.com".to_string(),
            cause: Some("unsubscribed".to_string()),
            created: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        };

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"email":"user@example.com","cause":"unsubscribed","created":"2024-05-01 10:00:00"}"#
        );
    }

    #[test]
    fn default_filters_only_carry_the_page_size() {
        assert_eq!(
            serde_json::to_string(&SuppressionFilters::default()).unwrap(),
            r#"{"limit":50}"#
        );
    }
}
