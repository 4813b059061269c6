//! Shared request/response pieces used across resources.

use serde::{Deserialize, Serialize};

/// Page window for list endpoints.
///
/// The API defaults match [`Pagination::default`]: 50 entries from offset 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            limit: 50,
            offset: 0,
        }
    }
}

impl Pagination {
    pub fn new(limit: u32, offset: u32) -> Self {
        Pagination { limit, offset }
    }
}

/// Response for operations that only acknowledge: `{"status": "success"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl OperationStatus {
    /// True when the envelope carried the `"success"` status literal.
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// Body for endpoints that take no parameters; serializes to `{}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct Empty {}

/// Request addressing a single mailbox by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct EmailRef {
    pub email: String,
}

/// Serde adapter for the API's `YYYY-MM-DD HH:MM:SS` UTC timestamps.
pub(crate) mod api_datetime {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }

    /// `Option<DateTime<Utc>>` variant; pair with
    /// `skip_serializing_if = "Option::is_none"` and `default`.
    pub mod opt {
        use chrono::{DateTime, NaiveDateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(datetime) => super::serialize(datetime, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|text| {
                    NaiveDateTime::parse_from_str(&text, super::FORMAT)
                        .map(|naive| naive.and_utc())
                })
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "api_datetime")]
        at: chrono::DateTime<Utc>,
    }

    #[test]
    fn pagination_defaults_match_the_api() {
        let page = Pagination::default();
        assert_eq!(page.limit, 50);
        assert_eq!(page.offset, 0);
        assert_eq!(
            serde_json::to_string(&page).unwrap(),
            r#"{"limit":50,"offset":0}"#
        );
    }

    #[test]
    fn empty_body_serializes_to_an_empty_object() {
        assert_eq!(serde_json::to_string(&Empty {}).unwrap(), "{}");
    }

    #[test]
    fn timestamps_use_the_api_format() {
        let stamped = Stamped {
            at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap(),
        };

        let json = serde_json::to_string(&stamped).unwrap();
        assert_eq!(json, r#"{"at":"2024-05-01 10:30:00"}"#);
        assert_eq!(serde_json::from_str::<Stamped>(&json).unwrap(), stamped);
    }
}
