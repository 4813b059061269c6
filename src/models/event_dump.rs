//! Delivery event export (dump) types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::api_datetime;

/// Parameters for a new event export. Every field is optional; the API
/// defaults to the last day of events across the current project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EventDumpRequest {
    #[serde(with = "api_datetime::opt", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(with = "api_datetime::opt", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_projects: Option<bool>,
    /// Event property filters, e.g. `{"delivery_status": "hard_bounced"}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<HashMap<String, String>>,
    /// Export format, currently only `csv`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

/// Request addressing one export by its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DumpRef {
    pub dump_id: String,
}

/// Acknowledgement for `event-dump/create.json`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventDumpCreated {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dump_id: Option<String>,
}

/// A single export job. `url` stays unset until `dump_status` reaches
/// `complete`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventDump {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dump_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dump_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventDumpInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_dump: Option<EventDump>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventDumpList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub event_dumps: Vec<EventDump>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn create_request_formats_the_time_window() {
        let request = EventDumpRequest {
            start_time: Some(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()),
            end_time: Some(Utc.with_ymd_and_hms(2024, 4, 2, 0, 0, 0).unwrap()),
            limit: Some(100),
            ..Default::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["start_time"], "2024-04-01 00:00:00");
        assert_eq!(json["end_time"], "2024-04-02 00:00:00");
        assert_eq!(json["limit"], 100);
        assert!(json.get("all_projects").is_none());
    }

    #[test]
    fn pending_dump_has_no_url() {
        let info: EventDumpInfo = serde_json::from_str(
            r#"{
                "status": "success",
                "event_dump": {"dump_id": "dmp-1", "dump_status": "processing"}
            }"#,
        )
        .unwrap();

        let dump = info.event_dump.unwrap();
        assert_eq!(dump.dump_status.as_deref(), Some("processing"));
        assert!(dump.url.is_none());
    }
}
