//! Sender domain verification types.

use serde::{Deserialize, Serialize};

use super::common::Pagination;

/// Request addressing a single sender domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DomainRequest {
    pub domain: String,
}

/// Request for a page of registered domains, optionally narrowed to one name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DomainListRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain: String,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// DNS records to publish for a domain, returned by
/// `domain/get-dns-records.json`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DnsRecords {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// TXT record value proving domain ownership.
    #[serde(
        rename = "verification-record",
        skip_serializing_if = "Option::is_none"
    )]
    pub verification_record: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dkim: Option<DkimRecord>,
}

/// DKIM public key material for the domain's selector.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DkimRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// One page of registered domains with their verification state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub domains: Vec<DomainStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(
        rename = "verification-record",
        skip_serializing_if = "Option::is_none"
    )]
    pub verification_record: Option<RecordStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dkim: Option<RecordStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_request_flattens_the_page_window() {
        let request = DomainListRequest {
            domain: "example.com".to_string(),
            pagination: Pagination::default(),
        };

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"domain":"example.com","limit":50,"offset":0}"#
        );
    }

    #[test]
    fn list_request_omits_an_empty_domain_filter() {
        let request = DomainListRequest {
            domain: String::new(),
            pagination: Pagination::new(10, 20),
        };

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"limit":10,"offset":20}"#
        );
    }

    #[test]
    fn dns_records_read_the_dashed_field_name() {
        let records: DnsRecords = serde_json::from_str(
            r#"{
                "status": "success",
                "domain": "example.com",
                "verification-record": "unione-validate-hash",
                "dkim": {"key": "k=rsa; p=MIGf", "selector": "us"}
            }"#,
        )
        .unwrap();

        assert_eq!(
            records.verification_record.as_deref(),
            Some("unione-validate-hash")
        );
        assert_eq!(
            records.dkim.and_then(|dkim| dkim.selector).as_deref(),
            Some("us")
        );
    }
}
