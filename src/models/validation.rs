//! Mailbox validation types.

use serde::{Deserialize, Serialize};

/// Verdict for a single address from `email-validation/single.json`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `valid`, `invalid` or `unknown`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Why an address was judged invalid, e.g. `no_mx_record`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}
