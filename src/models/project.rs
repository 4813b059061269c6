//! Project management types.
//!
//! Projects partition one account into isolated sending domains, each with
//! its own API key.

use serde::{Deserialize, Serialize};

/// A project as created, updated, or listed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Project {
    /// Unset when creating; assigned by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO 3166-1 alpha-2 code selecting the sending region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_unsubscribe_url_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Wire envelope for create/update: `{"project": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ProjectRequest {
    pub project: Project,
}

/// Scope for list/delete calls. Both fields optional: an account API key
/// sees every project, a project API key only its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProjectRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_api_key: Option<String>,
}

/// Credentials returned by create/update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Returned once at creation; store it, it cannot be fetched again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_wraps_the_project() {
        let request = ProjectRequest {
            project: Project {
                name: Some("marketing".to_string()),
                country: Some("DE".to_string()),
                send_enabled: Some(true),
                ..Default::default()
            },
        };

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"project":{"name":"marketing","country":"DE","send_enabled":true}}"#
        );
    }

    #[test]
    fn default_scope_serializes_to_an_empty_object() {
        assert_eq!(serde_json::to_string(&ProjectRef::default()).unwrap(), "{}");
    }
}
