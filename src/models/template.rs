//! Stored template types.
//!
//! Templates reuse the message content types from [`super::email`]: a
//! template is a message skeleton with `{{placeholders}}` resolved at send
//! time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::email::{EmailAttachment, EmailBody};

/// A stored message template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Template {
    /// Unset when creating; assigned by the API and used for updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `html` for raw markup, `visual` for the drag-and-drop editor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<EmailBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<EmailAttachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_attachments: Option<Vec<EmailAttachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Wire envelope for `template/set.json`: `{"template": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TemplateRequest {
    pub template: Template,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct IdRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemplateResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Template>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemplateList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub templates: Vec<Template>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_request_wraps_the_template() {
        let request = TemplateRequest {
            template: Template {
                name: Some("welcome".to_string()),
                subject: Some("Hello {{name}}".to_string()),
                body: Some(EmailBody {
                    html: Some("<b>Hello, {{name}}!</b>".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["template"]["name"], "welcome");
        assert_eq!(json["template"]["body"]["html"], "<b>Hello, {{name}}!</b>");
        assert!(json["template"].get("id").is_none());
    }
}
