//! Stored template management.

use crate::endpoints;
use crate::models::{
    IdRef, OperationStatus, Pagination, Template, TemplateList, TemplateRequest, TemplateResult,
};
use crate::{Client, Result};

/// Operations under `template/*`, obtained from [`Client::template`].
#[derive(Debug, Clone, Copy)]
pub struct TemplateApi<'a> {
    client: &'a Client,
}

impl<'a> TemplateApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        TemplateApi { client }
    }

    /// Creates or updates a template.
    ///
    /// A template without an `id` is created; with an `id` it overwrites the
    /// stored one. The response carries the template as stored, including
    /// the assigned `id`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use unione_client::{Client, EmailBody, Template};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), unione_client::Error> {
    /// # let client = Client::new("your-api-key")?;
    /// let stored = client
    ///     .template()
    ///     .set(Template {
    ///         name: Some("welcome".to_string()),
    ///         subject: Some("Hello {{name}}".to_string()),
    ///         body: Some(EmailBody {
    ///             html: Some("<b>Hello, {{name}}!</b>".to_string()),
    ///             ..Default::default()
    ///         }),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// println!("template id: {:?}", stored.template.and_then(|t| t.id));
    /// # Ok(())
    /// # }
    /// ```
    pub async fn set(&self, template: Template) -> Result<TemplateResult> {
        self.client
            .call(endpoints::TEMPLATE_SET, &TemplateRequest { template })
            .await
    }

    /// Fetches one template by id.
    pub async fn get(&self, id: &str) -> Result<TemplateResult> {
        self.client.call(endpoints::TEMPLATE_GET, &id_ref(id)).await
    }

    /// Lists stored templates, newest first.
    pub async fn list(&self, page: Pagination) -> Result<TemplateList> {
        self.client.call(endpoints::TEMPLATE_LIST, &page).await
    }

    /// Deletes a template; messages already sent from it are unaffected.
    pub async fn delete(&self, id: &str) -> Result<OperationStatus> {
        self.client.call(endpoints::TEMPLATE_DELETE, &id_ref(id)).await
    }
}

fn id_ref(id: &str) -> IdRef {
    IdRef { id: id.to_string() }
}
