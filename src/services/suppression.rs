//! Suppression list management.

use chrono::{DateTime, Utc};

use crate::endpoints;
use crate::models::{
    EmailRef, OperationStatus, SuppressionFilters, SuppressionGetRequest, SuppressionList,
    SuppressionSetRequest,
};
use crate::{Client, Result};

/// Operations under `suppression/*`, obtained from [`Client::suppression`].
#[derive(Debug, Clone, Copy)]
pub struct SuppressionApi<'a> {
    client: &'a Client,
}

impl<'a> SuppressionApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        SuppressionApi { client }
    }

    /// Adds `email` to the suppression list.
    ///
    /// # Arguments
    ///
    /// * `email` - The address to suppress
    /// * `cause` - Suppression cause, e.g. `unsubscribed`; the API picks a
    ///   default when `None`
    /// * `created` - When the suppression took effect, in UTC
    pub async fn set(
        &self,
        email: &str,
        cause: Option<&str>,
        created: DateTime<Utc>,
    ) -> Result<OperationStatus> {
        let request = SuppressionSetRequest {
            email: email.to_string(),
            cause: cause.map(str::to_string),
            created,
        };

        self.client.call(endpoints::SUPPRESSION_SET, &request).await
    }

    /// Fetches the suppression entries for one address, across all projects
    /// when `all_projects` is set.
    pub async fn get(&self, email: &str, all_projects: bool) -> Result<SuppressionList> {
        let request = SuppressionGetRequest {
            email: email.to_string(),
            all_projects,
        };

        self.client.call(endpoints::SUPPRESSION_GET, &request).await
    }

    /// Walks the suppression list page by page.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use unione_client::{Client, SuppressionFilters};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), unione_client::Error> {
    /// # let client = Client::new("your-api-key")?;
    /// let mut filters = SuppressionFilters {
    ///     cause: Some("hard_bounced".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// loop {
    ///     let page = client.suppression().list(filters.clone()).await?;
    ///     for entry in &page.suppressions {
    ///         println!("{:?} ({:?})", entry.email, entry.created);
    ///     }
    ///     match page.cursor {
    ///         Some(cursor) => filters.cursor = Some(cursor),
    ///         None => break,
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, filters: SuppressionFilters) -> Result<SuppressionList> {
        self.client.call(endpoints::SUPPRESSION_LIST, &filters).await
    }

    /// Removes a deletable suppression entry.
    pub async fn delete(&self, email: &str) -> Result<OperationStatus> {
        let request = EmailRef {
            email: email.to_string(),
        };

        self.client.call(endpoints::SUPPRESSION_DELETE, &request).await
    }
}
