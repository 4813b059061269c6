//! Project management.

use crate::endpoints;
use crate::models::{
    OperationStatus, Project, ProjectCredentials, ProjectList, ProjectRef, ProjectRequest,
};
use crate::{Client, Result};

/// Operations under `project/*`, obtained from [`Client::project`].
///
/// These endpoints require an account API key; project-scoped keys can only
/// read themselves.
#[derive(Debug, Clone, Copy)]
pub struct ProjectApi<'a> {
    client: &'a Client,
}

impl<'a> ProjectApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        ProjectApi { client }
    }

    /// Creates a project and returns its credentials.
    ///
    /// The returned `project_api_key` is shown exactly once; it cannot be
    /// fetched again later.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use unione_client::{Client, Project};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), unione_client::Error> {
    /// # let client = Client::new("your-api-key")?;
    /// let created = client
    ///     .project()
    ///     .create(Project {
    ///         name: Some("marketing".to_string()),
    ///         send_enabled: Some(true),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// println!("project key: {:?}", created.project_api_key);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, project: Project) -> Result<ProjectCredentials> {
        self.client
            .call(endpoints::PROJECT_CREATE, &ProjectRequest { project })
            .await
    }

    /// Updates an existing project; `project.id` selects which one.
    pub async fn update(&self, project: Project) -> Result<ProjectCredentials> {
        self.client
            .call(endpoints::PROJECT_UPDATE, &ProjectRequest { project })
            .await
    }

    /// Lists projects visible to the configured key, optionally narrowed by
    /// `scope`.
    pub async fn list(&self, scope: ProjectRef) -> Result<ProjectList> {
        self.client.call(endpoints::PROJECT_LIST, &scope).await
    }

    /// Deletes a project and its sending history.
    pub async fn delete(
        &self,
        project_id: &str,
        project_api_key: Option<&str>,
    ) -> Result<OperationStatus> {
        let scope = ProjectRef {
            project_id: Some(project_id.to_string()),
            project_api_key: project_api_key.map(str::to_string),
        };

        self.client.call(endpoints::PROJECT_DELETE, &scope).await
    }
}
