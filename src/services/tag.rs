//! Message tag management.

use crate::endpoints;
use crate::models::{Empty, OperationStatus, TagList, TagRef};
use crate::{Client, Result};

/// Operations under `tag/*`, obtained from [`Client::tag`].
///
/// Tags are created implicitly by sending messages with them; this façade
/// only lists and deletes.
#[derive(Debug, Clone, Copy)]
pub struct TagApi<'a> {
    client: &'a Client,
}

impl<'a> TagApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        TagApi { client }
    }

    /// Lists every tag ever sent from this project.
    pub async fn list(&self) -> Result<TagList> {
        self.client.call(endpoints::TAG_LIST, &Empty {}).await
    }

    /// Deletes a tag; past events keep it, future sends may recreate it.
    pub async fn delete(&self, tag_id: i64) -> Result<OperationStatus> {
        self.client
            .call(endpoints::TAG_DELETE, &TagRef { tag_id })
            .await
    }
}
