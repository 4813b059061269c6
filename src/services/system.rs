//! Account information.

use crate::endpoints;
use crate::models::{Empty, SystemInfo};
use crate::{Client, Result};

/// Operations under `system/*`, obtained from [`Client::system`].
#[derive(Debug, Clone, Copy)]
pub struct SystemApi<'a> {
    client: &'a Client,
}

impl<'a> SystemApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        SystemApi { client }
    }

    /// Reports who the configured API key authenticates as and the sending
    /// quota left in the current period. Useful as a connectivity check.
    pub async fn info(&self) -> Result<SystemInfo> {
        self.client.call(endpoints::SYSTEM_INFO, &Empty {}).await
    }
}
