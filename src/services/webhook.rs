//! Webhook subscription management.

use crate::endpoints;
use crate::models::{OperationStatus, Pagination, UrlRef, Webhook, WebhookList, WebhookResult};
use crate::{Client, Result};

/// Operations under `webhook/*`, obtained from [`Client::webhook`].
///
/// The notification URL is the subscription's identity: `set` with an
/// already-registered URL updates it in place.
#[derive(Debug, Clone, Copy)]
pub struct WebhookApi<'a> {
    client: &'a Client,
}

impl<'a> WebhookApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        WebhookApi { client }
    }

    /// Registers or updates the subscription for `webhook.url`.
    pub async fn set(&self, webhook: Webhook) -> Result<WebhookResult> {
        self.client.call(endpoints::WEBHOOK_SET, &webhook).await
    }

    /// Fetches the subscription registered for `url`.
    pub async fn get(&self, url: &str) -> Result<WebhookResult> {
        self.client.call(endpoints::WEBHOOK_GET, &url_ref(url)).await
    }

    /// Lists registered subscriptions.
    pub async fn list(&self, page: Pagination) -> Result<WebhookList> {
        self.client.call(endpoints::WEBHOOK_LIST, &page).await
    }

    /// Drops the subscription for `url`; undelivered events are discarded.
    pub async fn delete(&self, url: &str) -> Result<OperationStatus> {
        self.client
            .call(endpoints::WEBHOOK_DELETE, &url_ref(url))
            .await
    }
}

fn url_ref(url: &str) -> UrlRef {
    UrlRef {
        url: url.to_string(),
    }
}
