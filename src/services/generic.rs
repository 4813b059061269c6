//! Raw access to endpoints without a dedicated façade.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::envelope::Payload;
use crate::{Client, Result};

/// Escape hatch for API endpoints this crate has no typed wrapper for,
/// obtained from [`Client::generic`].
///
/// Requests go through the same transport, authentication, and response
/// classification as every typed operation.
#[derive(Debug, Clone, Copy)]
pub struct GenericApi<'a> {
    client: &'a Client,
}

impl<'a> GenericApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        GenericApi { client }
    }

    /// Posts `body` as JSON to `path` (relative to the versioned base URL)
    /// and decodes the response into `R`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use unione_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), unione_client::Error> {
    /// # let client = Client::new("your-api-key")?;
    /// let info: serde_json::Value = client
    ///     .generic()
    ///     .custom_request("system/info.json", &serde_json::json!({}))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn custom_request<R, B>(&self, path: &str, body: &B) -> Result<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.client.call_path(path, Payload::json(body)?).await
    }

    /// Like [`custom_request`](Self::custom_request), but takes the body as
    /// text. A body that already looks like JSON (contains `{`) is sent
    /// byte-for-byte; anything else is sent as one JSON string.
    pub async fn custom_request_raw<R>(&self, path: &str, body: impl Into<String>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.client.call_path(path, Payload::text(body)).await
    }
}
