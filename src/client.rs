//! UniOne async client implementation.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::endpoints::Endpoint;
use crate::envelope::{self, ApiOutcome, Payload, status_name};
use crate::services::{
    DomainApi, EmailApi, EmailValidationApi, EventDumpApi, GenericApi, ProjectApi, SuppressionApi,
    SystemApi, TagApi, TemplateApi, UnsubscribedApi, WebhookApi,
};
use crate::{Error, Result};

/// Async client for the UniOne transactional email API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom
/// settings like the server region, timeouts, and a proxy. The client holds
/// one connection pool; clone-free sharing works through the borrowing
/// façades returned by the accessor methods.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    proxy: Option<String>,
    log_requests: bool,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the default (EU) instance.
    ///
    /// # Arguments
    /// * `api_key` - Account or project API key from the UniOne dashboard
    ///
    /// # Examples
    /// ```no_run
    /// # use unione_client::Client;
    /// let client = Client::new("your-api-key")?;
    /// # Ok::<(), unione_client::Error>(())
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// Get the proxy URL if one was configured.
    ///
    /// Returns `None` when no proxy was set on the builder.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Message sending: `email/*`.
    pub fn email(&self) -> EmailApi<'_> {
        EmailApi::new(self)
    }

    /// Sender domain verification: `domain/*`.
    pub fn domain(&self) -> DomainApi<'_> {
        DomainApi::new(self)
    }

    /// Delivery event exports: `event-dump/*`.
    pub fn event_dump(&self) -> EventDumpApi<'_> {
        EventDumpApi::new(self)
    }

    /// Project management: `project/*`.
    pub fn project(&self) -> ProjectApi<'_> {
        ProjectApi::new(self)
    }

    /// Suppression list management: `suppression/*`.
    pub fn suppression(&self) -> SuppressionApi<'_> {
        SuppressionApi::new(self)
    }

    /// Message tags: `tag/*`.
    pub fn tag(&self) -> TagApi<'_> {
        TagApi::new(self)
    }

    /// Stored templates: `template/*`.
    pub fn template(&self) -> TemplateApi<'_> {
        TemplateApi::new(self)
    }

    /// Webhook subscriptions: `webhook/*`.
    pub fn webhook(&self) -> WebhookApi<'_> {
        WebhookApi::new(self)
    }

    /// Unsubscribed addresses: `unsubscribed/*`.
    pub fn unsubscribed(&self) -> UnsubscribedApi<'_> {
        UnsubscribedApi::new(self)
    }

    /// Account information: `system/*`.
    pub fn system(&self) -> SystemApi<'_> {
        SystemApi::new(self)
    }

    /// Mailbox validation: `email-validation/*`.
    pub fn email_validation(&self) -> EmailValidationApi<'_> {
        EmailValidationApi::new(self)
    }

    /// Raw access to endpoints without a typed wrapper.
    pub fn generic(&self) -> GenericApi<'_> {
        GenericApi::new(self)
    }

    /// Posts a typed request to an endpoint from the operation table and
    /// decodes the typed response.
    pub(crate) async fn call<Req, Rsp>(
        &self,
        endpoint: Endpoint<Req, Rsp>,
        request: &Req,
    ) -> Result<Rsp>
    where
        Req: Serialize,
        Rsp: DeserializeOwned,
    {
        self.call_path(endpoint.path, Payload::json(request)?).await
    }

    /// Posts to an arbitrary relative path and decodes through the shared
    /// envelope pipeline.
    pub(crate) async fn call_path<Rsp>(&self, path: &str, payload: Payload) -> Result<Rsp>
    where
        Rsp: DeserializeOwned,
    {
        let outcome = self.send_raw(path, payload).await;
        envelope::decode(outcome)
    }

    /// Performs the POST and folds every transport condition into an
    /// [`ApiOutcome`]; classification happens in [`envelope::decode`], not
    /// here.
    async fn send_raw(&self, path: &str, payload: Payload) -> ApiOutcome {
        let url = format!("{}{}", self.base_url, path);

        if self.log_requests {
            debug!(%path, "dispatching API request");
        }

        let outcome = match self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.render())
            .send()
            .await
        {
            Ok(response) => {
                let status = status_name(response.status());
                match response.text().await {
                    Ok(body) => ApiOutcome::new(status, body),
                    Err(err) if err.is_timeout() => ApiOutcome::timeout(),
                    Err(err) => ApiOutcome::new(err.to_string(), String::new()),
                }
            }
            Err(err) if err.is_timeout() => ApiOutcome::timeout(),
            Err(err) => ApiOutcome::new(err.to_string(), String::new()),
        };

        if self.log_requests {
            debug!(%path, status = %outcome.status, "API response received");
        }

        outcome
    }
}

const SERVER_ADDRESS: &str = "https://eu1.unione.io";
const API_PATH: &str = "en/transactional/api";
const API_VERSION: &str = "v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for configuring a UniOne client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    server_address: String,
    api_path: String,
    api_version: String,
    api_key: Option<String>,
    timeout: Duration,
    log_requests: bool,
    proxy: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - EU instance (`https://eu1.unione.io`)
    /// - API path `en/transactional/api`, version `v1`
    /// - 30 second request timeout
    /// - Request logging off
    /// - No proxy
    pub fn new() -> Self {
        Self {
            server_address: SERVER_ADDRESS.to_string(),
            api_path: API_PATH.to_string(),
            api_version: API_VERSION.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            log_requests: false,
            proxy: None,
        }
    }

    /// Set the API key. Required; [`build`](Self::build) fails without it.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the server address, e.g. `https://us1.unione.io` for the US
    /// instance or a mock server's URL in tests.
    pub fn server_address(mut self, server_address: impl Into<String>) -> Self {
        self.server_address = server_address.into();
        self
    }

    /// Override the API path between the server address and the version.
    /// Empty segments are skipped when the base URL is assembled.
    pub fn api_path(mut self, api_path: impl Into<String>) -> Self {
        self.api_path = api_path.into();
        self
    }

    /// Override the API version segment.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the total per-request timeout (default: 30 seconds).
    ///
    /// A request that exceeds it surfaces as the API's timeout error rather
    /// than a transport failure; see [`crate::ApiError::is_timeout`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Log each dispatched request and its response status at debug level
    /// through `tracing` (default: off). Bodies are never logged.
    pub fn log_requests(mut self, log_requests: bool) -> Self {
        self.log_requests = log_requests;
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build the client.
    ///
    /// Resolves the base URL once and constructs the shared connection pool;
    /// nothing is sent until the first operation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the API key is missing or empty, when
    /// it is not a valid header value, or when the assembled base URL does
    /// not parse.
    ///
    /// # Examples
    /// ```no_run
    /// # use std::time::Duration;
    /// # use unione_client::Client;
    /// let client = Client::builder()
    ///     .api_key("your-api-key")
    ///     .server_address("https://us1.unione.io")
    ///     .timeout(Duration::from_secs(5))
    ///     .build()?;
    /// # Ok::<(), unione_client::Error>(())
    /// ```
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("an API key is required".to_string()))?;

        let base_url = join_base_url(&self.server_address, &self.api_path, &self.api_version);
        reqwest::Url::parse(&base_url)
            .map_err(|err| Error::Config(format!("invalid base URL {base_url:?}: {err}")))?;

        let mut key_value = HeaderValue::from_str(&api_key)
            .map_err(|_| Error::Config("API key is not a valid header value".to_string()))?;
        key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("X-API-KEY", key_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(headers);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        Ok(Client {
            http: builder.build()?,
            base_url,
            proxy: self.proxy,
            log_requests: self.log_requests,
        })
    }
}

/// Joins the base URL segments, skipping empty ones, with a trailing slash
/// for the relative endpoint paths.
fn join_base_url(server_address: &str, api_path: &str, api_version: &str) -> String {
    let mut url = server_address.trim_end_matches('/').to_string();
    for segment in [api_path, api_version] {
        let segment = segment.trim_matches('/');
        if !segment.is_empty() {
            url.push('/');
            url.push_str(segment);
        }
    }
    url.push('/');
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_targets_the_eu_instance() {
        assert_eq!(
            join_base_url(SERVER_ADDRESS, API_PATH, API_VERSION),
            "https://eu1.unione.io/en/transactional/api/v1/"
        );
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert_eq!(
            join_base_url("http://127.0.0.1:5000", "", ""),
            "http://127.0.0.1:5000/"
        );
        assert_eq!(
            join_base_url("http://127.0.0.1:5000/", "", "v1"),
            "http://127.0.0.1:5000/v1/"
        );
    }

    #[test]
    fn redundant_slashes_are_normalized() {
        assert_eq!(
            join_base_url("https://eu1.unione.io/", "/en/transactional/api/", "/v1/"),
            "https://eu1.unione.io/en/transactional/api/v1/"
        );
    }

    #[test]
    fn build_requires_an_api_key() {
        for builder in [Client::builder(), Client::builder().api_key("")] {
            assert!(matches!(builder.build(), Err(Error::Config(_))));
        }
    }

    #[test]
    fn build_rejects_a_key_with_control_characters() {
        let result = Client::builder().api_key("bad\nkey").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn build_rejects_an_unparseable_server_address() {
        let result = Client::builder()
            .api_key("test-key")
            .server_address("not a url")
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
