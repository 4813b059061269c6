//! # UniOne Client
//! Asynchronous client for the UniOne transactional email REST API, covering
//! message sending and the surrounding account resources (domains, templates,
//! webhooks, suppression lists, projects, event exports) through [`Client`]
//! and one façade per resource.
//!
//! ## Audience and uses
//! For Rust services that deliver transactional mail through UniOne: send
//! messages with [`EmailApi::send`](crate::EmailApi::send), verify sender
//! domains, manage stored templates and webhook subscriptions, and keep
//! suppression lists in sync. Configure once with [`ClientBuilder`], then
//! share the [`Client`] across tasks.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so
//! ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`)
//! are available in your application. Every call is a `POST` with a JSON body
//! authenticated by the `X-API-KEY` header.
//!
//! ## Out of scope
//! Not an SMTP sender or inbound mail handler, and not a batching or retry
//! layer; each method maps to exactly one API call, and rate limiting is the
//! caller's concern. The crate only wraps the UniOne web API and inherits its
//! availability and quotas.
//!
//! ## Errors
//! Transport failures surface as [`Error::Http`], API-rejected calls as
//! [`Error::Api`] with the platform's status and error code, and undecodable
//! success bodies as [`Error::MalformedResponse`]. Timeouts are reported the
//! way the platform words them; see [`ApiError::is_timeout`]. The crate-wide
//! [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use unione_client::{Client, EmailMessage, EmailRecipient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), unione_client::Error> {
//!     let client = Client::new("your-api-key")?;
//!
//!     let message = EmailMessage {
//!         from_email: Some("noreply@example.com".to_string()),
//!         from_name: Some("Example".to_string()),
//!         subject: Some("Welcome aboard".to_string()),
//!         recipients: vec![EmailRecipient::new("user@example.com")?],
//!         ..Default::default()
//!     };
//!
//!     let sent = client.email().send(message).await?;
//!     println!("queued: {:?}", sent.job_id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
mod envelope;
mod error;
mod models;
mod services;

pub use client::{Client, ClientBuilder};
pub use error::{ApiError, Error, ErrorDetails};
pub use models::{
    Accounting, DkimRecord, DnsRecords, DomainList, DomainStatus, EmailAttachment, EmailBody,
    EmailMessage, EmailRecipient, EventDump, EventDumpCreated, EventDumpInfo, EventDumpList,
    EventDumpRequest, OperationStatus, Pagination, Project, ProjectCredentials, ProjectList,
    ProjectRef, RecordStatus, SendEmailResponse, SendOptions, SuppressionEntry,
    SuppressionFilters, SuppressionList, SystemInfo, Tag, TagList, Template, TemplateList,
    TemplateResult, UnsubscribedEntry, UnsubscribedList, UnsubscribedStatus, ValidationReport,
    Webhook, WebhookList, WebhookResult,
};
pub use services::{
    DomainApi, EmailApi, EmailValidationApi, EventDumpApi, GenericApi, ProjectApi, SuppressionApi,
    SystemApi, TagApi, TemplateApi, UnsubscribedApi, WebhookApi,
};

/// Result type alias for UniOne operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
