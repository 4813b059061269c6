//! Request and response types for every API resource.
//!
//! Response types deserialize leniently: unknown fields are ignored and
//! absent fields become `None`/empty, so envelope variations across API
//! versions never fail a successful call.

mod common;
mod domain;
mod email;
mod event_dump;
mod project;
mod suppression;
mod system;
mod tag;
mod template;
mod unsubscribed;
mod validation;
mod webhook;

pub use common::{OperationStatus, Pagination};
pub(crate) use common::{EmailRef, Empty};
pub use domain::{DkimRecord, DnsRecords, DomainList, DomainStatus, RecordStatus};
pub(crate) use domain::{DomainListRequest, DomainRequest};
pub use email::{
    EmailAttachment, EmailBody, EmailMessage, EmailRecipient, SendEmailResponse, SendOptions,
};
pub(crate) use email::{SendEmailRequest, SubscribeRequest};
pub use event_dump::{EventDump, EventDumpCreated, EventDumpInfo, EventDumpList, EventDumpRequest};
pub(crate) use event_dump::DumpRef;
pub use project::{Project, ProjectCredentials, ProjectList, ProjectRef};
pub(crate) use project::ProjectRequest;
pub use suppression::{SuppressionEntry, SuppressionFilters, SuppressionList};
pub(crate) use suppression::{SuppressionGetRequest, SuppressionSetRequest};
pub use system::{Accounting, SystemInfo};
pub use tag::{Tag, TagList};
pub(crate) use tag::TagRef;
pub use template::{Template, TemplateList, TemplateResult};
pub(crate) use template::{IdRef, TemplateRequest};
pub use unsubscribed::{UnsubscribedEntry, UnsubscribedList, UnsubscribedStatus};
pub(crate) use unsubscribed::AddressRef;
pub use validation::ValidationReport;
pub use webhook::{Webhook, WebhookList, WebhookResult};
pub(crate) use webhook::UrlRef;
