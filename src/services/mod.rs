//! One façade per API resource, all borrowing the same [`crate::Client`].

mod domain;
mod email;
mod event_dump;
mod generic;
mod project;
mod suppression;
mod system;
mod tag;
mod template;
mod unsubscribed;
mod validation;
mod webhook;

pub use domain::DomainApi;
pub use email::EmailApi;
pub use event_dump::EventDumpApi;
pub use generic::GenericApi;
pub use project::ProjectApi;
pub use suppression::SuppressionApi;
pub use system::SystemApi;
pub use tag::TagApi;
pub use template::TemplateApi;
pub use unsubscribed::UnsubscribedApi;
pub use validation::EmailValidationApi;
pub use webhook::WebhookApi;
