//! The complete operation table: one typed constant per API endpoint.
//!
//! An [`Endpoint`] pins a relative path to its request and response types,
//! so a façade method cannot post the wrong body or decode into the wrong
//! shape. Paths are relative to the versioned base URL and dispatched
//! through [`crate::Client`] as `POST` with a JSON body.

use std::marker::PhantomData;

use crate::models::{
    AddressRef, DnsRecords, DomainList, DomainListRequest, DomainRequest, DumpRef, EmailRef,
    Empty, EventDumpCreated, EventDumpInfo, EventDumpList, EventDumpRequest, IdRef,
    OperationStatus, Pagination, ProjectCredentials, ProjectList, ProjectRef, ProjectRequest,
    SendEmailRequest, SendEmailResponse, SubscribeRequest, SuppressionFilters,
    SuppressionGetRequest, SuppressionList, SuppressionSetRequest, SystemInfo, TagList, TagRef,
    TemplateList, TemplateRequest, TemplateResult, UnsubscribedList, UnsubscribedStatus, UrlRef,
    ValidationReport, Webhook, WebhookList, WebhookResult,
};

/// A relative API path typed with its request and response bodies.
pub(crate) struct Endpoint<Req, Rsp> {
    pub path: &'static str,
    _marker: PhantomData<fn(Req) -> Rsp>,
}

impl<Req, Rsp> Endpoint<Req, Rsp> {
    const fn new(path: &'static str) -> Self {
        Endpoint {
            path,
            _marker: PhantomData,
        }
    }
}

impl<Req, Rsp> Clone for Endpoint<Req, Rsp> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Req, Rsp> Copy for Endpoint<Req, Rsp> {}

pub(crate) const EMAIL_SEND: Endpoint<SendEmailRequest, SendEmailResponse> =
    Endpoint::new("email/send.json");
pub(crate) const EMAIL_SUBSCRIBE: Endpoint<SubscribeRequest, OperationStatus> =
    Endpoint::new("email/subscribe.json");

pub(crate) const DOMAIN_DNS_RECORDS: Endpoint<DomainRequest, DnsRecords> =
    Endpoint::new("domain/get-dns-records.json");
pub(crate) const DOMAIN_VALIDATE_VERIFICATION_RECORD: Endpoint<DomainRequest, OperationStatus> =
    Endpoint::new("domain/validate-verification-record.json");
pub(crate) const DOMAIN_VALIDATE_DKIM: Endpoint<DomainRequest, OperationStatus> =
    Endpoint::new("domain/validate-dkim.json");
pub(crate) const DOMAIN_LIST: Endpoint<DomainListRequest, DomainList> =
    Endpoint::new("domain/list.json");

pub(crate) const EVENT_DUMP_CREATE: Endpoint<EventDumpRequest, EventDumpCreated> =
    Endpoint::new("event-dump/create.json");
pub(crate) const EVENT_DUMP_GET: Endpoint<DumpRef, EventDumpInfo> =
    Endpoint::new("event-dump/get.json");
pub(crate) const EVENT_DUMP_LIST: Endpoint<Pagination, EventDumpList> =
    Endpoint::new("event-dump/list.json");
pub(crate) const EVENT_DUMP_DELETE: Endpoint<DumpRef, OperationStatus> =
    Endpoint::new("event-dump/delete.json");

pub(crate) const PROJECT_CREATE: Endpoint<ProjectRequest, ProjectCredentials> =
    Endpoint::new("project/create.json");
pub(crate) const PROJECT_UPDATE: Endpoint<ProjectRequest, ProjectCredentials> =
    Endpoint::new("project/update.json");
pub(crate) const PROJECT_LIST: Endpoint<ProjectRef, ProjectList> =
    Endpoint::new("project/list.json");
pub(crate) const PROJECT_DELETE: Endpoint<ProjectRef, OperationStatus> =
    Endpoint::new("project/delete.json");

pub(crate) const SUPPRESSION_SET: Endpoint<SuppressionSetRequest, OperationStatus> =
    Endpoint::new("suppression/set.json");
pub(crate) const SUPPRESSION_GET: Endpoint<SuppressionGetRequest, SuppressionList> =
    Endpoint::new("suppression/get.json");
pub(crate) const SUPPRESSION_LIST: Endpoint<SuppressionFilters, SuppressionList> =
    Endpoint::new("suppression/list.json");
pub(crate) const SUPPRESSION_DELETE: Endpoint<EmailRef, OperationStatus> =
    Endpoint::new("suppression/delete.json");

pub(crate) const TAG_LIST: Endpoint<Empty, TagList> = Endpoint::new("tag/list.json");
pub(crate) const TAG_DELETE: Endpoint<TagRef, OperationStatus> = Endpoint::new("tag/delete.json");

pub(crate) const TEMPLATE_SET: Endpoint<TemplateRequest, TemplateResult> =
    Endpoint::new("template/set.json");
pub(crate) const TEMPLATE_GET: Endpoint<IdRef, TemplateResult> =
    Endpoint::new("template/get.json");
pub(crate) const TEMPLATE_LIST: Endpoint<Pagination, TemplateList> =
    Endpoint::new("template/list.json");
pub(crate) const TEMPLATE_DELETE: Endpoint<IdRef, OperationStatus> =
    Endpoint::new("template/delete.json");

pub(crate) const WEBHOOK_SET: Endpoint<Webhook, WebhookResult> = Endpoint::new("webhook/set.json");
pub(crate) const WEBHOOK_GET: Endpoint<UrlRef, WebhookResult> = Endpoint::new("webhook/get.json");
pub(crate) const WEBHOOK_LIST: Endpoint<Pagination, WebhookList> =
    Endpoint::new("webhook/list.json");
pub(crate) const WEBHOOK_DELETE: Endpoint<UrlRef, OperationStatus> =
    Endpoint::new("webhook/delete.json");

pub(crate) const UNSUBSCRIBED_SET: Endpoint<AddressRef, OperationStatus> =
    Endpoint::new("unsubscribed/set.json");
pub(crate) const UNSUBSCRIBED_CHECK: Endpoint<AddressRef, UnsubscribedStatus> =
    Endpoint::new("unsubscribed/check.json");
pub(crate) const UNSUBSCRIBED_LIST: Endpoint<AddressRef, UnsubscribedList> =
    Endpoint::new("unsubscribed/list.json");

pub(crate) const SYSTEM_INFO: Endpoint<Empty, SystemInfo> = Endpoint::new("system/info.json");

pub(crate) const EMAIL_VALIDATION_SINGLE: Endpoint<EmailRef, ValidationReport> =
    Endpoint::new("email-validation/single.json");
