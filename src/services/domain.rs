//! Sender domain verification.

use crate::endpoints;
use crate::models::{
    DnsRecords, DomainList, DomainListRequest, DomainRequest, OperationStatus, Pagination,
};
use crate::{Client, Result};

/// Operations under `domain/*`, obtained from [`Client::domain`].
#[derive(Debug, Clone, Copy)]
pub struct DomainApi<'a> {
    client: &'a Client,
}

impl<'a> DomainApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        DomainApi { client }
    }

    /// Fetches the DNS records to publish for `domain`: the ownership TXT
    /// record and the DKIM key.
    pub async fn dns_records(&self, domain: &str) -> Result<DnsRecords> {
        self.client
            .call(endpoints::DOMAIN_DNS_RECORDS, &request(domain))
            .await
    }

    /// Asks the API to re-check the ownership TXT record for `domain`.
    pub async fn validate_verification_record(&self, domain: &str) -> Result<OperationStatus> {
        self.client
            .call(endpoints::DOMAIN_VALIDATE_VERIFICATION_RECORD, &request(domain))
            .await
    }

    /// Asks the API to re-check the published DKIM record for `domain`.
    pub async fn validate_dkim(&self, domain: &str) -> Result<OperationStatus> {
        self.client
            .call(endpoints::DOMAIN_VALIDATE_DKIM, &request(domain))
            .await
    }

    /// Lists registered domains and their verification state.
    ///
    /// # Arguments
    ///
    /// * `domain` - Narrows the listing to one name; pass `""` for all
    /// * `page` - Page window, [`Pagination::default`] for the first 50
    pub async fn list(&self, domain: &str, page: Pagination) -> Result<DomainList> {
        let request = DomainListRequest {
            domain: domain.to_string(),
            pagination: page,
        };

        self.client.call(endpoints::DOMAIN_LIST, &request).await
    }
}

fn request(domain: &str) -> DomainRequest {
    DomainRequest {
        domain: domain.to_string(),
    }
}
