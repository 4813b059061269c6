//! Mailbox validation.

use crate::endpoints;
use crate::models::{EmailRef, ValidationReport};
use crate::{Client, Result};

/// Operations under `email-validation/*`, obtained from
/// [`Client::email_validation`].
#[derive(Debug, Clone, Copy)]
pub struct EmailValidationApi<'a> {
    client: &'a Client,
}

impl<'a> EmailValidationApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        EmailValidationApi { client }
    }

    /// Checks whether `email` is deliverable without sending anything to it.
    pub async fn single(&self, email: &str) -> Result<ValidationReport> {
        let request = EmailRef {
            email: email.to_string(),
        };

        self.client
            .call(endpoints::EMAIL_VALIDATION_SINGLE, &request)
            .await
    }
}
