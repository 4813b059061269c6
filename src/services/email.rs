//! Message sending.

use crate::endpoints;
use crate::models::{
    EmailMessage, OperationStatus, SendEmailRequest, SendEmailResponse, SubscribeRequest,
};
use crate::{Client, Result};

/// Operations under `email/*`, obtained from [`Client::email`].
#[derive(Debug, Clone, Copy)]
pub struct EmailApi<'a> {
    client: &'a Client,
}

impl<'a> EmailApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        EmailApi { client }
    }

    /// Sends a transactional message to every recipient in
    /// `message.recipients`.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to deliver; build it with
    ///   [`EmailMessage::default`] and fill what you need
    ///
    /// # Returns
    ///
    /// Returns the acknowledgement with the `job_id` under which delivery
    /// events are recorded, plus any per-address rejections.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use unione_client::{Client, EmailMessage, EmailRecipient};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), unione_client::Error> {
    /// # let client = Client::new("your-api-key")?;
    /// let message = EmailMessage {
    ///     from_email: Some("noreply@example.com".to_string()),
    ///     subject: Some("Welcome aboard".to_string()),
    ///     recipients: vec![EmailRecipient::new("user@example.com")?],
    ///     ..Default::default()
    /// };
    ///
    /// let sent = client.email().send(message).await?;
    /// println!("queued as {:?}", sent.job_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(&self, message: EmailMessage) -> Result<SendEmailResponse> {
        self.client
            .call(endpoints::EMAIL_SEND, &SendEmailRequest { message })
            .await
    }

    /// Sends a double-opt-in confirmation to `to_email`; the address only
    /// becomes reachable after the recipient confirms.
    pub async fn subscribe(
        &self,
        from_email: &str,
        from_name: &str,
        to_email: &str,
    ) -> Result<OperationStatus> {
        let request = SubscribeRequest {
            from_email: from_email.to_string(),
            from_name: from_name.to_string(),
            to_email: to_email.to_string(),
        };

        self.client.call(endpoints::EMAIL_SUBSCRIBE, &request).await
    }
}
