//! Walkthrough against a real UniOne account.
//!
//! Reads the API key from `UNIONE_API_KEY` and sticks to read-only calls
//! unless `UNIONE_DEMO_SEND_TO` names a recipient for a test message.
//!
//! ```sh
//! UNIONE_API_KEY=... cargo run --example demo
//! ```

use std::env;

use unione_client::{Client, EmailBody, EmailMessage, EmailRecipient, Pagination};

#[tokio::main]
async fn main() -> Result<(), unione_client::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let Ok(api_key) = env::var("UNIONE_API_KEY") else {
        eprintln!("set UNIONE_API_KEY to run this demo");
        return Ok(());
    };

    let client = Client::builder()
        .api_key(api_key)
        .log_requests(true)
        .build()?;

    let info = client.system().info().await?;
    println!(
        "authenticated as {} (user {})",
        info.email.as_deref().unwrap_or("<unknown>"),
        info.user_id.unwrap_or_default()
    );
    if let Some(accounting) = info.accounting {
        println!(
            "period quota: {} of {} emails used",
            accounting.emails_sent.unwrap_or_default(),
            accounting.emails_included.unwrap_or_default()
        );
    }

    let domains = client.domain().list("", Pagination::default()).await?;
    println!("{} registered domain(s)", domains.domains.len());
    for entry in &domains.domains {
        let verified = entry
            .verification_record
            .and_then(|record| record.verified)
            .unwrap_or(false);
        println!(
            "  {} (ownership verified: {verified})",
            entry.domain.as_deref().unwrap_or("<unnamed>")
        );
    }

    let tags = client.tag().list().await?;
    println!("{} tag(s) in use", tags.tags.len());

    let templates = client.template().list(Pagination::default()).await?;
    for template in &templates.templates {
        println!(
            "template {:?}: {:?}",
            template.id.as_deref().unwrap_or("?"),
            template.name
        );
    }

    // Only send when explicitly asked to.
    if let Ok(to_address) = env::var("UNIONE_DEMO_SEND_TO") {
        let from = env::var("UNIONE_DEMO_SEND_FROM")
            .unwrap_or_else(|_| "noreply@example.com".to_string());

        let message = EmailMessage {
            from_email: Some(from),
            from_name: Some("unione-client demo".to_string()),
            subject: Some("Hello from Rust".to_string()),
            body: Some(EmailBody {
                plaintext: Some("This message was sent by the unione-client demo.".to_string()),
                ..Default::default()
            }),
            recipients: vec![EmailRecipient::new(to_address)?],
            ..Default::default()
        };

        match client.email().send(message).await {
            Ok(sent) => println!("sent, job id {:?}", sent.job_id),
            Err(err) => eprintln!("send failed: {err}"),
        }
    } else {
        println!("set UNIONE_DEMO_SEND_TO to also send a test message");
    }

    Ok(())
}
