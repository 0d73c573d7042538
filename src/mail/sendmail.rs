// mail/sendmail.rs
use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tokio::time::{sleep, Duration};

use crate::config::Config;

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY_MS: u64 = 1000;

type MailError = Box<dyn std::error::Error + Send + Sync>;

pub async fn send_email(
    config: &Config,
    to_email: &str,
    subject: &str,
    template: &str,
    placeholders: &[(String, String)],
) -> Result<(), MailError> {
    if to_email.is_empty() {
        return Err("Email recipient cannot be empty".into());
    }
    if !to_email.contains('@') {
        return Err(format!("Invalid email address: {}", to_email).into());
    }

    let mut html_body = template.to_string();
    for (key, value) in placeholders {
        html_body = html_body.replace(key, value);
    }

    send_with_retries(config, to_email, subject, &html_body).await
}

async fn send_with_retries(
    config: &Config,
    to_email: &str,
    subject: &str,
    html_body: &str,
) -> Result<(), MailError> {
    let mut last_error = None;

    for attempt in 1..=MAX_RETRIES {
        match send_via_smtp(config, to_email, subject, html_body).await {
            Ok(()) => {
                tracing::info!("Email sent successfully to {}", to_email);
                return Ok(());
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < MAX_RETRIES {
                    let delay = RETRY_DELAY_MS * (2_u64.pow(attempt - 1)); // Exponential backoff
                    tracing::warn!(
                        "Email send attempt {} failed for {}. Retrying in {}ms...",
                        attempt,
                        to_email,
                        delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                }
            }
        }
    }

    let error_msg = last_error
        .map(|e| format!("Failed after {} retries: {}", MAX_RETRIES, e))
        .unwrap_or_else(|| "Unknown email sending error".to_string());

    tracing::error!("Email failed for {}: {}", to_email, error_msg);
    Err(error_msg.into())
}

async fn send_via_smtp(
    config: &Config,
    to_email: &str,
    subject: &str,
    html_body: &str,
) -> Result<(), MailError> {
    let email = Message::builder()
        .from(config.smtp_from.parse()?)
        .to(to_email.parse()?)
        .subject(subject)
        .header(ContentType::TEXT_HTML)
        .body(html_body.to_string())?;

    let mailer: AsyncSmtpTransport<Tokio1Executor> =
        AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

    mailer.send(email).await?;
    Ok(())
}
