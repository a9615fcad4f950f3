use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use thiserror::Error;

use crate::config::MailSettings;
use crate::models::OutgoingEmail;

/// Errors that can occur when dispatching mail
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Missing mail configuration: {0}")]
    MissingConfig(String),

    #[error("Invalid email address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Outbound mail capability: a send either succeeds or fails
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// SMTP relay mailer
///
/// Connects over implicit TLS to the configured relay (Gmail by default),
/// authenticating with the account name and an app-scoped password.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build a relay transport from settings
    ///
    /// Nothing is sent and no connection is opened until the first `send`.
    pub fn from_settings(settings: &MailSettings) -> Result<Self, MailError> {
        if settings.username.trim().is_empty() {
            return Err(MailError::MissingConfig("mail.username (GMAIL_USER)".to_string()));
        }
        if settings.password.is_empty() {
            return Err(MailError::MissingConfig("mail.password (GMAIL_APP_PASSWORD)".to_string()));
        }

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ));

        if let Some(port) = settings.port {
            builder = builder.port(port);
        }
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Some(Duration::from_secs(secs)));
        }

        tracing::debug!("SMTP relay configured for {}", settings.host);

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let message = build_message(email)?;
        let response = self.transport.send(message).await?;

        tracing::debug!(
            "Relay accepted message to {} with code {}",
            email.to,
            response.code()
        );

        Ok(())
    }
}

/// Convert an outgoing email into a multipart/alternative lettre message
pub fn build_message(email: &OutgoingEmail) -> Result<Message, MailError> {
    let message = Message::builder()
        .from(parse_mailbox(&email.from)?)
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject.as_str())
        .multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))?;

    Ok(message)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| MailError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            from: "Sol Imagery <studio@example.com>".to_string(),
            to: to.to_string(),
            subject: "Thank you".to_string(),
            html: "<p>Hello</p>".to_string(),
            text: "Hello".to_string(),
        }
    }

    fn settings() -> MailSettings {
        MailSettings {
            host: "smtp.gmail.com".to_string(),
            port: None,
            username: "studio@example.com".to_string(),
            password: "app-password".to_string(),
            from_name: None,
            business_inbox: None,
            timeout_secs: Some(10),
        }
    }

    #[test]
    fn test_build_message_headers() {
        let message = build_message(&email("client@example.com")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("From: \"Sol Imagery\" <studio@example.com>")
            || raw.contains("From: Sol Imagery <studio@example.com>"));
        assert!(raw.contains("To: client@example.com"));
        assert!(raw.contains("Subject: Thank you"));
        assert!(raw.contains("multipart/alternative"));
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let err = build_message(&email("not an address")).unwrap_err();
        assert!(matches!(err, MailError::InvalidAddress { .. }));
    }

    #[test]
    fn test_missing_credentials() {
        let no_user = MailSettings { username: String::new(), ..settings() };
        assert!(matches!(
            SmtpMailer::from_settings(&no_user),
            Err(MailError::MissingConfig(_))
        ));

        let no_password = MailSettings { password: String::new(), ..settings() };
        assert!(matches!(
            SmtpMailer::from_settings(&no_password),
            Err(MailError::MissingConfig(_))
        ));
    }

    #[tokio::test]
    async fn test_relay_builds_without_connecting() {
        assert!(SmtpMailer::from_settings(&settings()).is_ok());
    }
}
