use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::AsyncSmtpTransport;
use lettre::AsyncTransport;
use lettre::Message;
use lettre::Tokio1Executor;

use crate::config::EmailConfig;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::messages::MailMessage;
use crate::domain::notification::ports::NotificationGateway;

/// SMTP adapter for the notification gateway.
///
/// Connection details come from the `email` config section. Workflows
/// treat delivery as fire-and-forget; any failure this adapter reports is
/// logged by the caller and never rolls back the triggering operation.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// # Arguments
    /// * `config` - SMTP host, port, TLS flag, credentials, sender address
    ///
    /// # Errors
    /// Fails when the relay host or sender address is unusable
    pub fn new(config: &EmailConfig) -> Result<Self, anyhow::Error> {
        tracing::info!(
            smtp_host = %config.smtp_host,
            smtp_port = config.smtp_port,
            use_tls = config.use_tls,
            "Initializing SMTP notifier"
        );

        let builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
        };

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from: Mailbox = config.from_address.parse()?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl NotificationGateway for SmtpNotifier {
    async fn send(&self, message: MailMessage) -> Result<(), NotificationError> {
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|e| NotificationError::BuildFailed(format!("bad recipient: {}", e)))?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject)
            .header(ContentType::TEXT_HTML)
            .body(message.html_body)
            .map_err(|e| NotificationError::BuildFailed(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map(|_| ())
            .map_err(|e| NotificationError::SendFailed(e.to_string()))
    }
}
