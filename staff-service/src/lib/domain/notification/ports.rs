use async_trait::async_trait;

use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::messages::MailMessage;

/// Outbound gateway for email notifications.
///
/// Dispatch is best-effort from the caller's perspective: workflows build
/// the message from committed state, hand it over, and log (never
/// propagate) a delivery failure.
#[async_trait]
pub trait NotificationGateway: Send + Sync + 'static {
    /// Deliver one message.
    ///
    /// # Errors
    /// * `BuildFailed` - Recipient address or body could not be assembled
    /// * `SendFailed` - Transport-level delivery failure
    async fn send(&self, message: MailMessage) -> Result<(), NotificationError>;
}
