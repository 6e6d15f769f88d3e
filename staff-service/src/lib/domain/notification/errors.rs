use thiserror::Error;

/// Error for notification dispatch operations
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to build mail message: {0}")]
    BuildFailed(String),

    #[error("Failed to send mail: {0}")]
    SendFailed(String),
}
