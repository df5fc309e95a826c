//! Host-provided collaborators: user notifications and the share sheet.
//!
//! The UI host implements these; the defaults here only log.

use async_trait::async_trait;

use crate::types::errors::ShareError;

/// Presents messages and confirmation prompts to the user.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Shows a non-blocking message, e.g. a validation error.
    fn alert(&self, title: &str, message: &str);

    /// Asks the user to accept or cancel a destructive action.
    async fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Hands plain text to the platform share facility.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn share(&self, message: &str) -> Result<(), ShareError>;
}

/// Notifier that writes alerts to the log and declines every confirmation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    fn alert(&self, title: &str, message: &str) {
        tracing::warn!(title, message, "alert");
    }

    async fn confirm(&self, title: &str, message: &str) -> bool {
        tracing::info!(title, message, "confirmation declined: no interactive host");
        false
    }
}

/// Share target that only logs the message.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingShareTarget;

#[async_trait]
impl ShareTarget for TracingShareTarget {
    async fn share(&self, message: &str) -> Result<(), ShareError> {
        tracing::info!(message, "share");
        Ok(())
    }
}
