//! Delivery backends for rendered reminders

use async_trait::async_trait;
use shared::models::RenderedReminder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("delivery to {phone} rejected: {reason}")]
    Rejected { phone: String, reason: String },
}

/// A channel that can deliver one reminder (SMS gateway, WhatsApp, ...)
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, reminder: &RenderedReminder) -> Result<(), NotifyError>;

    /// Short backend name for logs
    fn name(&self) -> &'static str;
}

/// Writes each reminder to the log instead of delivering it
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, reminder: &RenderedReminder) -> Result<(), NotifyError> {
        tracing::info!(
            member_id = reminder.member_id,
            phone = %reminder.phone_number,
            "📨 Reminder: {}",
            reminder.message
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
