//! Reminder dispatch queue
//!
//! Handlers push composed batches into a bounded mpsc channel through
//! [`ReminderDispatcher`]; a single [`ReminderWorker`] drains it and hands
//! every reminder to the configured [`Notifier`]. The channel closes when
//! the last dispatcher handle is dropped, which stops the worker.

use std::sync::Arc;

use shared::models::RenderedReminder;
use shared::{AppError, AppResult, ErrorCode};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use super::notifier::Notifier;

/// Reminders accepted by one send request
#[derive(Debug, Clone)]
pub struct ReminderBatch {
    pub batch_id: String,
    pub reminders: Vec<RenderedReminder>,
}

/// Sending half of the reminder queue
#[derive(Debug, Clone)]
pub struct ReminderDispatcher {
    tx: mpsc::Sender<ReminderBatch>,
}

impl ReminderDispatcher {
    /// Create a dispatcher and the receiver its worker should consume
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<ReminderBatch>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Queue a batch without waiting
    ///
    /// A full queue is reported to the caller rather than applying
    /// backpressure to the HTTP request.
    pub fn enqueue(&self, batch: ReminderBatch) -> AppResult<()> {
        let batch_id = batch.batch_id.clone();
        let count = batch.reminders.len();
        match self.tx.try_send(batch) {
            Ok(()) => {
                tracing::debug!(batch_id = %batch_id, count, "Reminder batch queued");
                Ok(())
            }
            Err(TrySendError::Full(_)) => {
                tracing::warn!(batch_id = %batch_id, "Reminder queue full, batch refused");
                Err(AppError::new(ErrorCode::ReminderQueueFull))
            }
            Err(TrySendError::Closed(_)) => {
                tracing::error!(batch_id = %batch_id, "Reminder worker is gone");
                Err(AppError::new(ErrorCode::ReminderDispatcherClosed))
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Background worker delivering queued reminders
pub struct ReminderWorker {
    notifier: Arc<dyn Notifier>,
}

impl ReminderWorker {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Run until the channel closes
    pub async fn run(self, mut rx: mpsc::Receiver<ReminderBatch>) {
        tracing::info!(notifier = self.notifier.name(), "📨 Reminder worker started");

        while let Some(batch) = rx.recv().await {
            let mut delivered = 0usize;
            for reminder in &batch.reminders {
                match self.notifier.send(reminder).await {
                    Ok(()) => delivered += 1,
                    Err(e) => {
                        tracing::error!(
                            batch_id = %batch.batch_id,
                            member_id = reminder.member_id,
                            "Failed to deliver reminder: {}",
                            e
                        );
                    }
                }
            }
            tracing::info!(
                batch_id = %batch.batch_id,
                delivered,
                total = batch.reminders.len(),
                "Reminder batch processed"
            );
        }

        tracing::info!("Reminder channel closed, worker stopping");
    }
}
