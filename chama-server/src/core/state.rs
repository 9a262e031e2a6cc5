use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;

use crate::core::Config;
use crate::reminders::{LogNotifier, Notifier, ReminderDispatcher, ReminderWorker};
use crate::store::MemberStore;

/// Server state shared by every handler
///
/// Cloning is cheap: the member store and dispatcher are handles onto
/// shared data.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | members | in-memory member store |
/// | reminders | sending half of the reminder queue |
/// | started_at | process start, for uptime |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub members: MemberStore,
    pub reminders: ReminderDispatcher,
    pub started_at: Instant,
}

impl ServerState {
    /// Build state with reminders written to the log
    pub async fn initialize(config: &Config) -> Self {
        Self::with_notifier(config, Arc::new(LogNotifier)).await
    }

    /// Build state delivering reminders through `notifier`
    ///
    /// Spawns the reminder worker, so this must run inside a tokio runtime.
    pub async fn with_notifier(config: &Config, notifier: Arc<dyn Notifier>) -> Self {
        let (reminders, rx) = ReminderDispatcher::channel(config.reminder_queue_capacity);
        tokio::spawn(ReminderWorker::new(notifier).run(rx));

        tracing::debug!(
            timezone = %config.business_timezone,
            queue_capacity = config.reminder_queue_capacity,
            "Server state initialized"
        );

        Self {
            config: config.clone(),
            members: MemberStore::new(),
            reminders,
            started_at: Instant::now(),
        }
    }

    /// Today's date in the business timezone
    pub fn today(&self) -> NaiveDate {
        self.config.today()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
