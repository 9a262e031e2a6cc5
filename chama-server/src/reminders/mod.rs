//! Payment reminders: templates, rendering and background delivery

pub mod compose;
pub mod dispatcher;
pub mod notifier;
pub mod templates;

pub use compose::compose;
pub use dispatcher::{ReminderBatch, ReminderDispatcher, ReminderWorker};
pub use notifier::{LogNotifier, Notifier, NotifyError};
