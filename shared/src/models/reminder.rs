//! Reminder models

use serde::{Deserialize, Serialize};

use super::MemberId;

/// Language of a reminder template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Sw,
}

/// Built-in reminder template kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Gentle,
    Urgent,
    Weekly,
    Balance,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Gentle,
        TemplateKind::Urgent,
        TemplateKind::Weekly,
        TemplateKind::Balance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gentle => "gentle",
            Self::Urgent => "urgent",
            Self::Weekly => "weekly",
            Self::Balance => "balance",
        }
    }
}

impl std::str::FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown reminder template: {s}"))
    }
}

/// A message template with `{name}`, `{amount}`, `{dueDate}`, `{status}` placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderTemplate {
    pub id: TemplateKind,
    pub name: String,
    pub message: String,
    pub language: Language,
}

/// Reminder compose request (shared by preview and send)
///
/// Either `message` or `template` must be given; a non-empty `message`
/// takes precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    pub member_ids: Vec<MemberId>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub template: Option<TemplateKind>,
    #[serde(default)]
    pub language: Language,
}

/// A reminder rendered for one recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedReminder {
    pub member_id: MemberId,
    pub member_name: String,
    pub phone_number: String,
    pub message: String,
}

/// Result of a preview or send request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderReceipt {
    /// Number of reminders queued for delivery (0 for previews)
    pub queued: usize,
    pub reminders: Vec<RenderedReminder>,
    /// Requested ids that matched no member
    pub skipped: Vec<MemberId>,
}
