//! Built-in reminder templates
//!
//! Placeholders: `{name}`, `{amount}`, `{dueDate}`, `{status}`.

use shared::models::{Language, PaymentStatus, ReminderTemplate, TemplateKind};

/// Template body for `kind` in `language`
pub fn template_text(kind: TemplateKind, language: Language) -> &'static str {
    match (language, kind) {
        (Language::En, TemplateKind::Gentle) => {
            "Hi {name}! This is a friendly reminder that your Chama contribution of KES {amount} is due on {dueDate}. Thank you for being part of our group! 😊"
        }
        (Language::En, TemplateKind::Urgent) => {
            "Hello {name}, your Chama payment of KES {amount} was due on {dueDate}. Please make your contribution as soon as possible to avoid penalties. Thank you!"
        }
        (Language::En, TemplateKind::Weekly) => {
            "Weekly Update: Hi {name}! Just a reminder that your monthly contribution of KES {amount} is coming up on {dueDate}. Stay ahead! 💪"
        }
        (Language::En, TemplateKind::Balance) => {
            "Hi {name}! Your current balance status: {status}. Next payment due: {dueDate} (KES {amount}). Questions? Reply to this message!"
        }
        (Language::Sw, TemplateKind::Gentle) => {
            "Hujambo {name}! Hii ni ukumbusho wa kirafiki kuwa mchango wako wa Chama wa KES {amount} unastahili {dueDate}. Asante kwa kuwa sehemu ya kikundi chetu! 😊"
        }
        (Language::Sw, TemplateKind::Urgent) => {
            "Hujambo {name}, malipo yako ya Chama ya KES {amount} yalipaswa kulipwa {dueDate}. Tafadhali fanya mchango wako haraka iwezekanavyo ili kuepuka faini. Asante!"
        }
        (Language::Sw, TemplateKind::Weekly) => {
            "Ripoti ya Kila Wiki: Hujambo {name}! Ukumbusho tu kuwa mchango wako wa kila mwezi wa KES {amount} unakuja {dueDate}. Jongea mbele! 💪"
        }
        (Language::Sw, TemplateKind::Balance) => {
            "Hujambo {name}! Hali yako ya sasa ya akaunti: {status}. Malipo yanayofuata: {dueDate} (KES {amount}). Una maswali? Jibu ujumbe huu!"
        }
    }
}

/// Display name of a template
pub fn template_name(kind: TemplateKind, language: Language) -> &'static str {
    match (language, kind) {
        (Language::En, TemplateKind::Gentle) => "Gentle Reminder",
        (Language::En, TemplateKind::Urgent) => "Urgent Reminder",
        (Language::En, TemplateKind::Weekly) => "Weekly Update",
        (Language::En, TemplateKind::Balance) => "Balance Update",
        (Language::Sw, TemplateKind::Gentle) => "Ukumbusho wa Hisani",
        (Language::Sw, TemplateKind::Urgent) => "Ukumbusho wa Haraka",
        (Language::Sw, TemplateKind::Weekly) => "Ripoti ya Kila Wiki",
        (Language::Sw, TemplateKind::Balance) => "Ripoti ya Akaunti",
    }
}

/// Localized word for a payment status, used by `{status}`
pub fn status_label(status: PaymentStatus, language: Language) -> &'static str {
    match (language, status) {
        (Language::En, PaymentStatus::Paid) => "Paid",
        (Language::En, PaymentStatus::Pending) => "Pending",
        (Language::En, PaymentStatus::Overdue) => "Overdue",
        (Language::Sw, PaymentStatus::Paid) => "Amelipa",
        (Language::Sw, PaymentStatus::Pending) => "Anasubiri",
        (Language::Sw, PaymentStatus::Overdue) => "Amechelewa",
    }
}

pub fn template(kind: TemplateKind, language: Language) -> ReminderTemplate {
    ReminderTemplate {
        id: kind,
        name: template_name(kind, language).to_string(),
        message: template_text(kind, language).to_string(),
        language,
    }
}

/// Every built-in template for `language`
pub fn catalogue(language: Language) -> Vec<ReminderTemplate> {
    TemplateKind::ALL
        .iter()
        .map(|&kind| template(kind, language))
        .collect()
}
