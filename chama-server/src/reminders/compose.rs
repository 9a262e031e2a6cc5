//! Reminder composition
//!
//! Turns a [`ReminderRequest`] into one rendered message per resolved
//! recipient. Nothing is sent here; the caller decides whether the result
//! is a preview or gets queued for dispatch.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};
use shared::models::{Member, MemberId, ReminderReceipt, ReminderRequest, RenderedReminder};
use shared::payment::derive_payment_status;
use shared::util::{format_amount, format_date};
use shared::{AppError, AppResult, ErrorCode};

use super::templates::{status_label, template_text};

/// Resolve the message body: a non-blank custom message wins over the template
fn message_body(request: &ReminderRequest) -> AppResult<String> {
    if let Some(message) = request.message.as_deref().map(str::trim)
        && !message.is_empty()
    {
        return Ok(message.to_string());
    }

    match request.template {
        Some(kind) => Ok(template_text(kind, request.language).to_string()),
        None => Err(AppError::with_message(
            ErrorCode::ReminderMessageEmpty,
            "Provide a message or choose a template",
        )),
    }
}

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z]+)\}").expect("placeholder pattern compiles"));

/// Substitute every placeholder in `body` for `member`
///
/// Single pass over the body: substituted values are never rescanned, and
/// unknown `{keys}` are left as written.
pub fn render(body: &str, member: &Member, request: &ReminderRequest, today: NaiveDate) -> String {
    PLACEHOLDER_RE
        .replace_all(body, |caps: &Captures| match &caps[1] {
            "name" => member.name.clone(),
            "amount" => format_amount(member.monthly_contribution),
            "dueDate" => format_date(member.due_date),
            "status" => {
                let status = derive_payment_status(member, today);
                status_label(status, request.language).to_string()
            }
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// Render `request` against `members`
///
/// Recipient ids are de-duplicated in request order. Ids that match no
/// member are reported in `skipped`; if none match at all the request is
/// rejected.
pub fn compose(
    request: &ReminderRequest,
    members: &[Member],
    today: NaiveDate,
) -> AppResult<ReminderReceipt> {
    if request.member_ids.is_empty() {
        return Err(AppError::new(ErrorCode::ReminderNoRecipients));
    }
    let body = message_body(request)?;

    let mut seen: Vec<MemberId> = Vec::with_capacity(request.member_ids.len());
    let mut reminders = Vec::new();
    let mut skipped = Vec::new();

    for &id in &request.member_ids {
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);

        match members.iter().find(|m| m.id == id) {
            Some(member) => reminders.push(RenderedReminder {
                member_id: member.id,
                member_name: member.name.clone(),
                phone_number: member.phone_number.clone(),
                message: render(&body, member, request, today),
            }),
            None => skipped.push(id),
        }
    }

    if reminders.is_empty() {
        return Err(
            AppError::new(ErrorCode::ReminderNoRecipients).with_detail("skipped", skipped),
        );
    }

    Ok(ReminderReceipt {
        queued: reminders.len(),
        reminders,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, Utc};
    use shared::models::{Language, MemberCreate, TemplateKind};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn member(id: MemberId, name: &str, amount: u64, due: NaiveDate) -> Member {
        Member::from_create(
            id,
            MemberCreate {
                name: name.to_string(),
                phone_number: "0722123456".to_string(),
                monthly_contribution: amount,
                due_date: due,
            },
            Utc::now(),
        )
    }

    fn request(ids: Vec<MemberId>) -> ReminderRequest {
        ReminderRequest {
            member_ids: ids,
            template: Some(TemplateKind::Gentle),
            ..Default::default()
        }
    }

    #[test]
    fn test_template_is_rendered_per_member() {
        let members = vec![
            member(1, "Grace", 1500, today()),
            member(2, "John", 2000, today()),
        ];
        let receipt = compose(&request(vec![1, 2]), &members, today()).unwrap();

        assert_eq!(receipt.queued, 2);
        assert!(receipt.skipped.is_empty());
        assert!(receipt.reminders[0].message.starts_with("Hi Grace!"));
        assert!(receipt.reminders[0].message.contains("KES 1,500"));
        assert!(receipt.reminders[0].message.contains("19 Oct 2026"));
        assert!(receipt.reminders[1].message.contains("KES 2,000"));
    }

    #[test]
    fn test_custom_message_wins() {
        let members = vec![member(1, "Grace", 1000, today())];
        let mut req = request(vec![1]);
        req.message = Some("  Pay {amount} by {dueDate}, {name}  ".to_string());

        let receipt = compose(&req, &members, today()).unwrap();
        assert_eq!(
            receipt.reminders[0].message,
            "Pay 1,000 by 19 Oct 2026, Grace"
        );
    }

    #[test]
    fn test_blank_message_falls_back_to_template() {
        let members = vec![member(1, "Grace", 1000, today())];
        let mut req = request(vec![1]);
        req.message = Some("   ".to_string());

        let receipt = compose(&req, &members, today()).unwrap();
        assert!(receipt.reminders[0].message.contains("friendly reminder"));
    }

    #[test]
    fn test_no_message_and_no_template() {
        let members = vec![member(1, "Grace", 1000, today())];
        let req = ReminderRequest {
            member_ids: vec![1],
            ..Default::default()
        };
        let err = compose(&req, &members, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReminderMessageEmpty);
    }

    #[test]
    fn test_empty_recipients() {
        let err = compose(&request(vec![]), &[], today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReminderNoRecipients);
    }

    #[test]
    fn test_unknown_and_duplicate_ids() {
        let members = vec![member(1, "Grace", 1000, today())];
        let receipt = compose(&request(vec![1, 42, 1, 42]), &members, today()).unwrap();
        assert_eq!(receipt.queued, 1);
        assert_eq!(receipt.skipped, vec![42]);

        let err = compose(&request(vec![42]), &members, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReminderNoRecipients);
        assert!(err.details.unwrap().contains_key("skipped"));
    }

    #[test]
    fn test_status_placeholder_is_localized() {
        let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
        let members = vec![member(1, "Amina", 500, yesterday)];
        let req = ReminderRequest {
            member_ids: vec![1],
            template: Some(TemplateKind::Balance),
            language: Language::Sw,
            ..Default::default()
        };

        let receipt = compose(&req, &members, today()).unwrap();
        assert!(receipt.reminders[0].message.contains("Amechelewa"));
        assert!(receipt.reminders[0].message.starts_with("Hujambo Amina!"));
    }

    #[test]
    fn test_placeholders_inside_values_are_not_expanded() {
        let members = vec![member(1, "Eve {amount} {status}", 1000, today())];
        let receipt = compose(&request(vec![1]), &members, today()).unwrap();
        assert!(
            receipt.reminders[0]
                .message
                .starts_with("Hi Eve {amount} {status}! "),
            "{}",
            receipt.reminders[0].message
        );
        assert!(receipt.reminders[0].message.contains("KES 1,000"));
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        let members = vec![member(1, "Grace", 1000, today())];
        let mut req = request(vec![1]);
        req.message = Some("{name}: {balance} / {amount}".to_string());
        let receipt = compose(&req, &members, today()).unwrap();
        assert_eq!(receipt.reminders[0].message, "Grace: {balance} / 1,000");
    }
}
