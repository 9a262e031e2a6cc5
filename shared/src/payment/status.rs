use chrono::NaiveDate;

use crate::models::{Member, PaymentStatus};

/// Derive a member's payment status as of `today`.
///
/// A paid member is always `Paid`. Otherwise the member is `Overdue` when the
/// due date is strictly before `today`, and `Pending` on or before the due
/// date. Both sides are calendar dates, so time of day never matters.
pub fn derive_payment_status(member: &Member, today: NaiveDate) -> PaymentStatus {
    if member.has_paid {
        PaymentStatus::Paid
    } else if member.due_date < today {
        PaymentStatus::Overdue
    } else {
        PaymentStatus::Pending
    }
}
