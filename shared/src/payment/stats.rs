use chrono::NaiveDate;

use crate::models::{ChamaStats, Member, PaymentStatus, StatusBreakdown};

use super::derive_payment_status;

/// Aggregate collection statistics over the full member list.
///
/// `collection_rate` is `round(100 * paid / total)` with halves rounded up,
/// and 0 for an empty list.
pub fn compute_stats(members: &[Member]) -> ChamaStats {
    let mut stats = ChamaStats {
        total_members: members.len(),
        ..ChamaStats::default()
    };

    for member in members {
        // Totals saturate at u64::MAX; collected stays a sub-sum of expected
        stats.total_expected = stats.total_expected.saturating_add(member.monthly_contribution);
        if member.has_paid {
            stats.paid_members += 1;
            stats.total_collected = stats
                .total_collected
                .saturating_add(member.monthly_contribution);
        }
    }

    stats.pending_members = stats.total_members - stats.paid_members;
    stats.collection_rate = collection_rate(stats.paid_members, stats.total_members);
    stats
}

/// Count members per derived status as of `today`.
pub fn status_breakdown(members: &[Member], today: NaiveDate) -> StatusBreakdown {
    members
        .iter()
        .fold(StatusBreakdown::default(), |mut acc, member| {
            match derive_payment_status(member, today) {
                PaymentStatus::Paid => acc.paid += 1,
                PaymentStatus::Pending => acc.pending += 1,
                PaymentStatus::Overdue => acc.overdue += 1,
            }
            acc
        })
}

fn collection_rate(paid: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let (paid, total) = (paid as u64, total as u64);
    // floor((200 * paid + total) / (2 * total)) == round-half-up(100 * paid / total)
    ((200 * paid + total) / (2 * total)) as u32
}
