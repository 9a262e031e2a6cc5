//! Collection statistics models

use serde::{Deserialize, Serialize};

/// Aggregate collection snapshot, recomputed from the full member list
///
/// `pending_members` counts every member who has not paid, overdue ones
/// included. Use [`StatusBreakdown`] to tell pending and overdue apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChamaStats {
    pub total_members: usize,
    pub paid_members: usize,
    pub pending_members: usize,
    /// Rounded integer percentage of paid members (0 when empty)
    pub collection_rate: u32,
    pub total_expected: u64,
    pub total_collected: u64,
}

/// Member counts per derived payment status for a given day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub paid: usize,
    pub pending: usize,
    pub overdue: usize,
}
