//! Member Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{PHONE_RE, validate_contribution, validate_member_name};

use super::PaymentStatus;

/// Store-assigned member identifier (monotonic, never reused)
pub type MemberId = u64;

/// Member entity (one Chama participant)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub phone_number: String,
    /// Whole currency units
    pub monthly_contribution: u64,
    /// Next or most recent payment deadline
    pub due_date: NaiveDate,
    pub has_paid: bool,
    /// Set whenever `has_paid` flips to true, kept when it flips back
    pub last_payment_date: Option<DateTime<Utc>>,
    pub joined_date: DateTime<Utc>,
}

impl Member {
    /// Build a new, unpaid member from a validated create payload
    pub fn from_create(id: MemberId, payload: MemberCreate, joined: DateTime<Utc>) -> Self {
        Self {
            id,
            name: payload.name,
            phone_number: payload.phone_number,
            monthly_contribution: payload.monthly_contribution,
            due_date: payload.due_date,
            has_paid: false,
            last_payment_date: None,
            joined_date: joined,
        }
    }

    /// Record the current-period payment flag.
    ///
    /// Flipping to paid stamps `last_payment_date` with `now`; marking an
    /// already paid member as paid again keeps the original stamp. Flipping
    /// to unpaid never clears the stamp. Returns whether `has_paid` changed.
    pub fn set_payment(&mut self, paid: bool, now: DateTime<Utc>) -> bool {
        if self.has_paid == paid {
            return false;
        }
        self.has_paid = paid;
        if paid {
            self.last_payment_date = Some(now);
        }
        true
    }
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreate {
    #[validate(custom(function = "validate_member_name"))]
    pub name: String,
    #[validate(regex(
        path = *PHONE_RE,
        code = "phone",
        message = "not a valid mobile number (expected 07XXXXXXXX or +2547XXXXXXXX)"
    ))]
    pub phone_number: String,
    #[validate(custom(function = "validate_contribution"))]
    pub monthly_contribution: u64,
    pub due_date: NaiveDate,
}

impl MemberCreate {
    /// Trim surrounding whitespace from the free-text fields
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.phone_number = self.phone_number.trim().to_string();
        self
    }
}

/// Payment toggle payload (`PATCH /api/members/{id}/payment`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaymentUpdate {
    pub paid: bool,
}

/// Member with its derived payment status (for list/detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberWithStatus {
    #[serde(flatten)]
    pub member: Member,
    pub status: PaymentStatus,
}
