//! In-memory member store
//!
//! [`MemberBook`] owns the member list and hands out ids. [`MemberStore`] is
//! the shared handle kept in server state: one writer at a time, readers in
//! parallel. Every mutation validates first and then applies completely, so
//! a rejected request leaves the list untouched.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use shared::models::{
    ChamaStats, Member, MemberCreate, MemberId, MemberWithStatus, PaymentStatus, StatusBreakdown,
};
use shared::payment::{compute_stats, derive_payment_status, status_breakdown};
use shared::util::now_utc;
use shared::{AppError, AppResult};
use tokio::sync::RwLock;
use validator::Validate;

/// Owned member collection with monotonic id allocation
#[derive(Debug)]
pub struct MemberBook {
    members: Vec<Member>,
    next_id: MemberId,
}

impl MemberBook {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            next_id: 1,
        }
    }

    /// Validate `payload` and append a new unpaid member
    pub fn insert(&mut self, payload: MemberCreate, joined: DateTime<Utc>) -> AppResult<Member> {
        let payload = payload.normalized();
        payload.validate()?;

        let id = self.next_id;
        self.next_id += 1;

        let member = Member::from_create(id, payload, joined);
        self.members.push(member.clone());
        Ok(member)
    }

    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Flip a member's payment flag, returning the updated member
    pub fn set_payment(
        &mut self,
        id: MemberId,
        paid: bool,
        now: DateTime<Utc>,
    ) -> AppResult<Member> {
        let member = self
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::member_not_found(id))?;
        member.set_payment(paid, now);
        Ok(member.clone())
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for MemberBook {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to the member book
#[derive(Debug, Clone, Default)]
pub struct MemberStore {
    book: Arc<RwLock<MemberBook>>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// POST /api/members
    pub async fn create(&self, payload: MemberCreate) -> AppResult<Member> {
        let mut book = self.book.write().await;
        let member = book.insert(payload, now_utc())?;
        tracing::info!(
            member_id = member.id,
            name = %member.name,
            contribution = member.monthly_contribution,
            "Member added"
        );
        Ok(member)
    }

    /// PATCH /api/members/{id}/payment
    pub async fn update_payment(&self, id: MemberId, paid: bool) -> AppResult<Member> {
        let mut book = self.book.write().await;
        let member = book.set_payment(id, paid, now_utc())?;
        tracing::info!(member_id = id, paid, "Payment status updated");
        Ok(member)
    }

    pub async fn get(&self, id: MemberId) -> AppResult<Member> {
        self.book
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::member_not_found(id))
    }

    /// Members with their status as of `today`, optionally filtered by status
    pub async fn list(
        &self,
        today: NaiveDate,
        status: Option<PaymentStatus>,
    ) -> Vec<MemberWithStatus> {
        self.book
            .read()
            .await
            .members()
            .iter()
            .map(|m| MemberWithStatus {
                status: derive_payment_status(m, today),
                member: m.clone(),
            })
            .filter(|m| status.is_none_or(|s| m.status == s))
            .collect()
    }

    /// Ids of every member who has not paid this period
    pub async fn unpaid_ids(&self) -> Vec<MemberId> {
        self.book
            .read()
            .await
            .members()
            .iter()
            .filter(|m| !m.has_paid)
            .map(|m| m.id)
            .collect()
    }

    /// Collection statistics and status breakdown from one consistent read
    pub async fn stats(&self, today: NaiveDate) -> (ChamaStats, StatusBreakdown) {
        let book = self.book.read().await;
        (
            compute_stats(book.members()),
            status_breakdown(book.members(), today),
        )
    }

    /// Copy of the current member list
    pub async fn snapshot(&self) -> Vec<Member> {
        self.book.read().await.members().to_vec()
    }

    pub async fn len(&self) -> usize {
        self.book.read().await.len()
    }
}
