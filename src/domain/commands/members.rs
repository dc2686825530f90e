//! Command and result types for member registry operations.
//!
//! The shell builds one command per user action and receives a typed result
//! back; mutating results carry the affected member so the shell can present
//! it without a second lookup.

use chrono::NaiveDate;

use crate::domain::models::member::Member;
use crate::domain::models::plan::Plan;

#[derive(Debug, Clone)]
pub struct EnrollMemberCommand {
    pub member_id: String,
    pub name: String,
    pub plan: Plan,
    pub enrolled_on: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct EnrollMemberResult {
    pub member: Member,
}

#[derive(Debug, Clone)]
pub struct GetMemberCommand {
    pub member_id: String,
}

#[derive(Debug, Clone)]
pub struct GetMemberResult {
    pub member: Member,
}

#[derive(Debug, Clone)]
pub struct RenameMemberCommand {
    pub member_id: String,
    pub new_name: String,
}

#[derive(Debug, Clone)]
pub struct RenameMemberResult {
    pub member: Member,
}

#[derive(Debug, Clone)]
pub struct ChangePlanCommand {
    pub member_id: String,
    pub new_plan: Plan,
}

#[derive(Debug, Clone)]
pub struct ChangePlanResult {
    pub member: Member,
}

#[derive(Debug, Clone)]
pub struct RemoveMemberCommand {
    pub member_id: String,
}

#[derive(Debug, Clone)]
pub struct RemoveMemberResult {
    /// Whether a member was actually removed. A miss is a normal outcome,
    /// not an error.
    pub removed: bool,
}

#[derive(Debug, Clone)]
pub struct FeeQuoteCommand {
    pub member_id: String,
}

#[derive(Debug, Clone)]
pub struct FeeQuoteResult {
    pub plan: Plan,
    /// Whole calendar months between enrollment and the reference date.
    pub tenure_months: i64,
    pub amount: f64,
}

#[derive(Debug, Clone)]
pub struct MemberListResult {
    pub members: Vec<Member>,
}

#[derive(Debug, Clone)]
pub struct MonthlySignupsResult {
    /// Signups per calendar month, index 0 = January.
    pub counts: [u32; 12],
}
