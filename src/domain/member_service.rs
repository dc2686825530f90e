//! Member registry service for the gym tracker.
//!
//! Owns the roster of enrolled members, the per-month signup statistics, and
//! the append-only operation log. The three pieces live behind a single lock
//! so every mutating operation applies its roster change, counter update,
//! and audit entry as one unit, and readers never observe a half-applied
//! mutation.

use anyhow::Result;
use chrono::{Datelike, Local, Utc};
use log::{debug, info, warn};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::audit_log::OperationLog;
use crate::domain::commands::members::{
    ChangePlanCommand, ChangePlanResult, EnrollMemberCommand, EnrollMemberResult, FeeQuoteCommand,
    FeeQuoteResult, GetMemberCommand, GetMemberResult, MemberListResult, MonthlySignupsResult,
    RemoveMemberCommand, RemoveMemberResult, RenameMemberCommand, RenameMemberResult,
};
use crate::domain::fee::{self, FeeService};
use crate::domain::models::member::Member;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Member ID {member_id} is already registered")]
    DuplicateMember { member_id: String },
    #[error("No member found with ID {member_id}")]
    MemberNotFound { member_id: String },
}

/// Registry state: the roster, signup statistics, and operation log.
///
/// Members stay in enrollment order; the sorted listing relies on that order
/// to break name ties. The counter is indexed by calendar month (0 = January)
/// and tracks all-time enrollments, so removal never touches it.
#[derive(Debug, Default)]
struct RegistryState {
    members: Vec<Member>,
    signups_by_month: [u32; 12],
    log: OperationLog,
}

/// Service for managing the member roster.
#[derive(Clone)]
pub struct MemberService {
    fee_service: FeeService,
    state: Arc<Mutex<RegistryState>>,
}

impl MemberService {
    /// Create a new MemberService with an empty roster.
    pub fn new(fee_service: FeeService) -> Self {
        Self {
            fee_service,
            state: Arc::new(Mutex::new(RegistryState::default())),
        }
    }

    /// Enroll a new member.
    ///
    /// Fails if the member ID is empty or already registered; a failed
    /// enrollment leaves roster, counter, and log untouched.
    pub fn enroll(&self, command: EnrollMemberCommand) -> Result<EnrollMemberResult> {
        info!(
            "Enrolling member: id={}, name={}, plan={}",
            command.member_id, command.name, command.plan
        );

        let member = Member::new(
            command.member_id,
            command.name,
            command.plan,
            command.enrolled_on,
        )?;

        let mut state = self.lock_state();

        if state.members.iter().any(|m| m.member_id == member.member_id) {
            warn!("Enrollment rejected, duplicate member ID: {}", member.member_id);
            return Err(RegistryError::DuplicateMember {
                member_id: member.member_id,
            }
            .into());
        }

        let month_slot = member.enrolled_on.month0() as usize;
        state.signups_by_month[month_slot] += 1;

        let message = format!(
            "ENROLL: {} ({}) - plan {}",
            member.member_id, member.name, member.plan
        );
        state.log.append(Utc::now(), message);
        state.members.push(member.clone());

        info!("Enrolled member {} on plan {}", member.member_id, member.plan);

        Ok(EnrollMemberResult { member })
    }

    /// Look up a member by ID. Returns an owned copy of the record.
    pub fn find_member(&self, command: GetMemberCommand) -> Result<GetMemberResult> {
        debug!("Looking up member: {}", command.member_id);

        let state = self.lock_state();
        let member = Self::find_in(&state.members, &command.member_id)?.clone();

        Ok(GetMemberResult { member })
    }

    /// Replace a member's display name.
    ///
    /// The new name is stored as given; the shell owns string validation.
    pub fn rename_member(&self, command: RenameMemberCommand) -> Result<RenameMemberResult> {
        info!("Renaming member: {}", command.member_id);

        let mut state = self.lock_state();
        let idx = Self::position_of(&state.members, &command.member_id)?;

        let previous = std::mem::replace(&mut state.members[idx].name, command.new_name.clone());
        let message = format!(
            "RENAME: {} name '{}' -> '{}'",
            command.member_id, previous, command.new_name
        );
        state.log.append(Utc::now(), message);

        let member = state.members[idx].clone();
        info!(
            "Renamed member {}: '{}' -> '{}'",
            member.member_id, previous, member.name
        );

        Ok(RenameMemberResult { member })
    }

    /// Move a member to a different plan.
    pub fn change_plan(&self, command: ChangePlanCommand) -> Result<ChangePlanResult> {
        info!(
            "Changing plan for member {}: -> {}",
            command.member_id, command.new_plan
        );

        let mut state = self.lock_state();
        let idx = Self::position_of(&state.members, &command.member_id)?;

        state.members[idx].plan = command.new_plan;
        let message = format!("PLAN CHANGE: {} now {}", command.member_id, command.new_plan);
        state.log.append(Utc::now(), message);

        let member = state.members[idx].clone();
        info!("Member {} now on plan {}", member.member_id, member.plan);

        Ok(ChangePlanResult { member })
    }

    /// Remove a member from the roster.
    ///
    /// A miss is reported through `removed: false`, not an error, and leaves
    /// no trace in the log. Signup statistics track all-time enrollments, so
    /// removal leaves them unchanged.
    pub fn remove_member(&self, command: RemoveMemberCommand) -> RemoveMemberResult {
        info!("Removing member: {}", command.member_id);

        let mut state = self.lock_state();
        let before = state.members.len();
        state.members.retain(|m| m.member_id != command.member_id);
        let removed = state.members.len() < before;

        if removed {
            let message = format!("REMOVE: {}", command.member_id);
            state.log.append(Utc::now(), message);
            info!("Removed member {}", command.member_id);
        } else {
            warn!("Remove requested for unknown member: {}", command.member_id);
        }

        RemoveMemberResult { removed }
    }

    /// Quote the fee a member owes as of today.
    pub fn quote_fee(&self, command: FeeQuoteCommand) -> Result<FeeQuoteResult> {
        debug!("Quoting fee for member: {}", command.member_id);

        let state = self.lock_state();
        let member = Self::find_in(&state.members, &command.member_id)?;

        let today = Local::now().date_naive();
        let tenure_months = fee::whole_months_between(member.enrolled_on, today);
        let amount = self.fee_service.quote(member.enrolled_on, member.plan, today);

        Ok(FeeQuoteResult {
            plan: member.plan,
            tenure_months,
            amount,
        })
    }

    /// Whether a member with this ID is currently enrolled.
    pub fn member_exists(&self, member_id: &str) -> bool {
        let state = self.lock_state();
        state.members.iter().any(|m| m.member_id == member_id)
    }

    /// Current roster size.
    pub fn member_count(&self) -> usize {
        self.lock_state().members.len()
    }

    /// All current members, ordered by display name ignoring case.
    ///
    /// The sort is stable, so members sharing a name keep their enrollment
    /// order. Returns an independent copy of the roster.
    pub fn list_members_sorted(&self) -> MemberListResult {
        let state = self.lock_state();
        let mut members = state.members.clone();
        members.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        MemberListResult { members }
    }

    /// Signups per calendar month since the registry was created.
    ///
    /// Returns an independent copy; index 0 is January. Removal does not
    /// decrement these counts.
    pub fn monthly_signup_counts(&self) -> MonthlySignupsResult {
        MonthlySignupsResult {
            counts: self.lock_state().signups_by_month,
        }
    }

    /// The full operation history as formatted lines, oldest first.
    pub fn audit_trail(&self) -> Vec<String> {
        self.lock_state().log.as_lines()
    }

    fn lock_state(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap()
    }

    fn find_in<'a>(members: &'a [Member], member_id: &str) -> Result<&'a Member, RegistryError> {
        members
            .iter()
            .find(|m| m.member_id == member_id)
            .ok_or_else(|| RegistryError::MemberNotFound {
                member_id: member_id.to_string(),
            })
    }

    fn position_of(members: &[Member], member_id: &str) -> Result<usize, RegistryError> {
        members
            .iter()
            .position(|m| m.member_id == member_id)
            .ok_or_else(|| {
                warn!("Member not found: {}", member_id);
                RegistryError::MemberNotFound {
                    member_id: member_id.to_string(),
                }
            })
    }
}
