//! Domain model for an enrolled gym member.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::models::plan::Plan;

/// Domain model representing a member of the gym.
///
/// Identity is the external member ID (national ID) and nothing else: the
/// registry keys membership on `member_id` alone, so name and plan can change
/// freely over a member's lifetime while the ID and enrollment date cannot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: String,
    pub name: String,
    pub plan: Plan,
    pub enrolled_on: NaiveDate,
}

#[derive(Debug, thiserror::Error)]
pub enum MemberValidationError {
    #[error("Member ID cannot be empty")]
    MissingId,
}

impl Member {
    /// Create a new member record.
    ///
    /// The member ID is mandatory; everything else is taken as given, since
    /// the calling shell owns input validation.
    pub fn new(
        member_id: String,
        name: String,
        plan: Plan,
        enrolled_on: NaiveDate,
    ) -> Result<Self, MemberValidationError> {
        if member_id.is_empty() {
            return Err(MemberValidationError::MissingId);
        }

        Ok(Self {
            member_id,
            name,
            plan,
            enrolled_on,
        })
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Member [id={}, name={}, plan={}, enrolled={}]",
            self.member_id, self.name, self.plan, self.enrolled_on
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_member() {
        let member = Member::new(
            "30123456".to_string(),
            "Test Member".to_string(),
            Plan::Basic,
            date(2024, 3, 15),
        )
        .unwrap();

        assert_eq!(member.member_id, "30123456");
        assert_eq!(member.name, "Test Member");
        assert_eq!(member.plan, Plan::Basic);
        assert_eq!(member.enrolled_on, date(2024, 3, 15));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = Member::new(
            String::new(),
            "No Id".to_string(),
            Plan::Full,
            date(2024, 1, 1),
        );
        assert!(matches!(result, Err(MemberValidationError::MissingId)));
    }

    #[test]
    fn test_display_format() {
        let member = Member::new(
            "111".to_string(),
            "Ana".to_string(),
            Plan::Premium,
            date(2023, 7, 1),
        )
        .unwrap();

        assert_eq!(
            member.to_string(),
            "Member [id=111, name=Ana, plan=Premium, enrolled=2023-07-01]"
        );
    }
}
