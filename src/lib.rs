//! # Gym Tracker Backend
//!
//! This backend library holds the roster and billing core of the gym
//! tracker: member enrollment and lookup, plan changes, tenure-based fee
//! quoting, per-month signup statistics, and the append-only operation log.
//! The interactive shell lives elsewhere; this crate:
//! - Uses synchronous operations (no async/await)
//! - Provides direct access to domain services
//! - Excludes the UI/input layer entirely
//! - Keeps all state in memory for the process lifetime

pub mod domain;

// Re-export commonly used types
pub use domain::fee::FeeService;
pub use domain::member_service::{MemberService, RegistryError};
pub use domain::models::member::{Member, MemberValidationError};
pub use domain::models::plan::Plan;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub member_service: MemberService,
    pub fee_service: FeeService,
}

impl Backend {
    /// Create a new backend instance with all services
    pub fn new() -> Self {
        let fee_service = FeeService::new();
        let member_service = MemberService::new(fee_service.clone());

        Backend {
            member_service,
            fee_service,
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::members::{EnrollMemberCommand, FeeQuoteCommand};
    use chrono::NaiveDate;

    #[test]
    fn test_backend_wires_services_together() {
        let backend = Backend::new();

        backend
            .member_service
            .enroll(EnrollMemberCommand {
                member_id: "20555111".to_string(),
                name: "Smoke Test".to_string(),
                plan: Plan::Full,
                enrolled_on: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            })
            .unwrap();

        let quote = backend
            .member_service
            .quote_fee(FeeQuoteCommand {
                member_id: "20555111".to_string(),
            })
            .unwrap();
        assert!(quote.amount > 0.0);
        assert!(quote.amount <= Plan::Full.base_price());

        assert_eq!(backend.member_service.audit_trail().len(), 1);
    }
}
