//! Domain models for the gym tracker backend.

pub mod audit;
pub mod member;
pub mod plan;

pub use audit::AuditEntry;
pub use member::{Member, MemberValidationError};
pub use plan::Plan;
