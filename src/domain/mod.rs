//! Domain layer: models, commands, and services for the gym tracker.

pub mod audit_log;
pub mod commands;
pub mod fee;
pub mod member_service;
pub mod models;

// Re-export commonly used types
pub use audit_log::OperationLog;
pub use fee::FeeService;
pub use member_service::{MemberService, RegistryError};
