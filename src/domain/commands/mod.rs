//! Command/result types consumed by the domain services.

pub mod members;
