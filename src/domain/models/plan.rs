//! Membership plan tiers and their base monthly prices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The plans the gym offers. Each tier carries a fixed base monthly price;
/// discounts are applied downstream by the fee service, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plan {
    /// Entry tier, gym floor access only.
    Basic,
    /// Every machine and group class.
    Full,
    /// Full access plus classes and spa.
    Premium,
}

impl Plan {
    /// Base monthly price for the tier, before any tenure discount.
    pub fn base_price(&self) -> f64 {
        match self {
            Plan::Basic => 15000.0,
            Plan::Full => 22000.0,
            Plan::Premium => 30000.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Basic => "Basic",
            Plan::Full => "Full",
            Plan::Premium => "Premium",
        }
    }

    /// Parse from a plan name, for shells mapping user selections back to a
    /// tier. Case-insensitive.
    pub fn from_string(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Plan::Basic),
            "full" => Ok(Plan::Full),
            "premium" => Ok(Plan::Premium),
            _ => Err(format!("Unknown plan: {}", s)),
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prices() {
        assert_eq!(Plan::Basic.base_price(), 15000.0);
        assert_eq!(Plan::Full.base_price(), 22000.0);
        assert_eq!(Plan::Premium.base_price(), 30000.0);
    }

    #[test]
    fn test_from_string() {
        assert_eq!(Plan::from_string("basic").unwrap(), Plan::Basic);
        assert_eq!(Plan::from_string("PREMIUM").unwrap(), Plan::Premium);
        assert!(Plan::from_string("platinum").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Plan::Full.to_string(), "Full");
    }
}
