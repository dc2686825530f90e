//! Fee quoting and membership tenure arithmetic.
//!
//! The quote rule is the gym's only pricing rule: a member with at least a
//! full year of tenure pays 10% less than the plan's base price. Tenure is
//! counted in complete calendar months, not 30-day buckets.

use chrono::{Datelike, Months, NaiveDate};
use log::debug;

use crate::domain::models::plan::Plan;

/// Tenure threshold, in whole months, at which the loyalty discount kicks in.
const LOYALTY_TENURE_MONTHS: i64 = 12;

/// Price multiplier once the threshold is reached (10% off).
const LOYALTY_DISCOUNT_FACTOR: f64 = 0.9;

/// Service responsible for fee calculations.
///
/// Stateless and side-effect free: the reference date is always passed in
/// explicitly, so quotes are reproducible.
#[derive(Debug, Clone, Default)]
pub struct FeeService;

impl FeeService {
    pub fn new() -> Self {
        Self
    }

    /// Quote the monthly fee for a membership as of a given date.
    ///
    /// Members with `LOYALTY_TENURE_MONTHS` or more complete months of
    /// tenure get the discounted price; everyone else pays the plan's base
    /// price. An `as_of` earlier than `enrolled_on` yields negative tenure
    /// and therefore the undiscounted base price.
    pub fn quote(&self, enrolled_on: NaiveDate, plan: Plan, as_of: NaiveDate) -> f64 {
        let tenure = whole_months_between(enrolled_on, as_of);
        let base = plan.base_price();

        debug!(
            "Quoting fee: plan={}, tenure={} months, base={:.2}",
            plan, tenure, base
        );

        if tenure >= LOYALTY_TENURE_MONTHS {
            base * LOYALTY_DISCOUNT_FACTOR
        } else {
            base
        }
    }
}

/// Number of complete calendar months between two dates.
///
/// Partial months truncate, and month-end clamping counts: a stretch that
/// only falls short because the target month is shorter (Jan 31 -> Feb 28)
/// still counts as a complete month. Swapping the arguments negates the
/// result.
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    if to < from {
        return -whole_months_between(to, from);
    }

    let mut months = (to.year() as i64 - from.year() as i64) * 12
        + (to.month() as i64 - from.month() as i64);
    if to.day() < from.day() {
        months -= 1;
    }

    // Clamped month ends can leave the naive count one short: stepping one
    // more month forward from `from` may still land on or before `to`.
    if let Some(stepped) = from.checked_add_months(Months::new((months + 1) as u32)) {
        if stepped <= to {
            months += 1;
        }
    }

    months
}
