//! Weekly FTD volume bonus.
//!
//! Counts FTD transactions per agent per week-of-month and pays a bonus
//! per week bucket. The schedule is checked in DESCENDING order and the
//! first match wins — buckets are mutually exclusive, not cumulative,
//! and only the top bucket pays flat USD; the rest pay MXN converted at
//! the caller-supplied rate.

use crate::ledger::TxnType;
use crate::resolver::CommissionRow;
use crate::types::AgentId;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// MXN-per-USD exchange rate, clamped to the accepted band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FxRate(f64);

impl FxRate {
    pub const MIN: f64 = 10.0;
    pub const MAX: f64 = 25.0;
    pub const DEFAULT: f64 = 18.19;

    pub fn new(mxn_per_usd: f64) -> Self {
        Self(mxn_per_usd.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for FxRate {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Week of the month, 1-based: `(day - 1 + weekday_of_first) / 7 + 1`
/// where the weekday of the month's 1st is 0-indexed with Monday = 0.
pub fn week_of_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    let offset = first.weekday().num_days_from_monday();
    (date.day() - 1 + offset) / 7 + 1
}

/// Bonus for one agent-week's FTD count. Descending thresholds, first
/// match wins.
pub fn week_bonus(ftd_count: usize, fx: FxRate) -> f64 {
    if ftd_count >= 15 {
        150.0
    } else if ftd_count >= 5 {
        1_500.0 / fx.get()
    } else if ftd_count >= 4 {
        1_000.0 / fx.get()
    } else if ftd_count >= 2 {
        500.0 / fx.get()
    } else {
        0.0
    }
}

/// Total weekly bonus over the scoped rows, rounded to cents.
pub fn weekly_bonus_total(rows: &[CommissionRow], fx: FxRate) -> f64 {
    let mut counts: HashMap<(AgentId, i32, u32, u32), usize> = HashMap::new();
    for row in rows {
        if row.txn_type != TxnType::Ftd {
            continue;
        }
        let key = (
            row.agent.clone(),
            row.date.year(),
            row.date.month(),
            week_of_month(row.date),
        );
        *counts.entry(key).or_insert(0) += 1;
    }

    let total: f64 = counts.values().map(|&n| week_bonus(n, fx)).sum();
    round_cents(total)
}

/// Round to 2 decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
