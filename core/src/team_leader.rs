//! Team-leader targets and attainment commission.
//!
//! The target store is the only mutable state in the system: an explicit
//! get/set map passed by reference into the engine, never read from
//! ambient process state. Writes are last-write-wins.

use crate::ledger::PayMethod;
use crate::resolver::CommissionRow;
use crate::tiers::team_leader_tier;
use crate::types::TeamName;
use serde::Serialize;
use std::collections::HashMap;

/// Wallet funds always earn a flat +5 percentage points over whatever
/// base tier applies.
pub const WALLET_PREMIUM: f64 = 0.05;

/// The seeded baseline targets, USD per leader.
pub const BASELINE_TARGETS: &[(&str, f64)] = &[
    ("Luisa Medina", 180_000.0),
    ("Hugo Del Castillo", 230_000.0),
    ("Rafael Castellanos", 230_000.0),
    ("Carlos Frias", 210_000.0),
    ("Diego Ceballos", 47_000.0),
];

/// Per-leader target store. `get` of an unknown leader is 0, which
/// downstream reads as "no target configured" and zeroes the commission.
#[derive(Debug, Clone)]
pub struct TeamLeaderTargets {
    targets: HashMap<TeamName, f64>,
}

impl TeamLeaderTargets {
    pub fn baseline() -> Self {
        Self {
            targets: BASELINE_TARGETS
                .iter()
                .map(|(name, target)| (name.to_string(), *target))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            targets: HashMap::new(),
        }
    }

    pub fn from_map(targets: HashMap<TeamName, f64>) -> Self {
        Self { targets }
    }

    pub fn get(&self, leader: &str) -> f64 {
        self.targets.get(leader).copied().unwrap_or(0.0)
    }

    /// Last write wins.
    pub fn set(&mut self, leader: &str, target_usd: f64) {
        self.targets.insert(leader.to_string(), target_usd);
    }
}

/// Net amounts split by payment method.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MethodSplit {
    pub normal_net: f64,
    pub wallet_net: f64,
}

impl MethodSplit {
    pub fn of(rows: &[CommissionRow]) -> Self {
        let mut split = MethodSplit::default();
        for row in rows {
            match row.method {
                PayMethod::Wallet => split.wallet_net += row.net_usd,
                PayMethod::Normal => split.normal_net += row.net_usd,
            }
        }
        split
    }
}

/// The wallet-premium commission primitive:
/// `normal_net * base + wallet_net * (base + 0.05)`.
///
/// Used for the team-leader commission and for any other wallet-bearing
/// aggregate (plain RTN totals without a team-leader lens use base 0).
pub fn commission_with_wallet_premium(split: MethodSplit, base_pct: f64) -> f64 {
    split.normal_net * base_pct + split.wallet_net * (base_pct + WALLET_PREMIUM)
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamLeaderSummary {
    pub leader: TeamName,
    pub target_usd: f64,
    /// Net volume / target. 0 when no target is configured.
    pub attainment: f64,
    pub base_pct: f64,
    pub commission_usd: f64,
}

/// Commission for a team leader over their team's scoped RTN rows.
///
/// A target of 0 (or less) means attainment is undefined: percentage and
/// commission are 0, and that is a result, not an error.
pub fn attainment_commission(
    leader: &str,
    team_rows: &[CommissionRow],
    target_usd: f64,
) -> TeamLeaderSummary {
    let net: f64 = team_rows.iter().map(|r| r.net_usd).sum();

    if target_usd <= 0.0 {
        return TeamLeaderSummary {
            leader: leader.to_string(),
            target_usd,
            attainment: 0.0,
            base_pct: 0.0,
            commission_usd: 0.0,
        };
    }

    let attainment = net / target_usd;
    let base_pct = team_leader_tier(attainment);
    let split = MethodSplit::of(team_rows);

    TeamLeaderSummary {
        leader: leader.to_string(),
        target_usd,
        attainment,
        base_pct,
        commission_usd: commission_with_wallet_premium(split, base_pct),
    }
}
