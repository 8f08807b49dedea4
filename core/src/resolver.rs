//! Scope filtering and per-scope commission resolution.
//!
//! A scope is whatever subset of the canonical rows a caller is looking
//! at: a date range, agent lists, or one team leader's RTN book. The RTN
//! percentage is a function of the SCOPE'S aggregate net total, so it is
//! re-derived on every call — narrowing the scope changes the tier.
//! Nothing here mutates the canonical rows.

use crate::ledger::{LedgerRow, PayMethod, TxnType};
use crate::tiers::{ftd_tier, rtn_tier};
use crate::types::{AgentId, TeamName};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Caller-selected evaluation scope.
///
/// Filter precedence: the date range always applies first; a team-leader
/// filter overrides the agent lists entirely and keeps only that team's
/// RTN rows; otherwise each agent list filters rows of its own
/// transaction type (an empty list means no filter for that type).
#[derive(Debug, Clone, Default)]
pub struct Scope {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub ftd_agents: Vec<AgentId>,
    pub rtn_agents: Vec<AgentId>,
    pub team_leader: Option<TeamName>,
}

impl Scope {
    /// The whole dataset.
    pub fn all() -> Self {
        Self::default()
    }

    /// Inclusive date range, no other filters.
    pub fn dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    fn admits(&self, row: &LedgerRow) -> bool {
        if let Some(start) = self.start {
            if row.txn.date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if row.txn.date > end {
                return false;
            }
        }
        if let Some(leader) = &self.team_leader {
            return row.is_rtn() && row.txn.team.as_deref() == Some(leader.as_str());
        }
        match row.txn.txn_type {
            TxnType::Ftd => {
                self.ftd_agents.is_empty() || self.ftd_agents.contains(&row.txn.agent)
            }
            TxnType::Rtn => {
                self.rtn_agents.is_empty() || self.rtn_agents.contains(&row.txn.agent)
            }
        }
    }
}

/// One scoped transaction with its commission annotation. This is the
/// per-transaction output record handed to presentation.
#[derive(Debug, Clone, Serialize)]
pub struct CommissionRow {
    pub date: NaiveDate,
    pub agent: AgentId,
    pub txn_type: TxnType,
    pub team: Option<TeamName>,
    pub country: Option<String>,
    pub affiliate: Option<String>,
    pub method: PayMethod,
    pub amount_usd: f64,
    pub ftd_ordinal: u32,
    pub net_usd: f64,
    pub commission_pct: f64,
    pub commission_usd: f64,
}

/// Output of one scope resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeResolution {
    pub rows: Vec<CommissionRow>,
    /// The flat percentage applied to every RTN row in the scope. 0 when
    /// the scope holds no RTN rows.
    pub rtn_pct: f64,
    pub rtn_net_total: f64,
}

/// Resolve commissions for one scope.
///
/// FTD rows keep their scope-independent ordinal tier. RTN rows all
/// receive `rtn_tier(sum of net over the scope's RTN rows)` — a
/// progressive-plateau scheme over the aggregate, not per-row
/// progressivity.
pub fn resolve(rows: &[LedgerRow], scope: &Scope) -> ScopeResolution {
    let scoped: Vec<&LedgerRow> = rows.iter().filter(|r| scope.admits(r)).collect();

    let rtn_net_total: f64 = scoped.iter().filter(|r| r.is_rtn()).map(|r| r.net_usd).sum();
    let has_rtn = scoped.iter().any(|r| r.is_rtn());
    let rtn_pct = if has_rtn { rtn_tier(rtn_net_total) } else { 0.0 };

    let annotated = scoped
        .into_iter()
        .map(|row| {
            let (pct, commission) = match row.txn.txn_type {
                TxnType::Ftd => {
                    let pct = ftd_tier(row.ftd_ordinal);
                    (pct, row.txn.amount_usd * pct)
                }
                TxnType::Rtn => (rtn_pct, row.net_usd * rtn_pct),
            };
            CommissionRow {
                date: row.txn.date,
                agent: row.txn.agent.clone(),
                txn_type: row.txn.txn_type,
                team: row.txn.team.clone(),
                country: row.txn.country.clone(),
                affiliate: row.txn.affiliate.clone(),
                method: row.txn.method,
                amount_usd: row.txn.amount_usd,
                ftd_ordinal: row.ftd_ordinal,
                net_usd: row.net_usd,
                commission_pct: pct,
                commission_usd: commission,
            }
        })
        .collect();

    ScopeResolution {
        rows: annotated,
        rtn_pct,
        rtn_net_total,
    }
}

/// Per-agent commission totals, sorted by agent name — the charting
/// series.
pub fn per_agent_commission(rows: &[CommissionRow]) -> Vec<(AgentId, f64)> {
    let mut totals: BTreeMap<AgentId, f64> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.agent.clone()).or_insert(0.0) += row.commission_usd;
    }
    totals.into_iter().collect()
}
