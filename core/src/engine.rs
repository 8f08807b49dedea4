//! The commission engine — canonical pass plus per-query evaluation.
//!
//! PIPELINE (fixed, documented, never reordered):
//!   1. sort_canonical      — by (agent, date), feed order breaks ties
//!   2. assign_ordinals     — per-(agent, month) counter, all types
//!   3. apply_net_amounts   — capped proportional withdrawal deduction
//!
//! Steps 1–3 run once, at build time, over the full dataset. evaluate()
//! is pure: it derives every scope-dependent number from the currently
//! selected scope, never from a prior scope's cached value.

use crate::ledger::{LedgerRow, Transaction, TxnType, WithdrawalRecord};
use crate::resolver::{self, CommissionRow, Scope};
use crate::team_leader::{
    attainment_commission, MethodSplit, TeamLeaderSummary, TeamLeaderTargets,
};
use crate::weekly_bonus::{weekly_bonus_total, FxRate};
use crate::withdrawals::{apply_net_amounts, WithdrawalTotals};
use crate::{sequencer, types::AgentId};
use serde::Serialize;

pub struct CommissionEngine {
    rows: Vec<LedgerRow>,
    targets: TeamLeaderTargets,
}

/// Per-query aggregate summary for the scope.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeSummary {
    /// Attainment percentage under a team-leader filter, otherwise the
    /// scope's flat RTN percentage.
    pub commission_pct: f64,
    /// Total net USD volume over every scoped row (FTD net = gross).
    pub net_volume_usd: f64,
    pub weekly_bonus_usd: f64,
    /// Sum of per-row commission. The weekly bonus is reported separately
    /// and never folded in here.
    pub commission_usd: f64,
    pub ftd_count: usize,
    pub normal_net_usd: f64,
    pub wallet_net_usd: f64,
}

impl ScopeSummary {
    fn empty() -> Self {
        Self {
            commission_pct: 0.0,
            net_volume_usd: 0.0,
            weekly_bonus_usd: 0.0,
            commission_usd: 0.0,
            ftd_count: 0,
            normal_net_usd: 0.0,
            wallet_net_usd: 0.0,
        }
    }
}

/// Everything a caller displays for one query.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub rows: Vec<CommissionRow>,
    pub summary: ScopeSummary,
    pub team_leader: Option<TeamLeaderSummary>,
    /// Per-agent commission totals, sorted by agent — the charting series.
    pub by_agent: Vec<(AgentId, f64)>,
}

impl EvaluationReport {
    /// The explicit "no data" result for an empty scope.
    fn no_data() -> Self {
        Self {
            rows: Vec::new(),
            summary: ScopeSummary::empty(),
            team_leader: None,
            by_agent: Vec::new(),
        }
    }
}

impl CommissionEngine {
    /// Build the engine: one canonical pass over the full dataset.
    pub fn build(
        transactions: Vec<Transaction>,
        withdrawals: &[WithdrawalRecord],
        targets: TeamLeaderTargets,
    ) -> Self {
        let mut txns = transactions;
        sequencer::sort_canonical(&mut txns);
        let mut rows = sequencer::assign_ordinals(txns);

        let totals = WithdrawalTotals::aggregate(withdrawals);
        apply_net_amounts(&mut rows, &totals);

        log::info!(
            "canonical pass: {} rows, {} withdrawal groups",
            rows.len(),
            totals.group_count()
        );

        Self { rows, targets }
    }

    /// The canonical rows, in (agent, date) order.
    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    pub fn target(&self, leader: &str) -> f64 {
        self.targets.get(leader)
    }

    /// Override a leader's target. Last write wins; the next evaluate()
    /// sees the new value.
    pub fn set_target(&mut self, leader: &str, target_usd: f64) {
        log::info!("target override: {leader} -> {target_usd:.0} USD");
        self.targets.set(leader, target_usd);
    }

    /// Evaluate one scope. Recomputes every scope-dependent figure fresh;
    /// an empty scope yields the zeroed "no data" report, not an error.
    pub fn evaluate(&self, scope: &Scope, fx: FxRate) -> EvaluationReport {
        let resolution = resolver::resolve(&self.rows, scope);
        if resolution.rows.is_empty() {
            return EvaluationReport::no_data();
        }

        let bonus = weekly_bonus_total(&resolution.rows, fx);

        let team_leader = scope.team_leader.as_deref().map(|leader| {
            // Under a team-leader scope every row is already one of the
            // team's RTN rows.
            attainment_commission(leader, &resolution.rows, self.targets.get(leader))
        });

        let split = MethodSplit::of(&resolution.rows);
        let commission_pct = match &team_leader {
            Some(tl) => tl.base_pct,
            None => resolution.rtn_pct,
        };

        let summary = ScopeSummary {
            commission_pct,
            net_volume_usd: resolution.rows.iter().map(|r| r.net_usd).sum(),
            weekly_bonus_usd: bonus,
            commission_usd: resolution.rows.iter().map(|r| r.commission_usd).sum(),
            ftd_count: resolution
                .rows
                .iter()
                .filter(|r| r.txn_type == TxnType::Ftd)
                .count(),
            normal_net_usd: split.normal_net,
            wallet_net_usd: split.wallet_net,
        };

        let by_agent = resolver::per_agent_commission(&resolution.rows);

        log::debug!(
            "scope evaluated: {} rows, pct {:.3}, net {:.2}, commission {:.2}, bonus {:.2}",
            resolution.rows.len(),
            summary.commission_pct,
            summary.net_volume_usd,
            summary.commission_usd,
            summary.weekly_bonus_usd
        );

        EvaluationReport {
            rows: resolution.rows,
            summary,
            team_leader,
            by_agent,
        }
    }
}
