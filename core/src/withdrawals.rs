//! Withdrawal aggregation and proportional apportionment.
//!
//! Withdrawals deduct from the same agent/month's RTN deposits,
//! proportionally across every deposit in the group, and the deductible
//! pool is capped at what was actually deposited. WALLET-method
//! withdrawals are excluded from the deduction entirely — wallet handling
//! affects the commission percentage, not the net amount.

use crate::ledger::{LedgerRow, MonthKey, PayMethod, WithdrawalRecord};
use crate::types::AgentId;
use std::collections::HashMap;

/// Per-(agent, month) totals of normal-method withdrawals. Individual
/// records are not retained past this aggregation.
pub struct WithdrawalTotals {
    normal: HashMap<(AgentId, MonthKey), f64>,
}

impl WithdrawalTotals {
    pub fn aggregate(records: &[WithdrawalRecord]) -> Self {
        let mut normal: HashMap<(AgentId, MonthKey), f64> = HashMap::new();
        for rec in records {
            if rec.method == PayMethod::Wallet {
                continue;
            }
            *normal
                .entry((rec.agent.clone(), MonthKey::of(rec.date)))
                .or_insert(0.0) += rec.amount_usd;
        }
        Self { normal }
    }

    pub fn normal_total(&self, agent: &str, month: MonthKey) -> f64 {
        self.normal
            .get(&(agent.to_string(), month))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn group_count(&self) -> usize {
        self.normal.len()
    }
}

/// Overwrite `net_usd` on every RTN row with its withdrawal-adjusted
/// amount.
///
/// Per `(agent, month)` group: `total_deposit` is the sum of RTN gross
/// amounts; the applicable withdrawal is `min(normal_withdrawals,
/// total_deposit)`; each deposit absorbs its proportional share and never
/// goes below zero. A group with no deposits keeps gross amounts — there
/// is nothing to apportion against.
pub fn apply_net_amounts(rows: &mut [LedgerRow], withdrawals: &WithdrawalTotals) {
    let mut total_deposit: HashMap<(AgentId, MonthKey), f64> = HashMap::new();
    for row in rows.iter() {
        if row.is_rtn() {
            *total_deposit
                .entry((row.txn.agent.clone(), row.month_key))
                .or_insert(0.0) += row.txn.amount_usd;
        }
    }

    for row in rows.iter_mut() {
        if !row.is_rtn() {
            continue;
        }
        let total = total_deposit
            .get(&(row.txn.agent.clone(), row.month_key))
            .copied()
            .unwrap_or(0.0);
        if total <= 0.0 {
            row.net_usd = row.txn.amount_usd;
            continue;
        }
        let applicable = withdrawals
            .normal_total(&row.txn.agent, row.month_key)
            .min(total);
        let share = row.txn.amount_usd / total;
        row.net_usd = (row.txn.amount_usd - applicable * share).max(0.0);
    }
}
