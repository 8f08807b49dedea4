//! Monthly sequencing — the canonical ordering and ordinal pass.
//!
//! RULE: runs exactly once, over the full dataset, before any scope is
//! evaluated. Ordinals are global per agent/month; narrowing a query
//! scope never renumbers them.

use crate::ledger::{LedgerRow, MonthKey, Transaction};
use crate::types::AgentId;
use std::collections::HashMap;

/// Sort into canonical order: by agent, then date. The sort is stable, so
/// same-day transactions keep their feed order.
pub fn sort_canonical(txns: &mut [Transaction]) {
    txns.sort_by(|a, b| a.agent.cmp(&b.agent).then(a.date.cmp(&b.date)));
}

/// Assign the per-(agent, month) running counter, 1-based, every
/// transaction counted regardless of type. Input must already be in
/// canonical order.
///
/// `net_usd` starts out equal to the gross amount; the withdrawal
/// apportioner overwrites it for RTN rows.
pub fn assign_ordinals(txns: Vec<Transaction>) -> Vec<LedgerRow> {
    let mut counters: HashMap<(AgentId, MonthKey), u32> = HashMap::new();

    txns.into_iter()
        .map(|txn| {
            let month_key = MonthKey::of(txn.date);
            let counter = counters.entry((txn.agent.clone(), month_key)).or_insert(0);
            *counter += 1;
            LedgerRow {
                month_key,
                ftd_ordinal: *counter,
                net_usd: txn.amount_usd,
                txn,
            }
        })
        .collect()
}
