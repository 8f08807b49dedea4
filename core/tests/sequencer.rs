//! Monthly sequencing tests — ordinal contiguity and ordering.

use chrono::NaiveDate;
use commission_core::ledger::{PayMethod, Transaction, TxnType};
use commission_core::sequencer::{assign_ordinals, sort_canonical};
use std::collections::HashMap;

fn txn(agent: &str, date: &str, txn_type: TxnType, amount: f64) -> Transaction {
    Transaction {
        id: None,
        agent: agent.to_string(),
        team: None,
        country: None,
        affiliate: None,
        source: None,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        txn_type,
        method: PayMethod::Normal,
        amount_usd: amount,
    }
}

/// Ordinals per (agent, month) are exactly 1..=N, no gaps, no repeats.
#[test]
fn ordinals_are_contiguous() {
    let mut txns = vec![
        txn("Ana Torres", "2025-09-03", TxnType::Ftd, 100.0),
        txn("Ana Torres", "2025-09-01", TxnType::Ftd, 100.0),
        txn("Ana Torres", "2025-09-10", TxnType::Ftd, 100.0),
        txn("Ana Torres", "2025-09-07", TxnType::Ftd, 100.0),
        txn("Ana Torres", "2025-09-21", TxnType::Ftd, 100.0),
    ];
    sort_canonical(&mut txns);
    let rows = assign_ordinals(txns);

    let mut ordinals: Vec<u32> = rows.iter().map(|r| r.ftd_ordinal).collect();
    ordinals.sort_unstable();
    assert_eq!(ordinals, vec![1, 2, 3, 4, 5]);
}

/// The counter restarts at 1 in every new month.
#[test]
fn counter_resets_per_month() {
    let mut txns = vec![
        txn("Ana Torres", "2025-09-28", TxnType::Ftd, 100.0),
        txn("Ana Torres", "2025-09-29", TxnType::Ftd, 100.0),
        txn("Ana Torres", "2025-10-01", TxnType::Ftd, 100.0),
    ];
    sort_canonical(&mut txns);
    let rows = assign_ordinals(txns);

    assert_eq!(rows[0].ftd_ordinal, 1);
    assert_eq!(rows[1].ftd_ordinal, 2);
    assert_eq!(rows[2].ftd_ordinal, 1, "October restarts the counter");
}

/// Every transaction advances the counter regardless of type — an RTN
/// between two FTDs still consumes an ordinal slot.
#[test]
fn all_types_advance_the_counter() {
    let mut txns = vec![
        txn("Ana Torres", "2025-09-01", TxnType::Ftd, 100.0),
        txn("Ana Torres", "2025-09-02", TxnType::Rtn, 500.0),
        txn("Ana Torres", "2025-09-03", TxnType::Ftd, 100.0),
    ];
    sort_canonical(&mut txns);
    let rows = assign_ordinals(txns);

    assert_eq!(rows[0].ftd_ordinal, 1);
    assert_eq!(rows[1].ftd_ordinal, 2, "RTN consumed the slot");
    assert_eq!(rows[2].ftd_ordinal, 3, "second FTD lands on 3");
}

/// Same-day transactions keep feed order — the sort is stable.
#[test]
fn same_day_keeps_feed_order() {
    let mut txns = vec![
        txn("Ana Torres", "2025-09-05", TxnType::Ftd, 111.0),
        txn("Ana Torres", "2025-09-05", TxnType::Ftd, 222.0),
        txn("Ana Torres", "2025-09-05", TxnType::Ftd, 333.0),
    ];
    sort_canonical(&mut txns);
    let rows = assign_ordinals(txns);

    assert_eq!(rows[0].txn.amount_usd, 111.0);
    assert_eq!(rows[0].ftd_ordinal, 1);
    assert_eq!(rows[1].txn.amount_usd, 222.0);
    assert_eq!(rows[1].ftd_ordinal, 2);
    assert_eq!(rows[2].txn.amount_usd, 333.0);
    assert_eq!(rows[2].ftd_ordinal, 3);
}

/// Agents never share a counter.
#[test]
fn agents_are_independent() {
    let mut txns = vec![
        txn("Ana Torres", "2025-09-01", TxnType::Ftd, 100.0),
        txn("Bruno Salazar", "2025-09-02", TxnType::Ftd, 100.0),
        txn("Ana Torres", "2025-09-03", TxnType::Ftd, 100.0),
        txn("Bruno Salazar", "2025-09-04", TxnType::Ftd, 100.0),
    ];
    sort_canonical(&mut txns);
    let rows = assign_ordinals(txns);

    let mut per_agent: HashMap<&str, Vec<u32>> = HashMap::new();
    for row in &rows {
        per_agent
            .entry(row.txn.agent.as_str())
            .or_default()
            .push(row.ftd_ordinal);
    }
    assert_eq!(per_agent["Ana Torres"], vec![1, 2]);
    assert_eq!(per_agent["Bruno Salazar"], vec![1, 2]);
}
