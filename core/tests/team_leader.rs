//! Team-leader target store and attainment commission tests.

use chrono::NaiveDate;
use commission_core::ledger::{PayMethod, Transaction, TxnType};
use commission_core::resolver::{resolve, Scope};
use commission_core::sequencer::{assign_ordinals, sort_canonical};
use commission_core::team_leader::{
    attainment_commission, commission_with_wallet_premium, MethodSplit, TeamLeaderTargets,
    WALLET_PREMIUM,
};

fn rtn(agent: &str, team: &str, day: &str, method: PayMethod, amount: f64) -> Transaction {
    Transaction {
        id: None,
        agent: agent.to_string(),
        team: Some(team.to_string()),
        country: None,
        affiliate: None,
        source: None,
        date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
        txn_type: TxnType::Rtn,
        method,
        amount_usd: amount,
    }
}

fn team_rows(txns: Vec<Transaction>, leader: &str) -> Vec<commission_core::resolver::CommissionRow> {
    let mut txns = txns;
    sort_canonical(&mut txns);
    let rows = assign_ordinals(txns);
    resolve(
        &rows,
        &Scope {
            team_leader: Some(leader.to_string()),
            ..Scope::all()
        },
    )
    .rows
}

/// The wallet premium primitive: normal at base, wallet at base + 5pp.
#[test]
fn wallet_premium_formula() {
    let split = MethodSplit {
        normal_net: 1_000.0,
        wallet_net: 500.0,
    };
    let commission = commission_with_wallet_premium(split, 0.01);
    assert!((commission - (1_000.0 * 0.01 + 500.0 * 0.06)).abs() < 1e-9);
    assert_eq!(WALLET_PREMIUM, 0.05);
}

/// The premium applies even at base 0 — wallet funds alone still earn 5%.
#[test]
fn wallet_premium_at_zero_base() {
    let split = MethodSplit {
        normal_net: 2_000.0,
        wallet_net: 1_000.0,
    };
    assert!((commission_with_wallet_premium(split, 0.0) - 50.0).abs() < 1e-9);
}

/// Attainment at 80% of target lands in the 0.8% band and pays the
/// wallet-split commission.
#[test]
fn attainment_commission_with_split() {
    let rows = team_rows(
        vec![
            rtn("Ana Torres", "Luisa Medina", "2025-09-01", PayMethod::Normal, 60_000.0),
            rtn("Bruno Salazar", "Luisa Medina", "2025-09-02", PayMethod::Wallet, 20_000.0),
        ],
        "Luisa Medina",
    );
    let summary = attainment_commission("Luisa Medina", &rows, 100_000.0);

    assert!((summary.attainment - 0.8).abs() < 1e-9);
    assert_eq!(summary.base_pct, 0.008);
    let expected = 60_000.0 * 0.008 + 20_000.0 * (0.008 + 0.05);
    assert!((summary.commission_usd - expected).abs() < 1e-6);
}

/// No configured target (or a zero/negative one) zeroes the commission —
/// undefined attainment is a result, not an error.
#[test]
fn missing_target_zeroes_commission() {
    let rows = team_rows(
        vec![rtn("Ana Torres", "Luisa Medina", "2025-09-01", PayMethod::Normal, 60_000.0)],
        "Luisa Medina",
    );
    let summary = attainment_commission("Luisa Medina", &rows, 0.0);

    assert_eq!(summary.attainment, 0.0);
    assert_eq!(summary.base_pct, 0.0);
    assert_eq!(summary.commission_usd, 0.0);
}

/// Baseline targets are seeded; unknown leaders read as 0.
#[test]
fn baseline_targets_seeded() {
    let targets = TeamLeaderTargets::baseline();
    assert_eq!(targets.get("Luisa Medina"), 180_000.0);
    assert_eq!(targets.get("Diego Ceballos"), 47_000.0);
    assert_eq!(targets.get("Nobody Inparticular"), 0.0);
}

/// set() is last-write-wins.
#[test]
fn target_overrides_last_write_wins() {
    let mut targets = TeamLeaderTargets::baseline();
    targets.set("Luisa Medina", 200_000.0);
    targets.set("Luisa Medina", 250_000.0);
    assert_eq!(targets.get("Luisa Medina"), 250_000.0);

    targets.set("New Leader", 50_000.0);
    assert_eq!(targets.get("New Leader"), 50_000.0);
}

/// Exceeding 150% of target caps the tier at 1.5%.
#[test]
fn attainment_top_band() {
    let rows = team_rows(
        vec![rtn("Ana Torres", "Diego Ceballos", "2025-09-01", PayMethod::Normal, 100_000.0)],
        "Diego Ceballos",
    );
    let summary = attainment_commission("Diego Ceballos", &rows, 47_000.0);

    assert!(summary.attainment > 1.5);
    assert_eq!(summary.base_pct, 0.015);
    assert!((summary.commission_usd - 100_000.0 * 0.015).abs() < 1e-6);
}
