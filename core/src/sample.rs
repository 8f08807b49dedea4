//! Deterministic synthetic-ledger generation.
//!
//! Builds a plausible multi-month FTD/RTN ledger plus matching
//! withdrawals from curated name lists and a seeded RNG. Used by the
//! runner's `--generate` mode and handy for exercising a full pipeline
//! without production data.

use crate::ledger::{PayMethod, Transaction, TxnType, WithdrawalRecord};
use crate::rng::LedgerRng;
use crate::team_leader::BASELINE_TARGETS;
use chrono::NaiveDate;
use uuid::Uuid;

const AGENTS: &[&str] = &[
    "Ana Torres",
    "Bruno Salazar",
    "Camila Reyes",
    "Daniel Ortega",
    "Elena Vargas",
    "Fernando Ruiz",
    "Gabriela Mendez",
    "Hector Lozano",
    "Isabel Fuentes",
    "Javier Campos",
    "Karla Duarte",
    "Luis Paredes",
    "Mariana Soto",
    "Nicolas Rivas",
    "Olivia Cantu",
];

const COUNTRIES: &[&str] = &["Mexico", "Colombia", "Chile", "Peru"];

const AFFILIATES: &[&str] = &["Aff Media", "Lead Factory", "Prime Clicks", "Direct"];

const SOURCES: &[&str] = &["Organic", "Paid Social", "Referral"];

/// Generate `txns_per_month` transactions for each given `(year, month)`,
/// plus withdrawals for roughly a third of the active agent-months.
/// Deterministic: same seed and months, same ledger.
pub fn generate(
    seed: u64,
    months: &[(i32, u32)],
    txns_per_month: usize,
) -> (Vec<Transaction>, Vec<WithdrawalRecord>) {
    let mut rng = LedgerRng::new(seed);
    let mut transactions = Vec::new();
    let mut withdrawals = Vec::new();

    for &(year, month) in months {
        for _ in 0..txns_per_month {
            let agent = AGENTS[rng.next_u64_below(AGENTS.len() as u64) as usize];
            let team = BASELINE_TARGETS
                [rng.next_u64_below(BASELINE_TARGETS.len() as u64) as usize]
                .0;
            // Days 1..=28 are valid in every month.
            let day = 1 + rng.next_u64_below(28) as u32;
            let is_ftd = rng.chance(0.45);
            let amount = rng.pareto(if is_ftd { 80.0 } else { 250.0 }, 1.6).min(40_000.0);

            transactions.push(Transaction {
                id: Some(Uuid::new_v4().to_string()),
                agent: agent.to_string(),
                team: Some(team.to_string()),
                country: Some(
                    COUNTRIES[rng.next_u64_below(COUNTRIES.len() as u64) as usize].to_string(),
                ),
                affiliate: Some(
                    AFFILIATES[rng.next_u64_below(AFFILIATES.len() as u64) as usize].to_string(),
                ),
                source: Some(
                    SOURCES[rng.next_u64_below(SOURCES.len() as u64) as usize].to_string(),
                ),
                date: day_of(year, month, day),
                txn_type: if is_ftd { TxnType::Ftd } else { TxnType::Rtn },
                method: if rng.chance(0.12) {
                    PayMethod::Wallet
                } else {
                    PayMethod::Normal
                },
                amount_usd: round2(amount),
            });
        }

        for agent in AGENTS {
            if !rng.chance(0.35) {
                continue;
            }
            let day = 1 + rng.next_u64_below(28) as u32;
            withdrawals.push(WithdrawalRecord {
                agent: agent.to_string(),
                amount_usd: round2(rng.pareto(100.0, 1.8).min(10_000.0)),
                date: day_of(year, month, day),
                method: if rng.chance(0.2) {
                    PayMethod::Wallet
                } else {
                    PayMethod::Normal
                },
            });
        }
    }

    (transactions, withdrawals)
}

fn day_of(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
