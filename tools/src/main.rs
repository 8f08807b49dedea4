//! commission-runner: headless runner for the commission engine.
//!
//! Usage:
//!   commission-runner --db ledger.db --start 2025-09-01 --end 2025-11-30
//!   commission-runner --generate 400 --seed 42 --team-leader "Luisa Medina"
//!   commission-runner --db ledger.db --rtn-agent "Ana Torres,Luis Paredes" --json

use anyhow::Result;
use chrono::NaiveDate;
use commission_core::{
    config::EngineConfig, engine::CommissionEngine, resolver::Scope, sample, store::LedgerStore,
    weekly_bonus::FxRate,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let db = str_arg(&args, "--db");
    let generate = parse_arg(&args, "--generate", 0usize);
    let seed = parse_arg(&args, "--seed", 42u64);
    let json_out = args.iter().any(|a| a == "--json");

    let config = match str_arg(&args, "--config") {
        Some(path) => EngineConfig::load(&path)?,
        None => EngineConfig::baseline(),
    };
    let fx = FxRate::new(parse_arg(&args, "--fx", config.default_fx_mxn_per_usd));

    let (transactions, withdrawals) = if generate > 0 {
        let months = [(2025, 9), (2025, 10), (2025, 11)];
        log::info!("generating sample ledger: seed {seed}, {generate} txns/month");
        sample::generate(seed, &months, generate)
    } else if let Some(db) = &db {
        let store = LedgerStore::open(db)?;
        store.migrate()?;
        (store.load_transactions()?, store.load_withdrawals()?)
    } else {
        anyhow::bail!("either --db <path> or --generate <txns-per-month> is required");
    };

    let mut engine = CommissionEngine::build(transactions, &withdrawals, config.targets());

    let mut scope = Scope::all();
    if let Some(raw) = str_arg(&args, "--start") {
        scope.start = Some(iso_date(&raw)?);
    }
    if let Some(raw) = str_arg(&args, "--end") {
        scope.end = Some(iso_date(&raw)?);
    }
    if let Some(leader) = str_arg(&args, "--team-leader") {
        scope.team_leader = Some(leader);
    }
    scope.ftd_agents = list_arg(&args, "--ftd-agent");
    scope.rtn_agents = list_arg(&args, "--rtn-agent");

    if let Some(raw) = str_arg(&args, "--target") {
        let target: f64 = raw.parse()?;
        match &scope.team_leader {
            Some(leader) => engine.set_target(leader, target),
            None => anyhow::bail!("--target requires --team-leader"),
        }
    }

    let report = engine.evaluate(&scope, fx);

    if let Some(db) = &db {
        let store = LedgerStore::open(db)?;
        store.migrate()?;
        store.save_report(&report.rows)?;
        log::info!("report persisted: {} rows", report.rows.len());
    }

    if json_out {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&report, fx);
    Ok(())
}

fn print_summary(report: &commission_core::engine::EvaluationReport, fx: FxRate) {
    println!("=== COMMISSION SUMMARY ===");
    if report.rows.is_empty() {
        println!("  (no data in scope)");
        return;
    }
    let s = &report.summary;
    println!("  rows in scope:    {}", report.rows.len());
    println!("  commission pct:   {:.2}%", s.commission_pct * 100.0);
    println!("  net volume USD:   {:.2}", s.net_volume_usd);
    println!("  weekly bonus USD: {:.2}  (fx {:.2})", s.weekly_bonus_usd, fx.get());
    println!("  commission USD:   {:.2}", s.commission_usd);
    println!("  FTD count:        {}", s.ftd_count);
    println!(
        "  net split:        normal {:.2} / wallet {:.2}",
        s.normal_net_usd, s.wallet_net_usd
    );

    if let Some(tl) = &report.team_leader {
        println!();
        println!("=== TEAM LEADER ===");
        println!("  leader:       {}", tl.leader);
        println!("  target USD:   {:.0}", tl.target_usd);
        println!("  attainment:   {:.1}%", tl.attainment * 100.0);
        println!("  base pct:     {:.2}%", tl.base_pct * 100.0);
        println!("  commission:   {:.2} USD", tl.commission_usd);
    }

    println!();
    println!("=== COMMISSION BY AGENT ===");
    for (agent, commission) in &report.by_agent {
        println!("  {agent:<24} {commission:>12.2}");
    }
}

fn iso_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("bad date '{raw}': {e}"))
}

fn str_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn list_arg(args: &[String], flag: &str) -> Vec<String> {
    str_arg(args, flag)
        .map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
