//! commission-core — the commission computation engine.
//!
//! Turns a ledger of FTD/RTN transactions plus a withdrawal ledger into
//! per-transaction net amounts, tier percentages, and commission values,
//! with team-leader attainment and weekly-volume bonuses on top.
//!
//! PIPELINE (fixed, documented, never reordered):
//!   1. Ingestion normalizes raw feeds (store / sample / caller-built).
//!   2. One canonical pass assigns monthly ordinals and withdrawal-adjusted
//!      net amounts over the full dataset.
//!   3. Every query evaluates a Scope fresh — commission percentages are a
//!      function of the scope's aggregate, never cached across scopes.

pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod parse;
pub mod resolver;
pub mod rng;
pub mod sample;
pub mod sequencer;
pub mod store;
pub mod team_leader;
pub mod tiers;
pub mod types;
pub mod weekly_bonus;
pub mod withdrawals;
