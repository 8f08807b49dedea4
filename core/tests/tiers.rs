//! Tier table boundary tests.
//!
//! The FTD and RTN tables use inclusive upper bounds; the team-leader
//! table uses strict ones. Every boundary value is pinned here because
//! off-by-one at a tier edge is real money.

use commission_core::tiers::{ftd_tier, rtn_tier, team_leader_tier};

/// Every FTD band edge maps exactly as scheduled.
#[test]
fn ftd_tier_boundaries() {
    assert_eq!(ftd_tier(0), 0.0, "ordinal 0 is outside the domain");
    assert_eq!(ftd_tier(1), 0.10);
    assert_eq!(ftd_tier(3), 0.10, "ordinal 3 still in the first band");
    assert_eq!(ftd_tier(4), 0.17, "ordinal 4 opens the second band");
    assert_eq!(ftd_tier(7), 0.17);
    assert_eq!(ftd_tier(8), 0.19);
    assert_eq!(ftd_tier(12), 0.19);
    assert_eq!(ftd_tier(13), 0.22);
    assert_eq!(ftd_tier(17), 0.22);
    assert_eq!(ftd_tier(18), 0.25);
    assert_eq!(ftd_tier(21), 0.25);
    assert_eq!(ftd_tier(22), 0.30, "top band is open-ended");
    assert_eq!(ftd_tier(100), 0.30);
}

/// Every RTN band edge maps exactly as scheduled, including the
/// just-over-the-edge cases.
#[test]
fn rtn_tier_boundaries() {
    assert_eq!(rtn_tier(0.0), 0.05);
    assert_eq!(rtn_tier(25_000.0), 0.05, "25 000 is inclusive");
    assert_eq!(rtn_tier(25_000.01), 0.06, "a cent over moves the tier");
    assert_eq!(rtn_tier(50_000.0), 0.06);
    assert_eq!(rtn_tier(75_000.0), 0.075);
    assert_eq!(rtn_tier(101_000.0), 0.09);
    assert_eq!(rtn_tier(151_000.0), 0.10);
    assert_eq!(rtn_tier(151_000.01), 0.12);
    assert_eq!(rtn_tier(1_000_000.0), 0.12);
}

/// The attainment table uses strict upper bounds: the boundary value
/// belongs to the NEXT band.
#[test]
fn team_leader_tier_strict_boundaries() {
    assert_eq!(team_leader_tier(0.0), 0.0);
    assert_eq!(team_leader_tier(0.74), 0.0);
    assert_eq!(team_leader_tier(0.75), 0.008, "0.75 is already in the paying band");
    assert_eq!(team_leader_tier(0.99), 0.008);
    assert_eq!(team_leader_tier(1.0), 0.01);
    assert_eq!(team_leader_tier(1.10), 0.011);
    assert_eq!(team_leader_tier(1.20), 0.012);
    assert_eq!(team_leader_tier(1.30), 0.013);
    assert_eq!(team_leader_tier(1.40), 0.014);
    assert_eq!(team_leader_tier(1.50), 0.015);
    assert_eq!(team_leader_tier(3.0), 0.015);
}

/// Both deposit tiers are non-decreasing step functions.
#[test]
fn tiers_are_monotonic() {
    let mut last = 0.0;
    for ordinal in 1..100u32 {
        let pct = ftd_tier(ordinal);
        assert!(pct >= last, "ftd_tier decreased at ordinal {ordinal}");
        last = pct;
    }

    let mut last = 0.0;
    for step in 0..2_000 {
        let net = step as f64 * 100.0;
        let pct = rtn_tier(net);
        assert!(pct >= last, "rtn_tier decreased at net {net}");
        last = pct;
    }

    let mut last = 0.0;
    for step in 0..300 {
        let ratio = step as f64 * 0.01;
        let pct = team_leader_tier(ratio);
        assert!(pct >= last, "team_leader_tier decreased at ratio {ratio}");
        last = pct;
    }
}
