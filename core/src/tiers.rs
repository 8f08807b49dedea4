//! Progressive tier tables.
//!
//! One generic staircase lookup over an ordered band list, parameterized
//! per table, instead of three near-duplicate cascades. Bands are ordered
//! and non-overlapping with a final open-ended bucket, so the first hit
//! wins.
//!
//! Boundary semantics differ between tables and matter at the edges:
//!   - FTD and RTN tables use INCLUSIVE upper bounds
//!     (ordinal 3 → 10%, ordinal 4 → 17%; net 25 000 → 5%, 25 000.01 → 6%).
//!   - The team-leader table uses STRICT upper bounds
//!     (attainment 0.75 → 0.8%, attainment 1.0 → 1.0%).

/// `(upper_bound, percentage)` bands, ordered ascending. The last band's
/// bound is `f64::INFINITY`.
pub struct TierTable {
    bands: &'static [(f64, f64)],
    strict_upper: bool,
}

impl TierTable {
    /// Resolve a value to its band's percentage.
    pub fn resolve(&self, value: f64) -> f64 {
        for &(upper, pct) in self.bands {
            let hit = if self.strict_upper {
                value < upper
            } else {
                value <= upper
            };
            if hit {
                return pct;
            }
        }
        0.0
    }
}

/// FTD commission by per-agent monthly ordinal.
pub static FTD_TIERS: TierTable = TierTable {
    bands: &[
        (3.0, 0.10),
        (7.0, 0.17),
        (12.0, 0.19),
        (17.0, 0.22),
        (21.0, 0.25),
        (f64::INFINITY, 0.30),
    ],
    strict_upper: false,
};

/// RTN commission by aggregate monthly/scope net volume.
pub static RTN_TIERS: TierTable = TierTable {
    bands: &[
        (25_000.0, 0.05),
        (50_000.0, 0.06),
        (75_000.0, 0.075),
        (101_000.0, 0.09),
        (151_000.0, 0.10),
        (f64::INFINITY, 0.12),
    ],
    strict_upper: false,
};

/// Team-leader commission by attainment ratio (net volume / target).
pub static TEAM_LEADER_TIERS: TierTable = TierTable {
    bands: &[
        (0.75, 0.0),
        (1.0, 0.008),
        (1.10, 0.01),
        (1.20, 0.011),
        (1.30, 0.012),
        (1.40, 0.013),
        (1.50, 0.014),
        (f64::INFINITY, 0.015),
    ],
    strict_upper: true,
};

/// Percentage for an FTD transaction's monthly ordinal. Ordinal 0 is
/// outside the domain and earns nothing.
pub fn ftd_tier(ordinal: u32) -> f64 {
    if ordinal < 1 {
        return 0.0;
    }
    FTD_TIERS.resolve(ordinal as f64)
}

/// Percentage for an aggregate RTN net total.
pub fn rtn_tier(net_usd: f64) -> f64 {
    RTN_TIERS.resolve(net_usd)
}

/// Percentage for a team leader's attainment ratio.
pub fn team_leader_tier(attainment: f64) -> f64 {
    TEAM_LEADER_TIERS.resolve(attainment)
}
