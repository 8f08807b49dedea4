//! Engine configuration — baseline targets and the default FX rate.
//!
//! Loaded from a JSON file when one is supplied; tests and the runner
//! fall back to the seeded baseline.

use crate::team_leader::{TeamLeaderTargets, BASELINE_TARGETS};
use crate::weekly_bonus::FxRate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Team-leader targets, USD. Runtime `set_target` calls override
    /// these per leader.
    pub targets: HashMap<String, f64>,
    /// MXN per USD used when the caller does not supply a rate.
    pub default_fx_mxn_per_usd: f64,
}

impl EngineConfig {
    /// Load from a JSON file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The seeded baseline configuration.
    pub fn baseline() -> Self {
        Self {
            targets: BASELINE_TARGETS
                .iter()
                .map(|(name, target)| (name.to_string(), *target))
                .collect(),
            default_fx_mxn_per_usd: FxRate::DEFAULT,
        }
    }

    pub fn targets(&self) -> TeamLeaderTargets {
        TeamLeaderTargets::from_map(self.targets.clone())
    }

    pub fn default_fx(&self) -> FxRate {
        FxRate::new(self.default_fx_mxn_per_usd)
    }
}
