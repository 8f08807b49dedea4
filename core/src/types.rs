//! Shared primitive types used across the entire engine.

/// A sales agent's display name, normalized to Title Case at ingestion.
pub type AgentId = String;

/// A team leader's display name (the `team` column of the feed).
pub type TeamName = String;
