//! Shared primitive types used across the crate.

/// World time in ticks, as reported by the world-query interface.
pub type WorldTime = i64;

/// A stable, unique identifier for a team.
pub type TeamId = String;
