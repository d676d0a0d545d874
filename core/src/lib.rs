//! teamspawn-core — constrained spawn resolution and per-team attempt
//! tracking for a persistent, procedurally generated world.
//!
//! Two cooperating pieces:
//!   - `resolver`: randomized search for a spawn position that avoids
//!     ocean columns and stands on solid ground, under a bounded
//!     candidate budget.
//!   - `attempt`: the versioned per-team attempt record (position, id,
//!     count, start time), replaced atomically on advance/reset and
//!     pushed through the sync port.
//!
//! The world itself is a black box behind `world::WorldQuery`; all
//! randomness flows through `rng::RandomSource`.

pub mod attempt;
pub mod config;
pub mod error;
pub mod pos;
pub mod resolver;
pub mod rng;
pub mod snapshot;
pub mod store;
pub mod sync;
pub mod team;
pub mod types;
pub mod world;
