//! The spawn resolver — constrained random search for a valid spawn.
//!
//! A candidate survives two independent rejections: its column must not
//! be ocean, and the column must hold a position in the vertical band
//! whose block beneath is solid. Both rejections retry with a fresh
//! candidate; one budget bounds them jointly, so a degenerate world
//! (all ocean, or no ground anywhere in range) fails with
//! `SearchExhausted` instead of stalling the caller.

use crate::config::SearchConfig;
use crate::error::{SpawnError, SpawnResult};
use crate::pos::BlockPos;
use crate::rng::RandomSource;
use crate::world::WorldQuery;

/// Resolve a spawn position.
///
/// Draw order per candidate is x, then y, then z: x and z uniform in
/// `[-search_radius, +search_radius]`, y uniform in `[0, max_height]`.
/// The y draw seeds the ground scan — the whole band is searched around
/// it, closest offset first.
pub fn resolve_spawn<W: WorldQuery + ?Sized>(
    world: &W,
    config: &SearchConfig,
    rng: &mut dyn RandomSource,
) -> SpawnResult<BlockPos> {
    config.validate()?;

    let mut attempts = 0u32;
    loop {
        if attempts >= config.max_candidates {
            log::warn!(
                "spawn search exhausted: no valid position in {attempts} candidates \
                 (radius={}, max_height={})",
                config.search_radius,
                config.max_height,
            );
            return Err(SpawnError::SearchExhausted { attempts });
        }
        attempts += 1;

        let candidate = random_block_pos(config, rng);

        if world.biome(candidate.column()).is_ocean() {
            log::debug!("avoiding ocean at column ({}, {})", candidate.x, candidate.z);
            continue;
        }

        log::debug!(
            "finding ground at column ({}, {}) from y={}",
            candidate.x,
            candidate.z,
            candidate.y,
        );
        match closest_ground(world, candidate, config.max_height) {
            Some(pos) => {
                log::info!(
                    "resolved spawn ({}, {}, {}) after {attempts} candidate(s)",
                    pos.x,
                    pos.y,
                    pos.z,
                );
                return Ok(pos);
            }
            None => {
                log::debug!("no ground in column ({}, {})", candidate.x, candidate.z);
            }
        }
    }
}

fn random_block_pos(config: &SearchConfig, rng: &mut dyn RandomSource) -> BlockPos {
    BlockPos::new(
        rng.next_i32_in(-config.search_radius, config.search_radius),
        rng.next_i32_in(0, config.max_height),
        rng.next_i32_in(-config.search_radius, config.search_radius),
    )
}

/// Closest position to `from` (within the column, band `[0, max_height]`)
/// whose block directly beneath is not air. Horizontal range is zero, so
/// "closest" is the nearest y to the seed; on an exact tie the lower
/// offset wins.
fn closest_ground<W: WorldQuery + ?Sized>(
    world: &W,
    from: BlockPos,
    max_height: i32,
) -> Option<BlockPos> {
    let seed_y = from.y.clamp(0, max_height);
    for offset in 0..=max_height {
        let below = seed_y - offset;
        if below >= 0 {
            let pos = from.with_y(below);
            if !world.is_air(pos.down()) {
                return Some(pos);
            }
        }
        let above = seed_y + offset;
        if offset > 0 && above <= max_height {
            let pos = from.with_y(above);
            if !world.is_air(pos.down()) {
                return Some(pos);
            }
        }
    }
    None
}
