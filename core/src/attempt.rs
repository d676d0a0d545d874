//! The attempt record and its per-team lifecycle.
//!
//! RULE: the record is an immutable value, replaced wholesale. Nothing
//! mutates a field of a live record — advance/reset build a complete new
//! record and swap it in, so a reader always sees one consistent attempt.

use crate::config::SearchConfig;
use crate::error::SpawnResult;
use crate::pos::BlockPos;
use crate::resolver::resolve_spawn;
use crate::rng::RandomSource;
use crate::snapshot::{AttemptDoc, TeamStateDoc};
use crate::sync::SyncSink;
use crate::types::{TeamId, WorldTime};
use crate::world::WorldQuery;
use uuid::Uuid;

/// One resolved spawn location plus its identifying metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    pub spawn_pos: BlockPos,
    /// Correlates this attempt across systems (death/respawn tracking);
    /// never reused across attempts.
    pub attempt_id: Uuid,
    /// 0 after a reset; +1 per advance.
    pub attempt_count: i32,
    /// World time captured when the record was created.
    pub attempt_start: WorldTime,
}

impl Default for AttemptRecord {
    fn default() -> Self {
        Self {
            spawn_pos: BlockPos::ORIGIN,
            attempt_id: Uuid::nil(),
            attempt_count: 0,
            attempt_start: 0,
        }
    }
}

/// Owns the single live attempt record for one team.
pub struct TeamAttemptState {
    team_id: TeamId,
    config: SearchConfig,
    attempt: AttemptRecord,
}

impl TeamAttemptState {
    pub fn new(team_id: TeamId, config: SearchConfig) -> Self {
        Self {
            team_id,
            config,
            attempt: AttemptRecord::default(),
        }
    }

    /// Resolve a fresh spawn and install attempt `count + 1`.
    /// On `SearchExhausted` the previous record stays live and no sync
    /// fires.
    pub fn advance<W: WorldQuery, S: SyncSink>(
        &mut self,
        world: &W,
        rng: &mut dyn RandomSource,
        sync: &mut S,
    ) -> SpawnResult<()> {
        self.set_attempt(world, rng, sync, self.attempt.attempt_count + 1)
    }

    /// Resolve a fresh spawn and restart the sequence at attempt 0.
    pub fn reset<W: WorldQuery, S: SyncSink>(
        &mut self,
        world: &W,
        rng: &mut dyn RandomSource,
        sync: &mut S,
    ) -> SpawnResult<()> {
        self.set_attempt(world, rng, sync, 0)
    }

    fn set_attempt<W: WorldQuery, S: SyncSink>(
        &mut self,
        world: &W,
        rng: &mut dyn RandomSource,
        sync: &mut S,
        count: i32,
    ) -> SpawnResult<()> {
        let spawn_pos = resolve_spawn(world, &self.config, rng)?;

        self.attempt = AttemptRecord {
            spawn_pos,
            attempt_id: fresh_attempt_id(rng),
            attempt_count: count,
            attempt_start: world.current_time(),
        };

        sync.sync(&self.team_id, &self.attempt);
        Ok(())
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn record(&self) -> &AttemptRecord {
        &self.attempt
    }

    pub fn spawn_pos(&self) -> BlockPos {
        self.attempt.spawn_pos
    }

    pub fn attempt_id(&self) -> Uuid {
        self.attempt.attempt_id
    }

    pub fn attempt_count(&self) -> i32 {
        self.attempt.attempt_count
    }

    pub fn attempt_start(&self) -> WorldTime {
        self.attempt.attempt_start
    }

    /// Serialize the current record. Always succeeds.
    pub fn to_doc(&self) -> TeamStateDoc {
        TeamStateDoc {
            attempt: Some(AttemptDoc::from_record(&self.attempt)),
        }
    }

    /// Replace the record from a persisted document. A document without
    /// an attempt block leaves the current record untouched — absent
    /// state is not an error. Malformed content fails without touching
    /// the record.
    pub fn load_doc(&mut self, doc: &TeamStateDoc) -> SpawnResult<()> {
        if let Some(attempt) = &doc.attempt {
            self.attempt = attempt.to_record()?;
        }
        Ok(())
    }
}

/// Build a fresh 128-bit attempt id from the injected source, keeping
/// seeded runs reproducible end to end.
fn fresh_attempt_id(rng: &mut dyn RandomSource) -> Uuid {
    Uuid::from_u64_pair(rng.next_u64(), rng.next_u64())
}
