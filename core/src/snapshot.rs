//! Snapshot serialization — per-team attempt state to/from JSON.
//!
//! The attempt block is present-or-entirely-absent: all four leaves are
//! required together, and a block missing any leaf fails at parse time.
//! An absent block means "keep the current record" — the load path never
//! sees a partially populated attempt.

use crate::attempt::AttemptRecord;
use crate::error::{SpawnError, SpawnResult};
use crate::pos::BlockPos;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamStateDoc {
    pub attempt: Option<AttemptDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptDoc {
    #[serde(rename = "spawnPos")]
    pub spawn_pos: BlockPos,
    /// Canonical textual form of the 128-bit attempt id.
    pub uuid: String,
    pub count: i32,
    pub start: i64,
}

impl AttemptDoc {
    pub fn from_record(record: &AttemptRecord) -> Self {
        Self {
            spawn_pos: record.spawn_pos,
            uuid: record.attempt_id.to_string(),
            count: record.attempt_count,
            start: record.attempt_start,
        }
    }

    pub fn to_record(&self) -> SpawnResult<AttemptRecord> {
        let attempt_id = Uuid::parse_str(&self.uuid).map_err(|e| SpawnError::MalformedDoc {
            reason: format!("bad uuid {:?}: {e}", self.uuid),
        })?;
        if self.count < 0 {
            return Err(SpawnError::MalformedDoc {
                reason: format!("negative attempt count {}", self.count),
            });
        }
        Ok(AttemptRecord {
            spawn_pos: self.spawn_pos,
            attempt_id,
            attempt_count: self.count,
            attempt_start: self.start,
        })
    }
}

/// Parse a persisted team document. Missing leaves inside a present
/// attempt block surface here as `Serialization` errors.
pub fn parse_team_state(json: &str) -> SpawnResult<TeamStateDoc> {
    Ok(serde_json::from_str(json)?)
}

pub fn emit_team_state(doc: &TeamStateDoc) -> SpawnResult<String> {
    Ok(serde_json::to_string(doc)?)
}
