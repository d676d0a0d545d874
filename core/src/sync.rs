//! The replication port.
//!
//! After every successful advance/reset the attempt manager pushes the
//! full current record through this trait. The wire format and transport
//! belong to the host; the library only defines the trigger point.

use crate::attempt::AttemptRecord;
use crate::types::TeamId;

pub trait SyncSink {
    /// Called with the freshly installed record, after replacement.
    fn sync(&mut self, team_id: &TeamId, record: &AttemptRecord);
}

/// Log-only sink for headless runs.
pub struct LogSync;

impl SyncSink for LogSync {
    fn sync(&mut self, team_id: &TeamId, record: &AttemptRecord) {
        log::info!(
            "sync team={team_id} attempt={} count={} pos=({}, {}, {})",
            record.attempt_id,
            record.attempt_count,
            record.spawn_pos.x,
            record.spawn_pos.y,
            record.spawn_pos.z,
        );
    }
}

/// Discarding sink for callers that do not replicate.
pub struct NullSync;

impl SyncSink for NullSync {
    fn sync(&mut self, _team_id: &TeamId, _record: &AttemptRecord) {}
}
