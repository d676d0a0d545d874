//! SQLite persistence layer.
//!
//! RULE: Only store.rs talks to the database. Callers hand in the
//! serialized document and get it back verbatim — parsing lives in
//! snapshot.rs, never here.

use crate::error::SpawnResult;
use crate::types::WorldTime;
use rusqlite::{params, Connection, OptionalExtension};

pub struct SpawnStore {
    conn: Connection,
}

impl SpawnStore {
    /// Open (or create) the database at `path`.
    pub fn open(path: &str) -> SpawnResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode: better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> SpawnResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> SpawnResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_foundation.sql"))?;
        Ok(())
    }

    /// Upsert a team's serialized attempt document. The row is replaced
    /// wholesale — no history is kept.
    pub fn save_team(
        &self,
        team_id: &str,
        state_json: &str,
        saved_at: WorldTime,
    ) -> SpawnResult<()> {
        self.conn.execute(
            "INSERT INTO team_attempt (team_id, state_json, saved_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(team_id) DO UPDATE
             SET state_json = excluded.state_json, saved_at = excluded.saved_at",
            params![team_id, state_json, saved_at],
        )?;
        Ok(())
    }

    /// The team's serialized document, or None if it was never saved.
    pub fn load_team(&self, team_id: &str) -> SpawnResult<Option<String>> {
        let row = self
            .conn
            .query_row(
                "SELECT state_json FROM team_attempt WHERE team_id = ?1",
                params![team_id],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(row)
    }

    pub fn list_teams(&self) -> SpawnResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT team_id FROM team_attempt ORDER BY team_id ASC")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids)
    }
}
