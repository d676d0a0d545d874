//! A team and its attempt state, by composition.
//!
//! The team owns its state for its whole lifetime — there is no ambient
//! registry to look it up through. Callers hold the `Team` and pass the
//! world, randomness, and sync collaborators explicitly.

use crate::attempt::TeamAttemptState;
use crate::config::SearchConfig;
use crate::error::SpawnResult;
use crate::rng::RandomSource;
use crate::snapshot;
use crate::store::SpawnStore;
use crate::sync::SyncSink;
use crate::types::TeamId;
use crate::world::WorldQuery;

pub struct Team {
    id: TeamId,
    name: String,
    state: TeamAttemptState,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, config: SearchConfig) -> Self {
        let state = TeamAttemptState::new(id.clone(), config);
        Self {
            id,
            name: name.into(),
            state,
        }
    }

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &TeamAttemptState {
        &self.state
    }

    pub fn advance<W: WorldQuery, S: SyncSink>(
        &mut self,
        world: &W,
        rng: &mut dyn RandomSource,
        sync: &mut S,
    ) -> SpawnResult<()> {
        log::info!("generating spawnpoint for team {}", self.name);
        self.state.advance(world, rng, sync)
    }

    pub fn reset<W: WorldQuery, S: SyncSink>(
        &mut self,
        world: &W,
        rng: &mut dyn RandomSource,
        sync: &mut S,
    ) -> SpawnResult<()> {
        log::info!("resetting attempts for team {}", self.name);
        self.state.reset(world, rng, sync)
    }

    /// Persist the current record.
    pub fn save(&self, store: &SpawnStore) -> SpawnResult<()> {
        let json = snapshot::emit_team_state(&self.state.to_doc())?;
        store.save_team(&self.id, &json, self.state.attempt_start())
    }

    /// Load the persisted record if one exists; a team that was never
    /// saved keeps its default state.
    pub fn load(&mut self, store: &SpawnStore) -> SpawnResult<()> {
        if let Some(json) = store.load_team(&self.id)? {
            let doc = snapshot::parse_team_state(&json)?;
            self.state.load_doc(&doc)?;
        }
        Ok(())
    }
}
