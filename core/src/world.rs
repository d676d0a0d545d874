//! The world-query port.
//!
//! RULE: The resolver and the attempt manager read the world ONLY through
//! this trait. Terrain generation, chunk storage, and biome assignment
//! belong to the host — the library never writes to the world.

use crate::pos::{BlockPos, ColumnPos};
use crate::types::WorldTime;
use std::collections::HashMap;

/// Terrain/region classification for a column. The search rejects ocean
/// columns; every other classification is acceptable spawn ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Biome {
    Ocean,
    Plains,
    Forest,
    Desert,
    Tundra,
}

impl Biome {
    pub fn is_ocean(&self) -> bool {
        matches!(self, Biome::Ocean)
    }
}

/// Read-only view of the world.
pub trait WorldQuery {
    /// Biome classification of a vertical column.
    fn biome(&self, column: ColumnPos) -> Biome;

    /// Whether the block cell at `pos` is air.
    fn is_air(&self, pos: BlockPos) -> bool;

    /// Current world time in ticks.
    fn current_time(&self) -> WorldTime;
}

/// In-memory reference world: per-column biome and ground height over
/// defaults. Used by the test suite and the headless runner — not a
/// terrain engine.
///
/// A column with ground height `g` has solid blocks strictly below `g`
/// and air at `g` and above, so `g` is the standing height. A column
/// with no ground is bottomless (all air).
#[derive(Debug, Clone)]
pub struct GridWorld {
    default_biome: Biome,
    default_ground: Option<i32>,
    biomes: HashMap<ColumnPos, Biome>,
    ground: HashMap<ColumnPos, i32>,
    time: WorldTime,
}

impl GridWorld {
    /// An empty, bottomless world of the given default biome.
    pub fn new(default_biome: Biome) -> Self {
        Self {
            default_biome,
            default_ground: None,
            biomes: HashMap::new(),
            ground: HashMap::new(),
            time: 0,
        }
    }

    /// Plains everywhere with uniform standing height `ground`.
    pub fn flat(ground: i32) -> Self {
        Self {
            default_biome: Biome::Plains,
            default_ground: Some(ground),
            biomes: HashMap::new(),
            ground: HashMap::new(),
            time: 0,
        }
    }

    pub fn set_biome(&mut self, column: ColumnPos, biome: Biome) {
        self.biomes.insert(column, biome);
    }

    pub fn set_ground(&mut self, column: ColumnPos, height: i32) {
        self.ground.insert(column, height);
    }

    fn ground_height(&self, column: ColumnPos) -> Option<i32> {
        self.ground.get(&column).copied().or(self.default_ground)
    }

    pub fn set_time(&mut self, time: WorldTime) {
        self.time = time;
    }

    pub fn advance_time(&mut self, ticks: WorldTime) {
        self.time += ticks;
    }
}

impl WorldQuery for GridWorld {
    fn biome(&self, column: ColumnPos) -> Biome {
        self.biomes.get(&column).copied().unwrap_or(self.default_biome)
    }

    fn is_air(&self, pos: BlockPos) -> bool {
        match self.ground_height(pos.column()) {
            Some(g) => pos.y >= g,
            None => true,
        }
    }

    fn current_time(&self) -> WorldTime {
        self.time
    }
}
