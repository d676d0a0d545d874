//! spawn-runner: headless driver for teamspawn.
//!
//! Builds a seeded procedural demo world, runs reset + advance rounds
//! over a team roster, persists each team's attempt document, and prints
//! a summary.
//!
//! Usage:
//!   spawn-runner --seed 12345 --teams 4 --rounds 3 --db run.db
//!   spawn-runner --seed 12345 --config search.json

use anyhow::Result;
use teamspawn_core::{
    config::SearchConfig,
    error::SpawnError,
    pos::{BlockPos, ColumnPos},
    rng::RngBank,
    snapshot,
    store::SpawnStore,
    sync::LogSync,
    team::Team,
    types::WorldTime,
    world::{Biome, WorldQuery},
};
use std::env;

/// Hash-derived world: biome and ground height are pure functions of
/// (seed, column), so the full 2-million-block search square is queryable
/// without storing terrain. Roughly a fifth of all columns are ocean.
struct DemoWorld {
    seed: u64,
    time: WorldTime,
}

impl DemoWorld {
    fn new(seed: u64) -> Self {
        Self { seed, time: 0 }
    }

    fn tick(&mut self, ticks: WorldTime) {
        self.time += ticks;
    }

    fn column_hash(&self, column: ColumnPos) -> u64 {
        let mut h = self.seed
            ^ (column.x as i64 as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15)
            ^ (column.z as i64 as u64).wrapping_mul(0xc2b2_ae3d_27d4_eb4f);
        h ^= h >> 33;
        h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
        h ^= h >> 33;
        h
    }

    fn ground_height(&self, column: ColumnPos) -> i32 {
        40 + ((self.column_hash(column) >> 8) % 60) as i32
    }
}

impl WorldQuery for DemoWorld {
    fn biome(&self, column: ColumnPos) -> Biome {
        match self.column_hash(column) % 10 {
            0 | 1 => Biome::Ocean,
            2 | 3 | 4 => Biome::Forest,
            5 => Biome::Desert,
            6 => Biome::Tundra,
            _ => Biome::Plains,
        }
    }

    fn is_air(&self, pos: BlockPos) -> bool {
        pos.y >= self.ground_height(pos.column())
    }

    fn current_time(&self) -> WorldTime {
        self.time
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let teams = parse_arg(&args, "--teams", 4usize);
    let rounds = parse_arg(&args, "--rounds", 3u32);
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(":memory:");
    let config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => SearchConfig::load(&w[1])?,
        None => SearchConfig::default(),
    };

    println!("teamspawn — spawn-runner");
    println!("  started:    {}", chrono::Utc::now().to_rfc3339());
    println!("  seed:       {seed}");
    println!("  teams:      {teams}");
    println!("  rounds:     {rounds}");
    println!("  db:         {db}");
    println!(
        "  search:     radius={} max_height={} budget={}",
        config.search_radius, config.max_height, config.max_candidates
    );
    println!();

    let store = if db == ":memory:" {
        SpawnStore::in_memory()?
    } else {
        SpawnStore::open(db)?
    };
    store.migrate()?;

    let mut world = DemoWorld::new(seed);
    let bank = RngBank::new(seed);
    let mut sync = LogSync;

    let mut roster: Vec<Team> = (0..teams)
        .map(|i| {
            Team::new(
                format!("team-{i:02}"),
                format!("Team {}", i + 1),
                config.clone(),
            )
        })
        .collect();
    let mut rngs: Vec<_> = (0..teams).map(|i| bank.for_stream(i as u64)).collect();

    // Round 0 resets every team; later rounds advance. One in-game day
    // passes between rounds.
    for round in 0..rounds {
        for (team, rng) in roster.iter_mut().zip(rngs.iter_mut()) {
            let outcome = if round == 0 {
                team.reset(&world, rng, &mut sync)
            } else {
                team.advance(&world, rng, &mut sync)
            };
            match outcome {
                Ok(()) => team.save(&store)?,
                Err(SpawnError::SearchExhausted { attempts }) => {
                    log::warn!(
                        "team {} kept its previous attempt: search exhausted after {attempts}",
                        team.name()
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }
        world.tick(24_000);
    }

    print_summary(&store, &roster)?;
    Ok(())
}

fn print_summary(store: &SpawnStore, roster: &[Team]) -> Result<()> {
    println!();
    println!("=== RUN SUMMARY ===");
    for team in roster {
        let state = team.state();
        let pos = state.spawn_pos();
        println!(
            "  {:8} | attempt #{:<3} | id {} | spawn ({}, {}, {}) | start {}",
            team.name(),
            state.attempt_count(),
            state.attempt_id(),
            pos.x,
            pos.y,
            pos.z,
            state.attempt_start(),
        );
    }

    // Read back what was persisted, as a sanity check on the save path.
    let saved = store.list_teams()?;
    println!();
    println!("  persisted teams: {}", saved.len());
    for team_id in &saved {
        if let Some(json) = store.load_team(team_id)? {
            let doc = snapshot::parse_team_state(&json)?;
            let count = doc.attempt.map(|a| a.count).unwrap_or(0);
            println!("    {team_id}: attempt #{count}");
        }
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
