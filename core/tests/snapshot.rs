//! Snapshot layout tests.
//!
//! Tests cover: full round-trip fidelity, the no-op-on-absent-block
//! policy, and hard failure on a present-but-incomplete attempt block.

use teamspawn_core::{
    attempt::TeamAttemptState,
    config::SearchConfig,
    error::SpawnError,
    rng::SearchRng,
    snapshot::{emit_team_state, parse_team_state},
    sync::NullSync,
    world::GridWorld,
};

fn populated_state(team: &str, seed: u64) -> TeamAttemptState {
    let mut world = GridWorld::flat(64);
    world.set_time(81_234);
    let mut state = TeamAttemptState::new(team.to_string(), SearchConfig::default_test());
    let mut rng = SearchRng::new(seed, 0);
    state.reset(&world, &mut rng, &mut NullSync).unwrap();
    state.advance(&world, &mut rng, &mut NullSync).unwrap();
    state
}

/// serialize → parse → load reproduces all four record fields.
#[test]
fn round_trip_preserves_all_fields() {
    let state = populated_state("round-trip", 0xD0C_0001);

    let json = emit_team_state(&state.to_doc()).unwrap();
    let doc = parse_team_state(&json).unwrap();

    let mut restored = TeamAttemptState::new("round-trip".into(), SearchConfig::default_test());
    restored.load_doc(&doc).unwrap();

    assert_eq!(restored.record(), state.record());
}

/// The emitted document uses the persisted field layout.
#[test]
fn emitted_document_uses_the_persisted_layout() {
    let state = populated_state("layout", 0xD0C_0002);
    let json = emit_team_state(&state.to_doc()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let attempt = &value["attempt"];
    assert!(attempt["spawnPos"]["x"].is_i64());
    assert!(attempt["spawnPos"]["y"].is_i64());
    assert!(attempt["spawnPos"]["z"].is_i64());
    assert!(attempt["uuid"].is_string());
    assert!(attempt["count"].is_i64());
    assert!(attempt["start"].is_i64());
}

/// A document without an attempt block leaves a pre-seeded record
/// untouched.
#[test]
fn absent_attempt_block_is_a_noop() {
    let mut state = populated_state("noop", 0xD0C_0003);
    let before = state.record().clone();

    let doc = parse_team_state("{}").unwrap();
    assert!(doc.attempt.is_none());

    state.load_doc(&doc).unwrap();
    assert_eq!(state.record(), &before, "absent block must not reset state");
}

/// A present attempt block missing one leaf is a parse failure, not a
/// partially populated record.
#[test]
fn missing_count_leaf_fails_to_parse() {
    let json = r#"{
        "attempt": {
            "spawnPos": { "x": 1, "y": 64, "z": -3 },
            "uuid": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "start": 81234
        }
    }"#;

    let err = parse_team_state(json).unwrap_err();
    assert!(
        matches!(err, SpawnError::Serialization(_)),
        "expected a serialization failure, got {err:?}"
    );
}

/// The nested position block enforces its leaves too.
#[test]
fn missing_position_leaf_fails_to_parse() {
    let json = r#"{
        "attempt": {
            "spawnPos": { "x": 1, "y": 64 },
            "uuid": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "count": 2,
            "start": 81234
        }
    }"#;

    let err = parse_team_state(json).unwrap_err();
    assert!(matches!(err, SpawnError::Serialization(_)));
}

/// A well-formed block with an unparseable id fails on load without
/// touching the record.
#[test]
fn bad_uuid_text_fails_on_load() {
    let mut state = populated_state("bad-uuid", 0xD0C_0004);
    let before = state.record().clone();

    let json = r#"{
        "attempt": {
            "spawnPos": { "x": 0, "y": 0, "z": 0 },
            "uuid": "not-a-uuid",
            "count": 0,
            "start": 0
        }
    }"#;
    let doc = parse_team_state(json).unwrap();

    let err = state.load_doc(&doc).unwrap_err();
    assert!(matches!(err, SpawnError::MalformedDoc { .. }));
    assert_eq!(state.record(), &before);
}

/// Attempt counts are non-negative by contract.
#[test]
fn negative_count_fails_on_load() {
    let mut state = TeamAttemptState::new("neg".into(), SearchConfig::default_test());

    let json = r#"{
        "attempt": {
            "spawnPos": { "x": 0, "y": 0, "z": 0 },
            "uuid": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "count": -1,
            "start": 0
        }
    }"#;
    let doc = parse_team_state(json).unwrap();

    let err = state.load_doc(&doc).unwrap_err();
    assert!(matches!(err, SpawnError::MalformedDoc { .. }));
}
