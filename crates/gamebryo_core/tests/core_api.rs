mod common;

use std::fs;

use gamebryo_core::core_api::{CoreErrorCode, Engine, EngineOptions, FormatVariant, Game};
use gamebryo_core::decode;

use common::{fallout3_save, fallout4_save, oblivion_save, skyrim_save};

#[test]
fn engine_dispatches_on_signature() {
    let engine = Engine::new();
    let cases = [
        (oblivion_save(), Game::Oblivion),
        (skyrim_save(), Game::Skyrim),
        (fallout3_save(false), Game::Fallout3),
        (fallout3_save(true), Game::FalloutNewVegas),
        (fallout4_save(), Game::Fallout4),
    ];

    for (bytes, game) in cases {
        let record = engine.open_bytes(&bytes).expect("fixture should decode");
        assert_eq!(record.game(), game);
    }
}

#[test]
fn unknown_signature_is_unrecognized() {
    let err = Engine::new()
        .open_bytes(b"TES3SAVEGAME and then some")
        .expect_err("morrowind is not supported");
    assert_eq!(err.code(), CoreErrorCode::FormatUnrecognized);
}

#[test]
fn empty_input_is_unrecognized() {
    let err = Engine::new()
        .open_bytes(b"")
        .expect_err("empty input should fail");
    assert_eq!(err.code(), CoreErrorCode::FormatUnrecognized);
}

#[test]
fn signature_only_is_end_of_input() {
    for variant in FormatVariant::ALL {
        let err = Engine::new()
            .open_bytes(variant.signature())
            .expect_err("header missing");
        assert_eq!(err.code(), CoreErrorCode::UnexpectedEndOfInput, "{variant:?}");
    }
}

#[test]
fn input_limit_rejects_large_files() {
    let bytes = skyrim_save();
    let engine = Engine::with_options(EngineOptions {
        max_input_len: Some(bytes.len() as u64 - 1),
    });
    let err = engine.open_bytes(&bytes).expect_err("over the limit");
    assert_eq!(err.code(), CoreErrorCode::InputTooLarge);

    let engine = Engine::with_options(EngineOptions {
        max_input_len: Some(bytes.len() as u64),
    });
    engine.open_bytes(&bytes).expect("exactly at the limit");
}

#[test]
fn decode_reads_from_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("quicksave.fos");
    fs::write(&path, fallout4_save()).expect("write fixture");

    let record = decode(&path).expect("fallout 4 save should decode from disk");
    assert_eq!(record.player_name(), "Nate");
    assert_eq!(record.plugins().len(), 2);
}

#[test]
fn decode_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = decode(dir.path().join("missing.ess")).expect_err("no such file");
    assert_eq!(err.code(), CoreErrorCode::Io);
}

#[test]
fn records_are_independent_across_decodes() {
    let engine = Engine::new();
    let first = engine.open_bytes(oblivion_save()).expect("oblivion");
    let second = engine.open_bytes(skyrim_save()).expect("skyrim");
    let again = engine.open_bytes(oblivion_save()).expect("oblivion again");

    assert_eq!(first, again);
    assert_ne!(first, second);
}

#[test]
fn record_serializes_without_pixels() {
    let record = Engine::new().open_bytes(skyrim_save()).expect("skyrim");
    let json = serde_json::to_value(&record).expect("record should serialize");

    assert_eq!(json["game"], "Skyrim");
    assert_eq!(json["save_slot_number"], 42);
    assert_eq!(json["player_name"], "Dovahkiin");
    assert_eq!(json["player_location"], "Whiterun");
    assert_eq!(json["player_level"], 81);
    assert_eq!(json["screenshot"]["width"], 3);
    assert!(json["screenshot"].get("pixels").is_none());
    assert_eq!(json["plugins"][2], "Dawnguard.esm");
}
