use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use league_stats::api::models::{MatchDto, TftMatchDto};
use league_stats::config::{DEFAULT_CHAMPION_TABLE, DEFAULT_QUEUE_TABLE};
use league_stats::error::NormalizeError;
use league_stats::lookup::LookupTables;
use league_stats::stats::league::MatchNormalizer;
use league_stats::stats::tft::{VariantNormalizer, VariantOptions};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn bundled_tables() -> Arc<LookupTables> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let tables = LookupTables::load(
        &root.join(DEFAULT_CHAMPION_TABLE),
        &root.join(DEFAULT_QUEUE_TABLE),
    )
    .expect("bundled tables should load");
    Arc::new(tables)
}

#[test]
fn bundled_tables_cover_common_ids() {
    let tables = bundled_tables();
    assert_eq!(tables.champion_name(62), Ok("MonkeyKing"));
    assert_eq!(tables.champion_name(103), Ok("Ahri"));
    assert_eq!(tables.queue_name(420), Ok("5v5 Ranked Solo games"));
    assert_eq!(tables.queue_name(0), Ok("Custom games"));
}

#[test]
fn league_fixture_normalizes() {
    let raw: MatchDto = serde_json::from_str(&read_fixture("league_match.json")).unwrap();
    let stats = MatchNormalizer::new(bundled_tables())
        .normalize(&raw, "puuid-target")
        .expect("target played this match");

    assert!(stats.win);
    assert_eq!((stats.kills, stats.deaths, stats.assists), (12, 3, 8));
    assert_eq!(stats.cs, 225);
    assert_eq!(stats.cs_per_min, 5.8);
    assert_eq!(stats.duration, "0:38:59");
    assert_eq!(stats.champion, "Ahri");
    assert_eq!(stats.damage, 31877);
    assert_eq!(stats.damage_per_min, 817.7);
    assert_eq!(stats.damage_mitigated, 9120);
    assert_eq!(stats.gold_per_min, 390.7);
    assert_eq!(stats.vision_score, 27);
    assert_eq!(stats.multikill, "PENTA KILL!!!");
    assert_eq!(stats.queue, "5v5 Ranked Solo games");
}

#[test]
fn league_fixture_serializes_flat_record() {
    let raw: MatchDto = serde_json::from_str(&read_fixture("league_match.json")).unwrap();
    let stats = MatchNormalizer::new(bundled_tables())
        .normalize(&raw, "puuid-enemy")
        .unwrap();
    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["win"], false);
    assert_eq!(json["champion"], "Zed");
    assert_eq!(json["multikill"], "Double Kill");
    assert_eq!(json["duration_seconds"], 2339);
}

#[test]
fn league_fixture_rejects_stranger() {
    let raw: MatchDto = serde_json::from_str(&read_fixture("league_match.json")).unwrap();
    let err = MatchNormalizer::new(bundled_tables())
        .normalize(&raw, "puuid-stranger")
        .unwrap_err();
    assert_eq!(err, NormalizeError::ParticipantNotFound("puuid-stranger".to_string()));
}

#[test]
fn tft_fixture_normalizes() {
    let raw: TftMatchDto = serde_json::from_str(&read_fixture("tft_match.json")).unwrap();
    let stats = VariantNormalizer::new(VariantOptions::default())
        .normalize(&raw, "puuid-target")
        .expect("target played this match");

    assert_eq!(stats.placement, 4);
    assert!(stats.win);
    assert_eq!(stats.level, 8);
    assert_eq!(stats.round, "5-5");
    assert_eq!(stats.time_elim, "0:33:59");

    let traits: Vec<(&str, u32)> = stats.traits.iter().map(|t| (t.name.as_str(), t.tier)).collect();
    assert_eq!(
        traits,
        vec![("Scrap", 4), ("Family", 3), ("Ambusher", 1), ("Bruiser", 0)]
    );

    let units: Vec<(&str, u32)> = stats.units.iter().map(|u| (u.name.as_str(), u.cost)).collect();
    assert_eq!(
        units,
        vec![("Viktor", 6), ("Ekko", 4), ("Trundle", 1), ("Jayce", 5), ("Powder", 2)]
    );
}

#[test]
fn tft_fixture_json_hides_sort_score() {
    let raw: TftMatchDto = serde_json::from_str(&read_fixture("tft_match.json")).unwrap();
    let stats = VariantNormalizer::new(VariantOptions::default())
        .normalize(&raw, "puuid-first")
        .unwrap();
    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["round"], "6-6");
    assert_eq!(json["units"][0]["name"], "Caitlyn");
    assert_eq!(json["units"][0]["cost"], 5);
    assert_eq!(json["units"][0]["star"], 2);
    assert!(json["units"][0].get("score").is_none());
}
