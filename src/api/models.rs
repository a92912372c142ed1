use serde::Deserialize;
use std::collections::HashMap;

// Account V1 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
}

// Summoner V4 / TFT Summoner V1 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    #[serde(default)]
    pub id: String,
    pub puuid: String,
    #[serde(default)]
    pub summoner_level: i64,
}

// League V4 / TFT League V1 response (one entry per queue)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub league_points: i64,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
}

// Champion Mastery V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: i64,
    pub champion_level: i64,
    pub champion_points: i64,
    #[serde(default)]
    pub last_play_time: i64,
}

// Match V5 response
#[derive(Debug, Deserialize, Clone)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    #[serde(default)]
    pub match_id: String,
    pub participants: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub game_duration: i64,
    #[serde(default)]
    pub queue_id: i64,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantDto {
    pub puuid: String,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    pub champion_id: i64,
    pub champion_name: String,
    pub total_damage_dealt_to_champions: u64,
    pub damage_self_mitigated: u64,
    pub gold_earned: u64,
    pub vision_score: u32,
    pub largest_multi_kill: u32,
}

// TFT Match V1 response. Field names are snake_case upstream.
#[derive(Debug, Deserialize, Clone)]
pub struct TftMatchDto {
    pub metadata: TftMatchMetadata,
    pub info: TftMatchInfo,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TftMatchMetadata {
    #[serde(default)]
    pub match_id: String,
    pub participants: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TftMatchInfo {
    #[serde(default)]
    pub game_length: f64,
    #[serde(default)]
    pub queue_id: i64,
    pub participants: Vec<TftParticipantDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TftParticipantDto {
    pub puuid: String,
    pub placement: u32,
    pub level: u32,
    pub last_round: i64,
    pub time_eliminated: f64,
    pub win: Option<bool>,
    pub traits: Vec<TraitDto>,
    pub units: Vec<UnitDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TraitDto {
    pub name: String,
    pub num_units: u32,
    // inactive=0, bronze=1, silver=2, unique=3, gold=4, prismatic=5
    pub style: u32,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct UnitDto {
    pub character_id: String,
    pub rarity: i64,
    pub tier: u32,
}

// Data Dragon champion catalog (champion.json)
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub id: String,
    pub name: String,
    pub key: String,
}

// Queue catalog (queues.json)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QueueInfo {
    pub queue_id: i64,
    #[serde(default)]
    pub map: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
