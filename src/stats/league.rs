use crate::api::models::{MatchDto, ParticipantDto};
use crate::error::NormalizeError;
use crate::lookup::LookupTables;
use serde::Serialize;
use std::sync::Arc;

use super::format::{format_duration, per_minute};

/// One player's view of a finished League match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedStats {
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub cs: u64,
    pub cs_per_min: f64,
    pub duration_seconds: i64,
    pub duration: String,
    pub champion: String,
    pub damage: u64,
    pub damage_per_min: f64,
    pub damage_mitigated: u64,
    pub gold: u64,
    pub gold_per_min: f64,
    pub vision_score: u32,
    pub largest_multikill: u32,
    pub multikill: &'static str,
    pub queue: String,
}

/// Label for a participant's largest multikill.
///
/// Values outside 1..=5 (0 when the player got no kills) fall back to
/// "Single Kill", which is what the service has always returned.
pub fn multikill_label(largest_multikill: u32) -> &'static str {
    match largest_multikill {
        2 => "Double Kill",
        3 => "Triple Kill!",
        4 => "Quadra Kill!!",
        5 => "PENTA KILL!!!",
        _ => "Single Kill",
    }
}

pub struct MatchNormalizer {
    lookups: Arc<LookupTables>,
}

impl MatchNormalizer {
    pub fn new(lookups: Arc<LookupTables>) -> Self {
        MatchNormalizer { lookups }
    }

    pub fn normalize(&self, raw: &MatchDto, puuid: &str) -> Result<NormalizedStats, NormalizeError> {
        let player = find_participant(raw, puuid)?;

        let duration_seconds = raw.info.game_duration;
        if duration_seconds <= 0 {
            return Err(NormalizeError::InvalidDuration(duration_seconds));
        }
        let minutes = duration_seconds as f64 / 60.0;

        let champion = self.lookups.champion_name(player.champion_id)?.to_string();
        let queue = self.lookups.queue_name(raw.info.queue_id)?.to_string();

        let cs = u64::from(player.total_minions_killed) + u64::from(player.neutral_minions_killed);

        Ok(NormalizedStats {
            win: player.win,
            kills: player.kills,
            deaths: player.deaths,
            assists: player.assists,
            cs,
            cs_per_min: per_minute(cs as f64, minutes),
            duration_seconds,
            duration: format_duration(duration_seconds),
            champion,
            damage: player.total_damage_dealt_to_champions,
            damage_per_min: per_minute(player.total_damage_dealt_to_champions as f64, minutes),
            damage_mitigated: player.damage_self_mitigated,
            gold: player.gold_earned,
            gold_per_min: per_minute(player.gold_earned as f64, minutes),
            vision_score: player.vision_score,
            largest_multikill: player.largest_multi_kill,
            multikill: multikill_label(player.largest_multi_kill),
            queue,
        })
    }
}

// metadata.participants and info.participants share positions
fn find_participant<'a>(raw: &'a MatchDto, puuid: &str) -> Result<&'a ParticipantDto, NormalizeError> {
    raw.metadata
        .participants
        .iter()
        .position(|p| p == puuid)
        .and_then(|idx| raw.info.participants.get(idx))
        .ok_or_else(|| NormalizeError::ParticipantNotFound(puuid.to_string()))
}
