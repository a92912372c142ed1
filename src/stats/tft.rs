use crate::api::models::{TftMatchDto, TftParticipantDto, UnitDto};
use crate::error::NormalizeError;
use serde::Serialize;

use super::format::format_duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantOptions {
    /// Characters dropped from trait ids, e.g. 6 for "TFT13_".
    pub trait_prefix_len: usize,
    /// Characters dropped from unit character ids.
    pub unit_prefix_len: usize,
}

impl Default for VariantOptions {
    fn default() -> Self {
        VariantOptions {
            trait_prefix_len: 6,
            unit_prefix_len: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Synergy {
    pub name: String,
    pub num_units: u32,
    pub tier: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    pub name: String,
    pub cost: u32,
    pub star: u32,
    #[serde(skip)]
    score: f64,
}

/// One player's view of a finished TFT match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantStats {
    pub placement: u32,
    pub win: bool,
    pub level: u32,
    pub round: String,
    pub time_elim: String,
    pub traits: Vec<Synergy>,
    pub units: Vec<Unit>,
}

/// Maps the flat round counter onto the in-game `stage-round` label.
///
/// Stage 1 has four rounds and every later stage has seven, so round 30 is
/// 5-5. Division floors toward negative infinity for counters below 4.
pub fn stage_round(last_round: i64) -> String {
    let offset = last_round - 4;
    let stage = offset.div_euclid(7) + 2;
    let round = offset.rem_euclid(7);
    format!("{}-{}", stage, round)
}

/// Gold cost for an upstream rarity code (0-2 are 1-3 cost, 4 is 4, 6 is 5, 8 is 6).
pub fn rarity_to_cost(rarity: i64) -> Result<u32, NormalizeError> {
    match rarity {
        0..=3 => Ok(rarity as u32 + 1),
        4 => Ok(4),
        6 => Ok(5),
        8 => Ok(6),
        other => Err(NormalizeError::UnknownRarity(other)),
    }
}

pub fn unit_score(cost: u32, star: u32) -> f64 {
    cost as f64 * 0.6 + 2f64.powf(star as f64 / 1.5)
}

fn strip_prefix(raw: &str, len: usize) -> String {
    raw.chars().skip(len).collect()
}

pub struct VariantNormalizer {
    options: VariantOptions,
}

impl VariantNormalizer {
    pub fn new(options: VariantOptions) -> Self {
        VariantNormalizer { options }
    }

    pub fn normalize(&self, raw: &TftMatchDto, puuid: &str) -> Result<VariantStats, NormalizeError> {
        let player = find_participant(raw, puuid)?;

        let mut traits: Vec<Synergy> = player
            .traits
            .iter()
            .map(|t| Synergy {
                name: strip_prefix(&t.name, self.options.trait_prefix_len),
                num_units: t.num_units,
                tier: t.style,
            })
            .collect();
        // sort_by is stable, ties keep upstream order
        traits.sort_by(|a, b| b.tier.cmp(&a.tier));

        let mut units = player
            .units
            .iter()
            .map(|u| self.unit(u))
            .collect::<Result<Vec<_>, _>>()?;
        units.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(VariantStats {
            placement: player.placement,
            // top four counts as a win when upstream omits the flag
            win: player.win.unwrap_or(player.placement <= 4),
            level: player.level,
            round: stage_round(player.last_round),
            time_elim: format_duration(player.time_eliminated as i64),
            traits,
            units,
        })
    }

    fn unit(&self, raw: &UnitDto) -> Result<Unit, NormalizeError> {
        let cost = rarity_to_cost(raw.rarity)?;
        Ok(Unit {
            name: strip_prefix(&raw.character_id, self.options.unit_prefix_len),
            cost,
            star: raw.tier,
            score: unit_score(cost, raw.tier),
        })
    }
}

fn find_participant<'a>(
    raw: &'a TftMatchDto,
    puuid: &str,
) -> Result<&'a TftParticipantDto, NormalizeError> {
    raw.metadata
        .participants
        .iter()
        .position(|p| p == puuid)
        .and_then(|idx| raw.info.participants.get(idx))
        .ok_or_else(|| NormalizeError::ParticipantNotFound(puuid.to_string()))
}
