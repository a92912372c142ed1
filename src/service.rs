use crate::api::{Game, GameApi};
use crate::error::AppError;
use crate::lookup::LookupTables;
use crate::stats::league::{MatchNormalizer, NormalizedStats};
use crate::stats::tft::{VariantNormalizer, VariantOptions, VariantStats};
use crate::stats::{normalize_batch, MatchSlot, MatchWindow};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankSummary {
    pub tier: String,
    pub rank: String,
    pub league_points: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MasterySummary {
    pub champion: String,
    pub level: i64,
    pub points: i64,
}

/// Upstream queue type for a caller-facing league name.
/// Unknown names fall back to the solo queue.
pub fn queue_code(game: Game, league: &str) -> &'static str {
    match (game, league.to_ascii_uppercase().as_str()) {
        (Game::League, "FLEX") => "RANKED_FLEX_SR",
        (Game::League, _) => "RANKED_SOLO_5x5",
        (Game::Tft, "DOUBLEUP") => "RANKED_TFT_DOUBLE_UP",
        (Game::Tft, _) => "RANKED_TFT",
    }
}

/// Ties the upstream client to the normalizers. Every method resolves the
/// Riot ID first; an unknown player is `AppError::PlayerNotFound`.
pub struct StatsService {
    api: Arc<dyn GameApi>,
    lookups: Arc<LookupTables>,
    league: MatchNormalizer,
    tft: VariantNormalizer,
}

impl StatsService {
    pub fn new(api: Arc<dyn GameApi>, lookups: Arc<LookupTables>, variant: VariantOptions) -> Self {
        StatsService {
            api,
            league: MatchNormalizer::new(lookups.clone()),
            lookups,
            tft: VariantNormalizer::new(variant),
        }
    }

    pub fn resolve_player_id(&self, game_name: &str, tag_line: &str) -> Result<String, AppError> {
        self.api
            .account(game_name, tag_line)?
            .map(|account| account.puuid)
            .ok_or_else(|| AppError::PlayerNotFound(format!("{}#{}", game_name, tag_line)))
    }

    fn resolve_summoner_id(&self, game: Game, game_name: &str, tag_line: &str) -> Result<String, AppError> {
        let puuid = self.resolve_player_id(game_name, tag_line)?;
        self.api
            .summoner(game, &puuid)?
            .map(|summoner| summoner.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::PlayerNotFound(format!("{}#{}", game_name, tag_line)))
    }

    pub fn rank(
        &self,
        game: Game,
        game_name: &str,
        tag_line: &str,
        league: &str,
    ) -> Result<Option<RankSummary>, AppError> {
        let summoner_id = self.resolve_summoner_id(game, game_name, tag_line)?;
        let code = queue_code(game, league);

        Ok(self
            .api
            .league_entries(game, &summoner_id)?
            .into_iter()
            .find(|entry| entry.queue_type == code)
            .map(|entry| RankSummary {
                tier: entry.tier,
                rank: entry.rank,
                league_points: entry.league_points,
            }))
    }

    /// Highest-mastery champions. An id missing from the champion table is
    /// reported by its number rather than failing the whole list.
    pub fn top_champions(
        &self,
        game_name: &str,
        tag_line: &str,
        count: usize,
    ) -> Result<Vec<MasterySummary>, AppError> {
        let puuid = self.resolve_player_id(game_name, tag_line)?;

        Ok(self
            .api
            .top_masteries(&puuid, count)?
            .into_iter()
            .map(|m| MasterySummary {
                champion: self
                    .lookups
                    .champion_name(m.champion_id)
                    .map(str::to_string)
                    .unwrap_or_else(|_| m.champion_id.to_string()),
                level: m.champion_level,
                points: m.champion_points,
            })
            .collect())
    }

    pub fn league_matches(
        &self,
        game_name: &str,
        tag_line: &str,
        window: MatchWindow,
    ) -> Result<Vec<MatchSlot<NormalizedStats>>, AppError> {
        let puuid = self.resolve_player_id(game_name, tag_line)?;
        let ids = self.api.match_ids(Game::League, &puuid, window.offset(), window.page_size())?;
        info!(player = %format!("{}#{}", game_name, tag_line), matches = ids.len(), "normalizing league matches");

        Ok(normalize_batch(
            &ids,
            MatchWindow::recent(window.count),
            |id| self.api.league_match(id),
            |raw| Ok(self.league.normalize(raw, &puuid)?),
        ))
    }

    pub fn tft_matches(
        &self,
        game_name: &str,
        tag_line: &str,
        window: MatchWindow,
    ) -> Result<Vec<MatchSlot<VariantStats>>, AppError> {
        let puuid = self.resolve_player_id(game_name, tag_line)?;
        let ids = self.api.match_ids(Game::Tft, &puuid, window.offset(), window.page_size())?;
        info!(player = %format!("{}#{}", game_name, tag_line), matches = ids.len(), "normalizing tft matches");

        Ok(normalize_batch(
            &ids,
            MatchWindow::recent(window.count),
            |id| self.api.tft_match(id),
            |raw| Ok(self.tft.normalize(raw, &puuid)?),
        ))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::api::models::*;
    use std::collections::HashMap;

    /// In-memory `GameApi` keyed by match id.
    #[derive(Default)]
    pub struct FakeApi {
        pub accounts: HashMap<String, String>,
        pub summoners: HashMap<String, String>,
        pub entries: Vec<LeagueEntryDto>,
        pub masteries: Vec<ChampionMasteryDto>,
        pub match_ids: Vec<String>,
        pub league_matches: HashMap<String, MatchDto>,
        pub tft_matches: HashMap<String, TftMatchDto>,
    }

    impl GameApi for FakeApi {
        fn account(&self, game_name: &str, tag_line: &str) -> Result<Option<AccountDto>, AppError> {
            Ok(self
                .accounts
                .get(&format!("{}#{}", game_name, tag_line))
                .map(|puuid| AccountDto {
                    puuid: puuid.clone(),
                    game_name: game_name.to_string(),
                    tag_line: tag_line.to_string(),
                }))
        }

        fn summoner(&self, _game: Game, puuid: &str) -> Result<Option<SummonerDto>, AppError> {
            Ok(self.summoners.get(puuid).map(|id| SummonerDto {
                id: id.clone(),
                puuid: puuid.to_string(),
                summoner_level: 100,
            }))
        }

        fn league_entries(&self, _game: Game, _summoner_id: &str) -> Result<Vec<LeagueEntryDto>, AppError> {
            Ok(self.entries.clone())
        }

        fn top_masteries(&self, _puuid: &str, count: usize) -> Result<Vec<ChampionMasteryDto>, AppError> {
            Ok(self.masteries.iter().take(count).cloned().collect())
        }

        fn match_ids(
            &self,
            _game: Game,
            _puuid: &str,
            start: usize,
            count: usize,
        ) -> Result<Vec<String>, AppError> {
            Ok(self.match_ids.iter().skip(start).take(count).cloned().collect())
        }

        fn league_match(&self, match_id: &str) -> Result<Option<MatchDto>, AppError> {
            Ok(self.league_matches.get(match_id).cloned())
        }

        fn tft_match(&self, match_id: &str) -> Result<Option<TftMatchDto>, AppError> {
            Ok(self.tft_matches.get(match_id).cloned())
        }
    }

    pub fn league_match(puuid: &str, duration: i64) -> MatchDto {
        MatchDto {
            metadata: MatchMetadata {
                match_id: String::new(),
                participants: vec![puuid.to_string()],
            },
            info: MatchInfo {
                game_duration: duration,
                queue_id: 420,
                participants: vec![ParticipantDto {
                    puuid: puuid.to_string(),
                    win: true,
                    kills: 4,
                    deaths: 1,
                    assists: 6,
                    total_minions_killed: 150,
                    neutral_minions_killed: 30,
                    champion_id: 22,
                    gold_earned: 12_000,
                    largest_multi_kill: 2,
                    ..Default::default()
                }],
            },
        }
    }

    pub fn lookups() -> Arc<LookupTables> {
        Arc::new(LookupTables::new(
            HashMap::from([(22, "Ashe".to_string())]),
            HashMap::from([(420, "5v5 Ranked Solo games".to_string())]),
        ))
    }

    /// Player "Tester#NA1" with three league matches, the second missing upstream.
    pub fn fake_api() -> FakeApi {
        let mut api = FakeApi::default();
        api.accounts.insert("Tester#NA1".to_string(), "puuid-1".to_string());
        api.summoners.insert("puuid-1".to_string(), "summoner-1".to_string());
        api.match_ids = vec!["NA1_1".to_string(), "NA1_2".to_string(), "NA1_3".to_string()];
        api.league_matches.insert("NA1_1".to_string(), league_match("puuid-1", 1800));
        api.league_matches.insert("NA1_3".to_string(), league_match("puuid-1", 1200));
        api.entries = vec![
            LeagueEntryDto {
                queue_type: "RANKED_FLEX_SR".to_string(),
                tier: "GOLD".to_string(),
                rank: "I".to_string(),
                league_points: 12,
                wins: 10,
                losses: 9,
            },
            LeagueEntryDto {
                queue_type: "RANKED_SOLO_5x5".to_string(),
                tier: "SILVER".to_string(),
                rank: "II".to_string(),
                league_points: 42,
                wins: 30,
                losses: 28,
            },
        ];
        api.masteries = vec![
            ChampionMasteryDto {
                champion_id: 22,
                champion_level: 7,
                champion_points: 250_000,
                last_play_time: 0,
            },
            ChampionMasteryDto {
                champion_id: 9999,
                champion_level: 5,
                champion_points: 40_000,
                last_play_time: 0,
            },
        ];
        api
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    fn service() -> StatsService {
        StatsService::new(Arc::new(fake_api()), lookups(), VariantOptions::default())
    }

    #[test]
    fn test_batch_keeps_order_and_marks_missing_match() {
        let results = service()
            .league_matches("Tester", "NA1", MatchWindow::recent(3))
            .unwrap();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(!results[1].is_ok());
        assert!(results[2].is_ok());
        assert_eq!(results[0].ok().unwrap().duration, "0:30:00");
        assert_eq!(results[2].ok().unwrap().duration, "0:20:00");
        assert_eq!(results[0].ok().unwrap().champion, "Ashe");
    }

    #[test]
    fn test_single_match_window() {
        let results = service()
            .league_matches("Tester", "NA1", MatchWindow::new(3, 1))
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ok().unwrap().cs_per_min, 9.0);
    }

    #[test]
    fn test_windows_past_the_first_hundred_ids() {
        let mut api = fake_api();
        api.match_ids = (1..=150).map(|i| format!("NA1_{}", i)).collect();
        for (i, id) in api.match_ids.iter().enumerate() {
            api.league_matches
                .insert(id.clone(), league_match("puuid-1", 600 + i as i64));
        }
        let service = StatsService::new(Arc::new(api), lookups(), VariantOptions::default());

        let one = service
            .league_matches("Tester", "NA1", MatchWindow::new(101, 1))
            .unwrap();
        assert_eq!(one.len(), 1);
        // the 101st match lasted 600 + 100 seconds
        assert_eq!(one[0].ok().unwrap().duration_seconds, 700);

        let page = service
            .league_matches("Tester", "NA1", MatchWindow::new(10, 95))
            .unwrap();
        assert_eq!(page.len(), 95);
        assert!(page.iter().all(|slot| slot.is_ok()));
        assert_eq!(page[0].ok().unwrap().duration_seconds, 609);
    }

    #[test]
    fn test_unknown_player() {
        let err = service()
            .league_matches("Nobody", "NA1", MatchWindow::recent(5))
            .unwrap_err();
        assert!(matches!(err, AppError::PlayerNotFound(_)));
    }

    #[test]
    fn test_rank_picks_requested_queue() {
        let service = service();
        let solo = service.rank(Game::League, "Tester", "NA1", "SOLO").unwrap().unwrap();
        assert_eq!(solo.tier, "SILVER");
        assert_eq!(solo.league_points, 42);

        let flex = service.rank(Game::League, "Tester", "NA1", "flex").unwrap().unwrap();
        assert_eq!(flex.tier, "GOLD");

        // no TFT entries in the fake
        assert_eq!(service.rank(Game::Tft, "Tester", "NA1", "DOUBLEUP").unwrap(), None);
    }

    #[test]
    fn test_queue_code_fallback() {
        assert_eq!(queue_code(Game::Tft, "whatever"), "RANKED_TFT");
        assert_eq!(queue_code(Game::Tft, "doubleup"), "RANKED_TFT_DOUBLE_UP");
        assert_eq!(queue_code(Game::League, "ARAM"), "RANKED_SOLO_5x5");
    }

    #[test]
    fn test_top_champions_names_unknown_ids_by_number() {
        let champs = service().top_champions("Tester", "NA1", 5).unwrap();
        assert_eq!(champs.len(), 2);
        assert_eq!(champs[0].champion, "Ashe");
        assert_eq!(champs[0].level, 7);
        assert_eq!(champs[1].champion, "9999");
    }
}
