use crate::config::Config;
use crate::error::AppError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::endpoints;
use super::models::*;
use super::{Game, GameApi};

const USER_AGENT: &str = "league_stats/0.1.0";

pub struct RiotApiClient {
    agent: ureq::Agent,
    region: String,
    api_key: String,
    tft_api_key: String,
}

impl RiotApiClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build();

        RiotApiClient {
            agent,
            region: config.region.clone(),
            api_key: config.api_key.clone(),
            tft_api_key: config.tft_api_key.clone(),
        }
    }

    fn key(&self, game: Game) -> &str {
        match game {
            Game::League => &self.api_key,
            Game::Tft => &self.tft_api_key,
        }
    }

    /// GET `url` and decode the body. A 404 is reported as `None`.
    fn execute_request<T: DeserializeOwned>(
        &self,
        game: Game,
        url: &str,
    ) -> Result<Option<T>, AppError> {
        debug!(url, "riot request");

        let response = self
            .agent
            .get(url)
            .set("X-Riot-Token", self.key(game))
            .call();

        match response {
            Ok(resp) => {
                let body = resp
                    .into_string()
                    .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;
                serde_json::from_str(&body)
                    .map(Some)
                    .map_err(|e| AppError::JsonError(e.to_string()))
            }
            Err(ureq::Error::Status(404, _)) => Ok(None),
            Err(ureq::Error::Status(code, _)) => Err(AppError::UpstreamUnavailable(format!(
                "riot api answered {}",
                code
            ))),
            Err(e) => Err(AppError::UpstreamUnavailable(e.to_string())),
        }
    }
}

impl GameApi for RiotApiClient {
    fn account(&self, game_name: &str, tag_line: &str) -> Result<Option<AccountDto>, AppError> {
        let url = endpoints::account_by_riot_id(&self.region, game_name, tag_line);
        self.execute_request(Game::League, &url)
    }

    fn summoner(&self, game: Game, puuid: &str) -> Result<Option<SummonerDto>, AppError> {
        let url = endpoints::summoner_by_puuid(game, &self.region, puuid);
        self.execute_request(game, &url)
    }

    fn league_entries(&self, game: Game, summoner_id: &str) -> Result<Vec<LeagueEntryDto>, AppError> {
        let url = endpoints::league_entries(game, &self.region, summoner_id);
        Ok(self.execute_request(game, &url)?.unwrap_or_default())
    }

    fn top_masteries(&self, puuid: &str, count: usize) -> Result<Vec<ChampionMasteryDto>, AppError> {
        let url = endpoints::top_masteries(&self.region, puuid, count);
        Ok(self.execute_request(Game::League, &url)?.unwrap_or_default())
    }

    fn match_ids(
        &self,
        game: Game,
        puuid: &str,
        start: usize,
        count: usize,
    ) -> Result<Vec<String>, AppError> {
        let url = endpoints::match_ids(game, &self.region, puuid, start, count);
        Ok(self.execute_request(game, &url)?.unwrap_or_default())
    }

    fn league_match(&self, match_id: &str) -> Result<Option<MatchDto>, AppError> {
        let url = endpoints::match_by_id(Game::League, &self.region, match_id);
        self.execute_request(Game::League, &url)
    }

    fn tft_match(&self, match_id: &str) -> Result<Option<TftMatchDto>, AppError> {
        let url = endpoints::match_by_id(Game::Tft, &self.region, match_id);
        self.execute_request(Game::Tft, &url)
    }
}

/// Downloads the champion catalog for the latest Data Dragon version.
/// Data Dragon is a public CDN, so no key is needed.
pub fn fetch_champion_catalog() -> Result<DataDragonChampions, AppError> {
    let versions: Vec<String> = ureq::get(endpoints::DATA_DRAGON_VERSIONS)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?
        .into_json()
        .map_err(|e| AppError::JsonError(e.to_string()))?;

    let latest = versions.first().ok_or_else(|| {
        AppError::UpstreamUnavailable("data dragon returned no versions".to_string())
    })?;
    debug!(version = latest.as_str(), "downloading champion catalog");

    ureq::get(&endpoints::data_dragon_champions(latest))
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?
        .into_json()
        .map_err(|e| AppError::JsonError(e.to_string()))
}
