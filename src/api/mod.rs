pub mod client;
pub mod endpoints;
pub mod models;

use crate::error::AppError;
use models::*;

/// Which game's endpoints (and key) a call goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    League,
    Tft,
}

/// Upstream operations the stats service depends on.
///
/// `Ok(None)` means the upstream answered that the resource does not exist,
/// which is distinct from a transport failure (`AppError::UpstreamUnavailable`).
pub trait GameApi: Send + Sync {
    fn account(&self, game_name: &str, tag_line: &str) -> Result<Option<AccountDto>, AppError>;

    fn summoner(&self, game: Game, puuid: &str) -> Result<Option<SummonerDto>, AppError>;

    fn league_entries(&self, game: Game, summoner_id: &str) -> Result<Vec<LeagueEntryDto>, AppError>;

    fn top_masteries(&self, puuid: &str, count: usize) -> Result<Vec<ChampionMasteryDto>, AppError>;

    fn match_ids(
        &self,
        game: Game,
        puuid: &str,
        start: usize,
        count: usize,
    ) -> Result<Vec<String>, AppError>;

    fn league_match(&self, match_id: &str) -> Result<Option<MatchDto>, AppError>;

    fn tft_match(&self, match_id: &str) -> Result<Option<TftMatchDto>, AppError>;
}
