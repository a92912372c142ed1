// URL builders for the Riot endpoints used by the client.
// Platform hosts are per region (na1, euw1, ...); regional hosts group them.

use super::Game;

pub const DATA_DRAGON_VERSIONS: &str = "https://ddragon.leagueoflegends.com/api/versions.json";

pub fn regional_routing(region: &str) -> &'static str {
    match region {
        "na1" | "br1" | "la1" | "la2" => "americas",
        "euw1" | "eun1" | "tr1" | "ru" | "me1" => "europe",
        "kr" | "jp1" => "asia",
        "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" => "sea",
        _ => "americas", // default
    }
}

pub fn account_by_riot_id(region: &str, game_name: &str, tag_line: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/riot/account/v1/accounts/by-riot-id/{}/{}",
        regional_routing(region),
        game_name,
        tag_line
    )
}

pub fn summoner_by_puuid(game: Game, region: &str, puuid: &str) -> String {
    let path = match game {
        Game::League => "lol/summoner/v4",
        Game::Tft => "tft/summoner/v1",
    };
    format!("https://{}.api.riotgames.com/{}/summoners/by-puuid/{}", region, path, puuid)
}

pub fn league_entries(game: Game, region: &str, summoner_id: &str) -> String {
    let path = match game {
        Game::League => "lol/league/v4",
        Game::Tft => "tft/league/v1",
    };
    format!("https://{}.api.riotgames.com/{}/entries/by-summoner/{}", region, path, summoner_id)
}

pub fn top_masteries(region: &str, puuid: &str, count: usize) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/champion-mastery/v4/champion-masteries/by-puuid/{}/top?count={}",
        region, puuid, count
    )
}

pub fn match_ids(game: Game, region: &str, puuid: &str, start: usize, count: usize) -> String {
    let path = match game {
        Game::League => "lol/match/v5",
        Game::Tft => "tft/match/v1",
    };
    format!(
        "https://{}.api.riotgames.com/{}/matches/by-puuid/{}/ids?start={}&count={}",
        regional_routing(region),
        path,
        puuid,
        start,
        count
    )
}

pub fn match_by_id(game: Game, region: &str, match_id: &str) -> String {
    let path = match game {
        Game::League => "lol/match/v5",
        Game::Tft => "tft/match/v1",
    };
    format!(
        "https://{}.api.riotgames.com/{}/matches/{}",
        regional_routing(region),
        path,
        match_id
    )
}

pub fn data_dragon_champions(version: &str) -> String {
    format!(
        "https://ddragon.leagueoflegends.com/cdn/{}/data/en_US/champion.json",
        version
    )
}
