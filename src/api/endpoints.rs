// URL builders for the Riot endpoints the client talks to.

use super::region::Region;

fn platform_base(region: Region) -> String {
    format!("https://{}.api.riotgames.com", region.platform())
}

fn routing_base(region: Region) -> String {
    format!("https://{}.api.riotgames.com", region.routing())
}

pub fn account_by_riot_id(region: Region, game_name: &str, tag_line: &str) -> String {
    format!(
        "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
        routing_base(region),
        urlencoding::encode(game_name),
        urlencoding::encode(tag_line)
    )
}

pub fn summoner_by_puuid(region: Region, puuid: &str) -> String {
    format!(
        "{}/lol/summoner/v4/summoners/by-puuid/{}",
        platform_base(region),
        puuid
    )
}

pub fn league_entries_by_puuid(region: Region, puuid: &str) -> String {
    format!(
        "{}/lol/league/v4/entries/by-puuid/{}",
        platform_base(region),
        puuid
    )
}

pub fn top_masteries_by_puuid(region: Region, puuid: &str, count: usize) -> String {
    format!(
        "{}/lol/champion-mastery/v4/champion-masteries/by-puuid/{}/top?count={}",
        platform_base(region),
        puuid,
        count
    )
}

pub fn match_ids_by_puuid(region: Region, puuid: &str, count: usize, start: usize) -> String {
    format!(
        "{}/lol/match/v5/matches/by-puuid/{}/ids?start={}&count={}",
        routing_base(region),
        puuid,
        start,
        count
    )
}

pub fn match_by_id(region: Region, match_id: &str) -> String {
    format!("{}/lol/match/v5/matches/{}", routing_base(region), match_id)
}
