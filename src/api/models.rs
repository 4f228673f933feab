use serde::{Deserialize, Serialize};

// Account V1 response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

// Summoner V4 response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub puuid: String,
    pub summoner_level: i64,
    #[serde(default)]
    pub profile_icon_id: i32,
    #[serde(default)]
    pub revision_date: i64,
}

// League V4 response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
}

impl LeagueEntryDto {
    pub fn win_rate_percent(&self) -> f64 {
        let games = self.wins + self.losses;
        if games <= 0 {
            0.0
        } else {
            self.wins as f64 / games as f64 * 100.0
        }
    }
}

// Champion Mastery V4 response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: i64,
    pub champion_level: i32,
    pub champion_points: i64,
}

// Match V5 response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Seconds.
    pub game_duration: i64,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub game_creation: i64,
    #[serde(default)]
    pub queue_id: i32,
    pub participants: Vec<ParticipantDto>,
}

/// One participant as returned by match-v5. Every field the statistics need is
/// mandatory, so a record missing one fails to decode instead of producing
/// garbage averages. `neutralMinionsKilled` is the only optional counter.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    #[serde(default)]
    pub champion_name: String,
    #[serde(default)]
    pub team_id: i32,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_minions_killed: u32,
    #[serde(default)]
    pub neutral_minions_killed: u32,
    pub vision_score: f64,
    pub gold_earned: f64,
    pub total_damage_dealt_to_champions: f64,
}

// Error body returned by the Riot API on non-2xx responses
#[derive(Debug, Deserialize)]
pub struct RiotErrorBody {
    pub status: RiotErrorStatus,
}

#[derive(Debug, Deserialize)]
pub struct RiotErrorStatus {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub status_code: u16,
}
