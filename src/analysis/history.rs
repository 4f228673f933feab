use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use super::aggregate::{kda, round2};
use super::participant::extract_participant;
use crate::api::models::MatchDto;

/// One row of a player's match history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: String,
    pub champion: String,
    pub queue: &'static str,
    pub started_at: Option<DateTime<Utc>>,
    pub duration_secs: i64,
    pub won: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub kda: f64,
    pub creep_score: u32,
    pub cs_per_minute: f64,
}

impl MatchSummary {
    /// `None` when the player is not in the match.
    pub fn from_match(match_data: &MatchDto, puuid: &str) -> Option<Self> {
        let record = extract_participant(match_data, puuid)?;
        let champion = if record.champion_name.is_empty() {
            "Unknown".to_string()
        } else {
            record.champion_name.clone()
        };
        let duration_secs = match_data.info.game_duration;

        Some(MatchSummary {
            match_id: match_data.metadata.match_id.clone(),
            champion,
            queue: queue_name(match_data.info.queue_id),
            started_at: Utc.timestamp_millis_opt(match_data.info.game_creation).single(),
            duration_secs,
            won: record.win,
            kills: record.kills,
            deaths: record.deaths,
            assists: record.assists,
            kda: kda(record.kills.into(), record.deaths.into(), record.assists.into()),
            creep_score: record.creep_score(),
            cs_per_minute: cs_per_minute(record.creep_score(), duration_secs),
        })
    }

    pub fn duration_label(&self) -> String {
        format_duration(self.duration_secs)
    }
}

pub fn queue_name(queue_id: i32) -> &'static str {
    match queue_id {
        400 => "Normal Draft",
        420 => "Ranked Solo/Duo",
        430 => "Normal Blind",
        440 => "Ranked Flex",
        450 => "ARAM",
        700 => "Clash",
        _ => "Custom",
    }
}

pub fn cs_per_minute(creep_score: u32, duration_secs: i64) -> f64 {
    if duration_secs <= 0 {
        return 0.0;
    }
    round2(creep_score as f64 / (duration_secs as f64 / 60.0))
}

pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}m {}s", seconds / 60, seconds % 60)
}

/// Summaries for the matches the player took part in, in input order.
pub fn summarize(matches: &[MatchDto], puuid: &str) -> Vec<MatchSummary> {
    matches
        .iter()
        .filter_map(|m| MatchSummary::from_match(m, puuid))
        .collect()
}
