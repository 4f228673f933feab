use serde::Serialize;

use super::aggregate::{aggregate, round2, AggregatedStats};
use crate::api::models::MatchDto;

/// Signed `recent - older` differences between two windows. Kills, gold and
/// damage are averaged per window but not compared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub kda_difference: f64,
    pub death_difference: f64,
    pub assist_difference: f64,
    pub cs_difference: f64,
    pub vision_score_difference: f64,
    pub win_rate_difference: f64,
}

impl TrendReport {
    pub fn between(older: &AggregatedStats, recent: &AggregatedStats) -> Self {
        let diff = |recent: f64, older: f64| round2(recent - older);

        TrendReport {
            kda_difference: diff(recent.average_kda, older.average_kda),
            death_difference: diff(recent.average_deaths, older.average_deaths),
            assist_difference: diff(recent.average_assists, older.average_assists),
            cs_difference: diff(recent.average_cs, older.average_cs),
            vision_score_difference: diff(recent.average_vision_score, older.average_vision_score),
            win_rate_difference: diff(recent.win_rate_percent, older.win_rate_percent),
        }
    }
}

/// Compares an older window of matches against a more recent one. `None` when
/// either window is empty.
pub fn compare_windows(
    older_matches: &[MatchDto],
    recent_matches: &[MatchDto],
    puuid: &str,
) -> Option<TrendReport> {
    let older = aggregate(older_matches, puuid)?;
    let recent = aggregate(recent_matches, puuid)?;
    Some(TrendReport::between(&older, &recent))
}
