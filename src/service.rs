use indicatif::ProgressBar;

use crate::analysis::aggregate::{aggregate, AggregatedStats};
use crate::analysis::history::{summarize, MatchSummary};
use crate::analysis::trend::{compare_windows, TrendReport};
use crate::api::models::MatchDto;
use crate::api::region::Region;
use crate::api::source::MatchDataSource;
use crate::error::DataSourceError;

/// Match-v5 rejects `count` above this.
pub const MAX_MATCH_COUNT: usize = 100;

/// Fetches windows of matches from a [`MatchDataSource`] and feeds them to the
/// statistics code. Any upstream failure aborts the whole request.
pub struct StatsService<S> {
    source: S,
}

impl<S: MatchDataSource> StatsService<S> {
    pub fn new(source: S) -> Self {
        StatsService { source }
    }

    /// Downloads `count` matches starting `offset` matches back from the most
    /// recent one.
    pub fn fetch_window(
        &self,
        puuid: &str,
        region: Region,
        count: usize,
        offset: usize,
        progress: &ProgressBar,
    ) -> Result<Vec<MatchDto>, DataSourceError> {
        let count = count.min(MAX_MATCH_COUNT);
        let offset = (offset > 0).then_some(offset);
        let ids = self
            .source
            .fetch_recent_match_ids(puuid, region, count, offset)?;
        log::info!(
            "fetching {} matches for {} (offset {})",
            ids.len(),
            puuid,
            offset.unwrap_or(0)
        );

        let mut matches = Vec::with_capacity(ids.len());
        for id in &ids {
            matches.push(self.source.fetch_match(id, region)?);
            progress.inc(1);
        }
        Ok(matches)
    }

    pub fn match_history(
        &self,
        puuid: &str,
        region: Region,
        count: usize,
        progress: &ProgressBar,
    ) -> Result<Vec<MatchSummary>, DataSourceError> {
        let matches = self.fetch_window(puuid, region, count, 0, progress)?;
        Ok(summarize(&matches, puuid))
    }

    /// Averages over the last `count` matches. `Ok(None)` when the player has
    /// no matches.
    pub fn overview(
        &self,
        puuid: &str,
        region: Region,
        count: usize,
        progress: &ProgressBar,
    ) -> Result<Option<AggregatedStats>, DataSourceError> {
        let matches = self.fetch_window(puuid, region, count, 0, progress)?;
        Ok(aggregate(&matches, puuid))
    }

    /// Compares the last `window` matches with the `window` matches before
    /// them. `Ok(None)` when either window comes back empty.
    pub fn improvement(
        &self,
        puuid: &str,
        region: Region,
        window: usize,
        progress: &ProgressBar,
    ) -> Result<Option<TrendReport>, DataSourceError> {
        let window = window.min(MAX_MATCH_COUNT);
        let recent = self.fetch_window(puuid, region, window, 0, progress)?;
        let older = self.fetch_window(puuid, region, window, window, progress)?;

        let report = compare_windows(&older, &recent, puuid);
        if report.is_none() {
            log::info!(
                "not enough matches for a trend ({} recent, {} older)",
                recent.len(),
                older.len()
            );
        }
        Ok(report)
    }
}
