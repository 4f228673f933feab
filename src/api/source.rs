use super::models::MatchDto;
use super::region::Region;
use crate::error::DataSourceError;

/// Where match records come from. The statistics code only ever sees fully
/// materialized [`MatchDto`] values handed over by an implementation of this
/// trait.
#[cfg_attr(test, mockall::automock)]
pub trait MatchDataSource {
    /// Most recent match ids for a player, newest first. `offset` skips that
    /// many of the most recent matches.
    fn fetch_recent_match_ids(
        &self,
        puuid: &str,
        region: Region,
        count: usize,
        offset: Option<usize>,
    ) -> Result<Vec<String>, DataSourceError>;

    fn fetch_match(&self, match_id: &str, region: Region) -> Result<MatchDto, DataSourceError>;
}
