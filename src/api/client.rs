use crate::config::Config;
use crate::error::DataSourceError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use serde::de::DeserializeOwned;
use std::thread;

use super::endpoints;
use super::models::*;
use super::region::Region;
use super::source::MatchDataSource;

const USER_AGENT: &str = concat!("league_trends/", env!("CARGO_PKG_VERSION"));

pub struct RiotApiClient {
    config: Config,
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    clock: DefaultClock,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        let rate_limiter = RateLimiter::direct(Quota::per_second(config.requests_per_second));
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build();

        RiotApiClient {
            config,
            agent,
            rate_limiter,
            clock: DefaultClock::default(),
        }
    }

    pub fn region(&self) -> Region {
        self.config.region
    }

    /// Blocks until the quota has room for one more request.
    fn pace(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DataSourceError> {
        self.pace();
        log::debug!("GET {}", url);

        let response = self
            .agent
            .get(url)
            .set("X-Riot-Token", &self.config.api_key)
            .call();

        match response {
            Ok(resp) => {
                let body = resp
                    .into_string()
                    .map_err(|e| DataSourceError::Transport(e.to_string()))?;
                serde_json::from_str(&body).map_err(|e| DataSourceError::Decode(e.to_string()))
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                log::warn!("{} answered {}", url, status);
                Err(DataSourceError::Upstream {
                    status,
                    message: error_message(&body),
                })
            }
            Err(e) => Err(DataSourceError::Transport(e.to_string())),
        }
    }

    pub fn get_account(
        &self,
        game_name: &str,
        tag_line: &str,
        region: Region,
    ) -> Result<AccountDto, DataSourceError> {
        self.get_json(&endpoints::account_by_riot_id(region, game_name, tag_line))
    }

    pub fn get_summoner(&self, puuid: &str, region: Region) -> Result<SummonerDto, DataSourceError> {
        self.get_json(&endpoints::summoner_by_puuid(region, puuid))
    }

    pub fn get_league_entries(
        &self,
        puuid: &str,
        region: Region,
    ) -> Result<Vec<LeagueEntryDto>, DataSourceError> {
        self.get_json(&endpoints::league_entries_by_puuid(region, puuid))
    }

    pub fn get_champion_masteries(
        &self,
        puuid: &str,
        region: Region,
        count: usize,
    ) -> Result<Vec<ChampionMasteryDto>, DataSourceError> {
        self.get_json(&endpoints::top_masteries_by_puuid(region, puuid, count))
    }
}

impl MatchDataSource for RiotApiClient {
    fn fetch_recent_match_ids(
        &self,
        puuid: &str,
        region: Region,
        count: usize,
        offset: Option<usize>,
    ) -> Result<Vec<String>, DataSourceError> {
        let url = endpoints::match_ids_by_puuid(region, puuid, count, offset.unwrap_or(0));
        self.get_json(&url)
    }

    fn fetch_match(&self, match_id: &str, region: Region) -> Result<MatchDto, DataSourceError> {
        self.get_json(&endpoints::match_by_id(region, match_id))
    }
}

/// Pulls the human readable message out of a Riot error body. Non-JSON bodies
/// (proxies, gateways) are passed through trimmed.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<RiotErrorBody>(body) {
        Ok(parsed) => parsed.status.message,
        Err(_) => body.trim().to_string(),
    }
}
