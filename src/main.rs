mod analysis;
mod api;
mod config;
mod display;
mod error;
mod service;

use analysis::recommender::ImprovementAdvisor;
use api::client::RiotApiClient;
use api::models::AccountDto;
use api::region::Region;
use clap::{Parser, Subcommand};
use config::Config;
use display::output::{
    display_error, display_improvement, display_info, display_insufficient_data, display_json,
    display_match_history, display_overview, display_profile, display_success,
};
use error::AppError;
use indicatif::ProgressBar;
use serde::Serialize;
use service::StatsService;

const TOP_MASTERIES: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "League Trends")]
#[command(about = "Look up a player's recent games and track how they are trending", long_about = None)]
struct Args {
    /// Region, e.g. na, euw, eune, kr (default: RIOT_REGION or na)
    #[arg(short, long, global = true)]
    region: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Account, level, ranked standing and top champion masteries
    Profile {
        /// Riot ID in the form Name#TAG
        riot_id: String,
    },

    /// Recent match history
    Matches {
        /// Riot ID in the form Name#TAG
        riot_id: String,

        /// Number of matches to list (max: 100)
        #[arg(short, long, default_value = "10")]
        count: usize,
    },

    /// Average stats over recent matches
    Overview {
        /// Riot ID in the form Name#TAG
        riot_id: String,

        /// Number of matches to average (max: 100)
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Compare the most recent matches with the ones before them
    Improvement {
        /// Riot ID in the form Name#TAG
        riot_id: String,

        /// Matches per window (max: 100)
        #[arg(short, long, default_value = "10")]
        window: usize,
    },
}

impl Command {
    fn riot_id(&self) -> &str {
        match self {
            Command::Profile { riot_id }
            | Command::Matches { riot_id, .. }
            | Command::Overview { riot_id, .. }
            | Command::Improvement { riot_id, .. } => riot_id,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Splits `Name#TAG` into its two halves.
fn parse_riot_id(riot_id: &str) -> Result<(String, String), AppError> {
    match riot_id.trim().split_once('#') {
        Some((name, tag)) if !name.trim().is_empty() && !tag.trim().is_empty() => {
            Ok((name.trim().to_string(), tag.trim().to_string()))
        }
        _ => Err(AppError::InvalidRiotId),
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env()?;
    if let Some(region) = args.region.as_deref() {
        config.region = region.parse::<Region>()?;
    }
    let json = args.json;

    let (game_name, tag_line) = parse_riot_id(args.command.riot_id())?;
    let client = RiotApiClient::new(config);
    let region = client.region();

    if !json {
        display_info(&format!(
            "Fetching data for {}#{} in region {}",
            game_name, tag_line, region
        ));
    }

    let account = client
        .get_account(&game_name, &tag_line, region)
        .map_err(|e| AppError::upstream("Error fetching account data", e))?;
    log::info!("resolved {}#{} to {}", game_name, tag_line, account.puuid);
    if !json {
        display_success(&format!("Found PUUID: {}", short_puuid(&account.puuid)));
    }

    match args.command {
        Command::Profile { .. } => run_profile(&client, &account, region, json),
        Command::Matches { count, .. } => {
            let service = StatsService::new(client);
            let progress = progress_bar(count, json);
            let history = service
                .match_history(&account.puuid, region, count, &progress)
                .map_err(|e| AppError::upstream("Error fetching match details", e))?;
            progress.finish_and_clear();

            if json {
                display_json(&history)
            } else {
                display_match_history(&history);
                Ok(())
            }
        }
        Command::Overview { count, .. } => {
            let service = StatsService::new(client);
            let progress = progress_bar(count, json);
            let stats = service
                .overview(&account.puuid, region, count, &progress)
                .map_err(|e| AppError::upstream("Error calculating player stats", e))?;
            let games = progress.position() as usize;
            progress.finish_and_clear();

            match (stats, json) {
                (stats, true) => display_json(&stats),
                (Some(stats), false) => {
                    display_overview(&stats, games);
                    Ok(())
                }
                (None, false) => {
                    display_insufficient_data("an overview");
                    Ok(())
                }
            }
        }
        Command::Improvement { window, .. } => {
            let service = StatsService::new(client);
            let progress = progress_bar(improvement_fetch_len(window), json);
            let report = service
                .improvement(&account.puuid, region, window, &progress)
                .map_err(|e| AppError::upstream("Error calculating improvement metrics", e))?;
            progress.finish_and_clear();

            let Some(report) = report else {
                return if json {
                    display_json(&None::<()>)
                } else {
                    display_insufficient_data("improvement metrics");
                    Ok(())
                };
            };

            let recommendations = ImprovementAdvisor::recommendations(&report);
            if json {
                #[derive(Serialize)]
                struct ImprovementOutput<'a> {
                    #[serde(flatten)]
                    report: &'a analysis::trend::TrendReport,
                    recommendations: &'a [analysis::recommender::Recommendation],
                }
                display_json(&ImprovementOutput {
                    report: &report,
                    recommendations: &recommendations,
                })
            } else {
                display_improvement(&report, &recommendations, window);
                Ok(())
            }
        }
    }
}

fn run_profile(
    client: &RiotApiClient,
    account: &AccountDto,
    region: Region,
    json: bool,
) -> Result<(), AppError> {
    let summoner = client
        .get_summoner(&account.puuid, region)
        .map_err(|e| AppError::upstream("Error fetching summoner data", e))?;
    let leagues = client
        .get_league_entries(&account.puuid, region)
        .map_err(|e| AppError::upstream("Error fetching league data", e))?;
    let masteries = client
        .get_champion_masteries(&account.puuid, region, TOP_MASTERIES)
        .map_err(|e| AppError::upstream("Error fetching mastery data", e))?;

    if json {
        #[derive(Serialize)]
        struct ProfileOutput<'a> {
            account: &'a AccountDto,
            summoner: &'a api::models::SummonerDto,
            leagues: &'a [api::models::LeagueEntryDto],
            masteries: &'a [api::models::ChampionMasteryDto],
        }
        return display_json(&ProfileOutput {
            account,
            summoner: &summoner,
            leagues: &leagues,
            masteries: &masteries,
        });
    }

    display_profile(account, &summoner, &leagues, &masteries);
    Ok(())
}

fn progress_bar(len: usize, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len.min(service::MAX_MATCH_COUNT * 2) as u64);
    pb.set_message("Fetching match details");
    pb
}

/// Matches fetched for both improvement windows, after the service clamps the
/// window size.
fn improvement_fetch_len(window: usize) -> usize {
    window.min(service::MAX_MATCH_COUNT) * 2
}

fn short_puuid(puuid: &str) -> &str {
    puuid.get(..8).unwrap_or(puuid)
}
