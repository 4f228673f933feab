use crate::analysis::aggregate::AggregatedStats;
use crate::analysis::history::MatchSummary;
use crate::analysis::recommender::{Direction, Recommendation, Severity};
use crate::analysis::trend::TrendReport;
use crate::api::models::{AccountDto, ChampionMasteryDto, LeagueEntryDto, SummonerDto};
use crate::error::AppError;
use colored::*;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    champion: String,
    result: String,
    #[tabled(rename = "K/D/A")]
    kda_line: String,
    #[tabled(rename = "KDA")]
    kda: String,
    #[tabled(rename = "CS")]
    cs: String,
    queue: String,
    duration: String,
    played: String,
}

#[derive(Tabled)]
struct StatRow {
    metric: String,
    value: String,
}

#[derive(Tabled)]
struct TrendRow {
    metric: String,
    change: String,
    trend: String,
}

#[derive(Tabled)]
struct LeagueRow {
    queue: String,
    rank: String,
    #[tabled(rename = "LP")]
    lp: String,
    record: String,
    win_rate: String,
}

#[derive(Tabled)]
struct MasteryRow {
    champion_id: String,
    level: String,
    points: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_insufficient_data(what: &str) {
    println!(
        "{}",
        format!("Not enough match data to compute {}.", what).yellow()
    );
}

/// Pretty JSON on stdout, `null` for absent values.
pub fn display_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| AppError::JsonError(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

pub fn display_profile(
    account: &AccountDto,
    summoner: &SummonerDto,
    leagues: &[LeagueEntryDto],
    masteries: &[ChampionMasteryDto],
) {
    println!(
        "\n{}",
        format!("🎮 {}#{}", account.game_name, account.tag_line)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());
    println!("{} {}", "Summoner Level:".bold(), summoner.summoner_level);
    println!("{} {}\n", "Profile Icon:".bold(), summoner.profile_icon_id);

    if leagues.is_empty() {
        println!("{}\n", "Unranked".yellow());
    } else {
        let rows: Vec<LeagueRow> = leagues
            .iter()
            .map(|entry| LeagueRow {
                queue: queue_type_label(&entry.queue_type).to_string(),
                rank: format!("{} {}", entry.tier, entry.rank),
                lp: entry.league_points.to_string(),
                record: format!("{}W / {}L", entry.wins, entry.losses),
                win_rate: format!("{:.1}%", entry.win_rate_percent()),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }

    if !masteries.is_empty() {
        println!("{}", "Top Champion Masteries".bold().yellow());
        let rows: Vec<MasteryRow> = masteries
            .iter()
            .map(|m| MasteryRow {
                champion_id: m.champion_id.to_string(),
                level: m.champion_level.to_string(),
                points: m.champion_points.to_string(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }
}

fn queue_type_label(queue_type: &str) -> &str {
    match queue_type {
        "RANKED_SOLO_5x5" => "Ranked Solo/Duo",
        "RANKED_FLEX_SR" => "Ranked Flex",
        other => other,
    }
}

pub fn display_match_history(matches: &[MatchSummary]) {
    let total_matches = matches.len();
    if total_matches == 0 {
        display_insufficient_data("a match history");
        return;
    }

    let wins = matches.iter().filter(|m| m.won).count();
    let losses = total_matches - wins;
    let win_rate = (wins as f64 / total_matches as f64) * 100.0;

    println!(
        "\n{}",
        format!("📊 MATCH HISTORY (Last {} Games)", total_matches)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(80).cyan());
    println!(
        "{} {} W / {} L ({:.1}% WR)\n",
        "📈 Overall:".bold(),
        wins.to_string().green(),
        losses.to_string().red(),
        win_rate
    );

    let rows: Vec<MatchRow> = matches
        .iter()
        .enumerate()
        .map(|(idx, m)| MatchRow {
            number: format!("{}", idx + 1),
            champion: m.champion.clone(),
            result: if m.won {
                "WIN".green().to_string()
            } else {
                "LOSS".red().to_string()
            },
            kda_line: format!("{}/{}/{}", m.kills, m.deaths, m.assists),
            kda: format!("{:.2}", m.kda),
            cs: format!("{} ({:.1}/min)", m.creep_score, m.cs_per_minute),
            queue: m.queue.to_string(),
            duration: m.duration_label(),
            played: m
                .started_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_overview(stats: &AggregatedStats, games: usize) {
    println!(
        "\n{}",
        format!("📊 OVERVIEW (Last {} Games)", games).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let rows = vec![
        stat_row("Kills", stats.average_kills, ""),
        stat_row("Deaths", stats.average_deaths, ""),
        stat_row("Assists", stats.average_assists, ""),
        stat_row("KDA", stats.average_kda, ""),
        stat_row("CS", stats.average_cs, ""),
        stat_row("Vision Score", stats.average_vision_score, ""),
        stat_row("Gold Earned", stats.average_gold_earned, ""),
        stat_row("Damage to Champions", stats.average_damage_dealt, ""),
        stat_row("Win Rate", stats.win_rate_percent, "%"),
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn stat_row(metric: &str, value: f64, suffix: &str) -> StatRow {
    StatRow {
        metric: metric.to_string(),
        value: format!("{:.2}{}", value, suffix),
    }
}

pub fn display_improvement(report: &TrendReport, recommendations: &[Recommendation], window: usize) {
    println!(
        "\n{}",
        format!("📈 IMPROVEMENT (Last {} vs Previous {} Games)", window, window)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let rows = vec![
        trend_row("KDA", report.kda_difference, true, ""),
        trend_row("Deaths", report.death_difference, false, ""),
        trend_row("Assists", report.assist_difference, true, ""),
        trend_row("CS", report.cs_difference, true, ""),
        trend_row("Vision Score", report.vision_score_difference, true, ""),
        trend_row("Win Rate", report.win_rate_difference, true, "%"),
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "Recommendations".bold().yellow());
    for rec in recommendations {
        let marker = match rec.severity {
            Severity::Warning => "⚠️".red(),
            Severity::Praise => "🏆".green(),
            Severity::Tip => "💡".cyan(),
        };
        println!("  {} {}: {}", marker, rec.area.label().bold(), rec.message);
    }
    println!();
}

fn trend_row(metric: &str, delta: f64, higher_is_better: bool, suffix: &str) -> TrendRow {
    let trend = match Direction::of(delta, higher_is_better) {
        Direction::Improved => "▲ better".green().to_string(),
        Direction::Declined => "▼ worse".red().to_string(),
        Direction::Unchanged => "= same".normal().to_string(),
    };

    TrendRow {
        metric: metric.to_string(),
        change: format_delta(delta, suffix),
        trend,
    }
}

/// Signed two-decimal rendering, `+` on positive values.
pub fn format_delta(value: f64, suffix: &str) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.2}{}", sign, value, suffix)
}
