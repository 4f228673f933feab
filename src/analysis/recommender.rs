use serde::Serialize;

use super::trend::TrendReport;

/// Win rate swings smaller than this, in percentage points, are noise.
const WIN_RATE_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Area {
    #[serde(rename = "KDA")]
    Kda,
    #[serde(rename = "CS")]
    CreepScore,
    Vision,
    #[serde(rename = "Win Rate")]
    WinRate,
    General,
}

impl Area {
    pub fn label(&self) -> &'static str {
        match self {
            Area::Kda => "KDA",
            Area::CreepScore => "CS",
            Area::Vision => "Vision",
            Area::WinRate => "Win Rate",
            Area::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Praise,
    Tip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub area: Area,
    pub severity: Severity,
    pub message: &'static str,
}

impl Recommendation {
    fn new(area: Area, severity: Severity, message: &'static str) -> Self {
        Recommendation {
            area,
            severity,
            message,
        }
    }
}

/// How a metric's delta should be read: for deaths, going down is good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Improved,
    Declined,
    Unchanged,
}

impl Direction {
    pub fn of(delta: f64, higher_is_better: bool) -> Self {
        if delta == 0.0 {
            Direction::Unchanged
        } else if (delta > 0.0) == higher_is_better {
            Direction::Improved
        } else {
            Direction::Declined
        }
    }
}

pub struct ImprovementAdvisor;

impl ImprovementAdvisor {
    pub fn recommendations(report: &TrendReport) -> Vec<Recommendation> {
        let mut recs = Vec::new();

        if report.kda_difference < 0.0 {
            recs.push(Recommendation::new(
                Area::Kda,
                Severity::Warning,
                "Your KDA has decreased recently. Focus on positioning and map awareness to reduce deaths.",
            ));
        }

        if report.cs_difference < 0.0 {
            recs.push(Recommendation::new(
                Area::CreepScore,
                Severity::Warning,
                "Your CS per minute has decreased. Practice last hitting and managing waves.",
            ));
        } else if report.cs_difference > 0.0 {
            recs.push(Recommendation::new(
                Area::CreepScore,
                Severity::Praise,
                "Great improvement in CS! Keep it up and try to maintain consistent farm throughout the game.",
            ));
        }

        if report.vision_score_difference < 0.0 {
            recs.push(Recommendation::new(
                Area::Vision,
                Severity::Warning,
                "Your vision control has decreased. Place more wards and buy control wards regularly.",
            ));
        }

        if report.win_rate_difference < -WIN_RATE_THRESHOLD {
            recs.push(Recommendation::new(
                Area::WinRate,
                Severity::Warning,
                "Your win rate has significantly decreased. Consider focusing on a smaller champion pool.",
            ));
        } else if report.win_rate_difference > WIN_RATE_THRESHOLD {
            recs.push(Recommendation::new(
                Area::WinRate,
                Severity::Praise,
                "Impressive win rate improvement! Focus on what's working and continue to refine your gameplay.",
            ));
        }

        recs.push(Recommendation::new(
            Area::General,
            Severity::Tip,
            "Review your replays to identify patterns in your gameplay that could be improved.",
        ));
        recs.push(Recommendation::new(
            Area::General,
            Severity::Tip,
            "Try to focus on 2-3 champions in your main role to improve consistency.",
        ));

        recs
    }
}
