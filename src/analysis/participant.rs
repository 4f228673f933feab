use crate::api::models::{MatchDto, ParticipantDto};

/// The slice of a participant's match performance that the statistics use.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRecord {
    pub puuid: String,
    /// Empty when upstream omitted it.
    pub champion_name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    /// Lane minions.
    pub primary_creep_score: u32,
    /// Neutral monsters; absent upstream means 0.
    pub secondary_creep_score: u32,
    pub vision_score: f64,
    pub gold_earned: f64,
    pub damage_to_champions: f64,
    pub win: bool,
}

impl ParticipantRecord {
    pub fn creep_score(&self) -> u32 {
        self.primary_creep_score + self.secondary_creep_score
    }
}

impl From<&ParticipantDto> for ParticipantRecord {
    fn from(p: &ParticipantDto) -> Self {
        ParticipantRecord {
            puuid: p.puuid.clone(),
            champion_name: p.champion_name.clone(),
            kills: p.kills,
            deaths: p.deaths,
            assists: p.assists,
            primary_creep_score: p.total_minions_killed,
            secondary_creep_score: p.neutral_minions_killed,
            vision_score: p.vision_score,
            gold_earned: p.gold_earned,
            damage_to_champions: p.total_damage_dealt_to_champions,
            win: p.win,
        }
    }
}

/// Finds `puuid` among the match participants. `None` means the player did
/// not take part in this match and the match should be skipped.
pub fn extract_participant(match_data: &MatchDto, puuid: &str) -> Option<ParticipantRecord> {
    match_data
        .info
        .participants
        .iter()
        .find(|p| p.puuid == puuid)
        .map(ParticipantRecord::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::fixtures::{match_with, participant};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_matching_participant() {
        let mut me = participant("me");
        me.kills = 4;
        me.deaths = 1;
        me.assists = 11;
        me.total_minions_killed = 150;
        me.neutral_minions_killed = 20;
        me.vision_score = 33.0;
        me.gold_earned = 11000.0;
        me.total_damage_dealt_to_champions = 18000.0;
        me.win = true;
        let m = match_with("NA1_1", vec![participant("other"), me]);

        let record = extract_participant(&m, "me").unwrap();
        assert_eq!(
            record,
            ParticipantRecord {
                puuid: "me".to_string(),
                champion_name: "Ahri".to_string(),
                kills: 4,
                deaths: 1,
                assists: 11,
                primary_creep_score: 150,
                secondary_creep_score: 20,
                vision_score: 33.0,
                gold_earned: 11000.0,
                damage_to_champions: 18000.0,
                win: true,
            }
        );
        assert_eq!(record.creep_score(), 170);
    }

    #[test]
    fn test_absent_player_is_none() {
        let m = match_with("NA1_2", vec![participant("a"), participant("b")]);
        assert_eq!(extract_participant(&m, "me"), None);
    }

    #[test]
    fn test_empty_participants_is_none() {
        let m = match_with("NA1_3", vec![]);
        assert_eq!(extract_participant(&m, "me"), None);
    }

    #[test]
    fn test_first_entry_wins_on_duplicates() {
        let mut first = participant("me");
        first.kills = 1;
        let mut second = participant("me");
        second.kills = 2;
        let m = match_with("NA1_4", vec![first, second]);
        assert_eq!(extract_participant(&m, "me").unwrap().kills, 1);
    }
}
