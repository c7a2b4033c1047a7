use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScheduleRejection;

/// How many sets decide a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    SingleSet,
    #[serde(rename = "best_of_3")]
    BestOf3,
    #[serde(rename = "best_of_5")]
    BestOf5,
}

impl MatchFormat {
    /// Upper bound on the number of sets a result may carry.
    pub fn max_sets(self) -> usize {
        match self {
            MatchFormat::SingleSet => 1,
            MatchFormat::BestOf3 => 3,
            MatchFormat::BestOf5 => 5,
        }
    }

    /// Sets a side has to win to take the match.
    pub fn majority(self) -> usize {
        self.max_sets() / 2 + 1
    }
}

/// Scheduling lifecycle of a league. Only schedule generation moves a league
/// to `Scheduled`, and only clearing the schedule moves it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleState {
    #[default]
    NoSchedule,
    Scheduled,
}

impl ScheduleState {
    /// Transition taken when a fixture list is generated.
    pub fn schedule(self, league_id: Uuid) -> Result<ScheduleState, ScheduleRejection> {
        match self {
            ScheduleState::NoSchedule => Ok(ScheduleState::Scheduled),
            ScheduleState::Scheduled => Err(ScheduleRejection::AlreadyScheduled { league_id }),
        }
    }

    /// Transition taken when the generated fixtures are removed. Clearing a
    /// league without a schedule leaves it as it is.
    pub fn clear(self) -> ScheduleState {
        ScheduleState::NoSchedule
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: Uuid,
    pub name: String,
    pub match_format: MatchFormat,
    pub min_teams: u32,
    pub max_teams: u32,
    pub points_per_win: u32,
    pub points_per_loss: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub schedule_state: ScheduleState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    /// The league whose roster this team is on, if any.
    pub league_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Unscheduled,
    Scheduled,
    InProgress,
    Completed,
    Canceled,
    Postponed,
}

/// A finalized, validated score. Both sequences hold exactly the sets that
/// were played, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub team_a_score: Vec<u32>,
    pub team_b_score: Vec<u32>,
    pub winner: Uuid,
}

impl MatchResult {
    pub fn sets_played(&self) -> usize {
        self.team_a_score.len()
    }

    /// Sets won by team A and team B respectively.
    pub fn set_tally(&self) -> (u32, u32) {
        self.team_a_score
            .iter()
            .zip(&self.team_b_score)
            .fold((0, 0), |(a, b), (x, y)| {
                if x > y {
                    (a + 1, b)
                } else if y > x {
                    (a, b + 1)
                } else {
                    (a, b)
                }
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: Uuid,
    pub league_id: Uuid,
    pub team_a: Uuid,
    pub team_b: Uuid,
    pub scheduled_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub status: MatchStatus,
    pub result: Option<MatchResult>,
    /// Set for fixtures produced by schedule generation.
    pub generated: bool,
}

impl Match {
    pub fn involves(&self, team_id: Uuid) -> bool {
        self.team_a == team_id || self.team_b == team_id
    }

    /// The completed result, if this match has one.
    pub fn completed_result(&self) -> Option<&MatchResult> {
        match self.status {
            MatchStatus::Completed => self.result.as_ref(),
            _ => None,
        }
    }
}

/// Standings row for one team in one league. Always produced wholesale by
/// [`crate::standings::recompute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub league_id: Uuid,
    pub team_id: Uuid,
    pub points: u32,
    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
}

impl Ranking {
    pub fn empty(league_id: Uuid, team_id: Uuid) -> Self {
        Self {
            league_id,
            team_id,
            points: 0,
            matches_played: 0,
            matches_won: 0,
            matches_lost: 0,
            sets_won: 0,
            sets_lost: 0,
        }
    }
}
