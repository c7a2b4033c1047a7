use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Why an algorithm name was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmUnavailable {
    /// Recognized, but disabled for now.
    NotYetAvailable,
    Unknown,
}

/// Rejections raised while generating a fixture list.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(
    tag = "kind",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum ScheduleRejection {
    #[error("league needs at least {required} teams, roster has {actual}")]
    InsufficientTeams { required: u32, actual: u32 },

    #[error("league {league_id} already has a generated schedule")]
    AlreadyScheduled { league_id: Uuid },

    #[error("invalid schedule dates (start: {start_date:?}, end: {end_date:?})")]
    InvalidDates {
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    },

    #[error(
        "{required_matches} matches need {required_days} days, only {available_days} available"
    )]
    InsufficientDays {
        required_matches: u32,
        required_days: u32,
        available_days: u32,
    },

    #[error("team {team_id} is not on this league's roster")]
    TeamNotInLeague {
        team_id: Uuid,
        team_league_id: Option<Uuid>,
    },

    #[error("team {team_id} appears more than once in the roster")]
    DuplicateTeam { team_id: Uuid },

    #[error("unsupported scheduling algorithm {algorithm:?} ({reason:?})")]
    UnsupportedAlgorithm {
        algorithm: String,
        reason: AlgorithmUnavailable,
    },

    #[error("matches per day must be positive, got {value}")]
    InvalidMatchesPerDay { value: i64 },
}

impl ScheduleRejection {
    /// Stable machine-readable identifier for callers.
    pub fn code(&self) -> &'static str {
        match self {
            ScheduleRejection::InsufficientTeams { .. } => "INSUFFICIENT_TEAMS",
            ScheduleRejection::AlreadyScheduled { .. } => "ALREADY_SCHEDULED",
            ScheduleRejection::InvalidDates { .. } => "INVALID_DATES",
            ScheduleRejection::InsufficientDays { .. } => "INSUFFICIENT_DAYS",
            ScheduleRejection::TeamNotInLeague { .. } => "TEAM_NOT_IN_LEAGUE",
            ScheduleRejection::DuplicateTeam { .. } => "DUPLICATE_TEAM",
            ScheduleRejection::UnsupportedAlgorithm { .. } => "UNSUPPORTED_ALGORITHM",
            ScheduleRejection::InvalidMatchesPerDay { .. } => "INVALID_MATCHES_PER_DAY",
        }
    }
}

/// What exactly is wrong with a malformed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetFault {
    #[error("no sets submitted")]
    Empty,
    #[error("team score sequences differ in length")]
    LengthMismatch,
    #[error("more sets than the match format allows")]
    TooManySets,
    #[error("negative score")]
    NegativeScore,
    #[error("score above the ceiling")]
    AboveCeiling,
    #[error("set ended in a tie")]
    Tie,
    #[error("unplayed set before a played one")]
    Unplayed,
    #[error("set played after the match was decided")]
    PlayedAfterDecided,
}

/// Rejections raised while evaluating a submitted score.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(
    tag = "kind",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum ResultRejection {
    /// `set` is the 1-based set number, absent when the fault concerns the
    /// score as a whole.
    #[error("invalid set{}: {fault}", set_label(.set))]
    InvalidSet { set: Option<usize>, fault: SetFault },

    #[error("set {set} won by {margin}, minimum margin is {required}")]
    InsufficientMargin {
        set: usize,
        margin: u32,
        required: u32,
    },

    #[error("no side reached {required} sets ({sets_won_a}-{sets_won_b})")]
    NoWinner {
        sets_won_a: u32,
        sets_won_b: u32,
        required: u32,
    },
}

impl ResultRejection {
    pub fn code(&self) -> &'static str {
        match self {
            ResultRejection::InvalidSet { .. } => "INVALID_SET",
            ResultRejection::InsufficientMargin { .. } => "INSUFFICIENT_MARGIN",
            ResultRejection::NoWinner { .. } => "NO_WINNER",
        }
    }
}

fn set_label(set: &Option<usize>) -> String {
    match set {
        Some(n) => format!(" {n}"),
        None => String::new(),
    }
}
