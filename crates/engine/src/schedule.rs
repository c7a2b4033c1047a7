use chrono::{Days, NaiveDate};
use std::str::FromStr;
use uuid::Uuid;

use crate::entities::{League, Match, MatchStatus, Team};
use crate::error::{AlgorithmUnavailable, ScheduleRejection};
use crate::validation::{check_schedule, ScheduleWindow};

pub const DEFAULT_MATCHES_PER_DAY: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleAlgorithm {
    /// Every team meets every other team once.
    RoundRobin,
    /// Home and away legs. Recognized but not enabled yet.
    DoubleRoundRobin,
}

impl ScheduleAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleAlgorithm::RoundRobin => "round-robin",
            ScheduleAlgorithm::DoubleRoundRobin => "double-round-robin",
        }
    }
}

impl FromStr for ScheduleAlgorithm {
    type Err = ScheduleRejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "round-robin" => Ok(ScheduleAlgorithm::RoundRobin),
            "double-round-robin" => Ok(ScheduleAlgorithm::DoubleRoundRobin),
            other => Err(ScheduleRejection::UnsupportedAlgorithm {
                algorithm: other.to_string(),
                reason: AlgorithmUnavailable::Unknown,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConstraints {
    pub algorithm: ScheduleAlgorithm,
    /// Falls back to the league's start date when absent.
    pub start_date: Option<NaiveDate>,
    /// Falls back to the league's end date when absent.
    pub end_date: Option<NaiveDate>,
    pub matches_per_day: u32,
    pub venue: Option<String>,
}

impl ScheduleConstraints {
    pub fn round_robin(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            algorithm: ScheduleAlgorithm::RoundRobin,
            start_date: Some(start_date),
            end_date: Some(end_date),
            matches_per_day: DEFAULT_MATCHES_PER_DAY,
            venue: None,
        }
    }

    pub fn with_matches_per_day(mut self, matches_per_day: u32) -> Self {
        self.matches_per_day = matches_per_day;
        self
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }
}

/// Roster index pairs of a single round robin, `(i, j)` with `i < j`, in
/// lexicographic order: (0,1), (0,2), .., (0,n-1), (1,2), ..
pub fn round_robin_pairs(team_count: usize) -> Vec<(usize, usize)> {
    let capacity = team_count
        .checked_mul(team_count.saturating_sub(1))
        .map_or(0, |product| product / 2);
    let mut pairs = Vec::with_capacity(capacity);
    for i in 0..team_count {
        for j in (i + 1)..team_count {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Calendar slots for `fixtures` matches: `matches_per_day` per day from
/// `start_date` on, never past `end_date`. Returns fewer slots than asked
/// for when the window runs out.
pub fn assign_dates(
    fixtures: usize,
    start_date: NaiveDate,
    end_date: NaiveDate,
    matches_per_day: u32,
) -> Vec<NaiveDate> {
    let per_day = matches_per_day.max(1) as usize;
    let mut dates = Vec::with_capacity(fixtures);
    let mut day = start_date;

    while dates.len() < fixtures && day <= end_date {
        let today = per_day.min(fixtures - dates.len());
        dates.extend(std::iter::repeat(day).take(today));

        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }

    dates
}

/// Build the full fixture list for `league` over `roster`.
///
/// The returned matches are in pairing order, all `Scheduled`, all marked as
/// generated, none with a result. Persisting them together with the
/// league's transition to `Scheduled` is up to the caller.
pub fn generate(
    league: &League,
    roster: &[Team],
    constraints: &ScheduleConstraints,
) -> Result<Vec<Match>, ScheduleRejection> {
    let window = check_schedule(league, roster, constraints)?;
    Ok(build_fixtures(league, roster, &window, constraints.venue.as_deref()))
}

fn build_fixtures(
    league: &League,
    roster: &[Team],
    window: &ScheduleWindow,
    venue: Option<&str>,
) -> Vec<Match> {
    let pairs = round_robin_pairs(roster.len());
    let dates = assign_dates(
        pairs.len(),
        window.start_date,
        window.end_date,
        window.matches_per_day,
    );

    let matches: Vec<Match> = pairs
        .into_iter()
        .zip(dates)
        .map(|((i, j), date)| Match {
            id: Uuid::new_v4(),
            league_id: league.id,
            team_a: roster[i].id,
            team_b: roster[j].id,
            scheduled_date: Some(date),
            location: venue.map(str::to_string),
            status: MatchStatus::Scheduled,
            result: None,
            generated: true,
        })
        .collect();

    tracing::debug!(
        league_id = %league.id,
        fixtures = matches.len(),
        required_days = window.requirements.required_days,
        available_days = window.requirements.available_days,
        "Built round-robin fixture list"
    );

    matches
}
