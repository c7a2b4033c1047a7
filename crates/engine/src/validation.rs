//! Schedule constraint rules. Both schedule generation and the pre-flight
//! preview go through [`check_schedule`], so the rules exist exactly once.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

use crate::entities::{League, Team};
use crate::error::{AlgorithmUnavailable, ScheduleRejection};
use crate::schedule::{ScheduleAlgorithm, ScheduleConstraints};

/// Smallest roster a round robin can be built from, whatever the league says.
pub const MIN_SCHEDULABLE_TEAMS: u32 = 2;

/// Capacity figures for a schedule request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequirements {
    pub required_matches: u32,
    pub required_days: u32,
    pub available_days: u32,
}

/// A request that passed every check, with the resolved date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub matches_per_day: u32,
    pub requirements: ScheduleRequirements,
}

/// Matches needed for a single round robin over `teams` teams.
///
/// Saturates at `u32::MAX` for rosters too large to count in a `u32`.
pub fn required_matches(teams: u32) -> u32 {
    let n = u64::from(teams);
    let pairs = n * n.saturating_sub(1) / 2;
    u32::try_from(pairs).unwrap_or(u32::MAX)
}

/// Days needed to play `matches` at `matches_per_day`, rounded up.
pub fn required_days(matches: u32, matches_per_day: u32) -> u32 {
    matches.div_ceil(matches_per_day)
}

/// Calendar days from `start` to `end`, both inclusive.
pub fn available_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let span = (end - start).num_days();
    u32::try_from(span + 1).unwrap_or(0)
}

/// Run every schedule rule against a league, its roster and the request.
///
/// Input checks (algorithm, throughput, roster membership) come first; the
/// league preconditions follow in a fixed order and the first failure wins:
/// team count, existing schedule, dates, day capacity.
pub fn check_schedule(
    league: &League,
    roster: &[Team],
    constraints: &ScheduleConstraints,
) -> Result<ScheduleWindow, ScheduleRejection> {
    if constraints.algorithm == ScheduleAlgorithm::DoubleRoundRobin {
        return Err(ScheduleRejection::UnsupportedAlgorithm {
            algorithm: constraints.algorithm.as_str().to_string(),
            reason: AlgorithmUnavailable::NotYetAvailable,
        });
    }

    if constraints.matches_per_day == 0 {
        return Err(ScheduleRejection::InvalidMatchesPerDay { value: 0 });
    }

    check_roster(league, roster)?;

    let team_count = u32::try_from(roster.len()).unwrap_or(u32::MAX);
    let minimum = league.min_teams.max(MIN_SCHEDULABLE_TEAMS);
    if team_count < minimum {
        return Err(ScheduleRejection::InsufficientTeams {
            required: minimum,
            actual: team_count,
        });
    }

    league.schedule_state.schedule(league.id)?;

    let start_date = constraints.start_date.or(league.start_date);
    let end_date = constraints.end_date.or(league.end_date);
    let (start_date, end_date) = match (start_date, end_date) {
        (Some(start), Some(end)) if end >= start => (start, end),
        _ => {
            return Err(ScheduleRejection::InvalidDates {
                start_date,
                end_date,
            })
        }
    };

    let matches = required_matches(team_count);
    let requirements = ScheduleRequirements {
        required_matches: matches,
        required_days: required_days(matches, constraints.matches_per_day),
        available_days: available_days(start_date, end_date),
    };
    if requirements.available_days < requirements.required_days {
        return Err(ScheduleRejection::InsufficientDays {
            required_matches: requirements.required_matches,
            required_days: requirements.required_days,
            available_days: requirements.available_days,
        });
    }

    Ok(ScheduleWindow {
        start_date,
        end_date,
        matches_per_day: constraints.matches_per_day,
        requirements,
    })
}

fn check_roster(league: &League, roster: &[Team]) -> Result<(), ScheduleRejection> {
    let mut seen = HashSet::with_capacity(roster.len());
    for team in roster {
        if team.league_id != Some(league.id) {
            return Err(ScheduleRejection::TeamNotInLeague {
                team_id: team.id,
                team_league_id: team.league_id,
            });
        }
        if !seen.insert(team.id) {
            return Err(ScheduleRejection::DuplicateTeam { team_id: team.id });
        }
    }
    Ok(())
}
