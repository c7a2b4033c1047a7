//! Row to entity conversions. Rows that violate an entity invariant surface
//! as [`sqlx::Error::Decode`] so callers handle them like any other read
//! failure.

use engine::{League, Match, MatchResult, Ranking, Team};

use crate::models::{LeagueRow, MatchRow, RankingRow, TeamRow};
use crate::repos::MatchStatus;

fn decode_error(message: String) -> sqlx::Error {
    sqlx::Error::Decode(message.into())
}

fn to_u32(value: i32, column: &str) -> Result<u32, sqlx::Error> {
    u32::try_from(value).map_err(|_| decode_error(format!("negative {column}: {value}")))
}

fn to_scores(values: Vec<i32>, column: &str) -> Result<Vec<u32>, sqlx::Error> {
    values.into_iter().map(|v| to_u32(v, column)).collect()
}

pub fn to_db_count(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

pub fn to_db_scores(scores: &[u32]) -> Vec<i32> {
    scores.iter().copied().map(to_db_count).collect()
}

impl TryFrom<LeagueRow> for League {
    type Error = sqlx::Error;

    fn try_from(row: LeagueRow) -> Result<Self, Self::Error> {
        Ok(League {
            id: row.id,
            name: row.name,
            match_format: row.match_format.into(),
            min_teams: to_u32(row.min_teams, "min_teams")?,
            max_teams: to_u32(row.max_teams, "max_teams")?,
            points_per_win: to_u32(row.points_per_win, "points_per_win")?,
            points_per_loss: to_u32(row.points_per_loss, "points_per_loss")?,
            start_date: row.start_date,
            end_date: row.end_date,
            schedule_state: row.schedule_state.into(),
        })
    }
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team {
            id: row.id,
            name: row.name,
            league_id: row.league_id,
        }
    }
}

impl TryFrom<MatchRow> for Match {
    type Error = sqlx::Error;

    fn try_from(row: MatchRow) -> Result<Self, Self::Error> {
        let result = match (row.team_a_score, row.team_b_score, row.winner_id) {
            (Some(a), Some(b), Some(winner)) => Some(MatchResult {
                team_a_score: to_scores(a, "team_a_score")?,
                team_b_score: to_scores(b, "team_b_score")?,
                winner,
            }),
            _ if row.status == MatchStatus::Completed => {
                return Err(decode_error(format!(
                    "completed match {} has no result",
                    row.id
                )))
            }
            _ => None,
        };

        Ok(Match {
            id: row.id,
            league_id: row.league_id,
            team_a: row.team_a_id,
            team_b: row.team_b_id,
            scheduled_date: row.scheduled_date,
            location: row.location,
            status: row.status.into(),
            result,
            generated: row.generated,
        })
    }
}

impl TryFrom<RankingRow> for Ranking {
    type Error = sqlx::Error;

    fn try_from(row: RankingRow) -> Result<Self, Self::Error> {
        Ok(Ranking {
            league_id: row.league_id,
            team_id: row.team_id,
            points: to_u32(row.points, "points")?,
            matches_played: to_u32(row.matches_played, "matches_played")?,
            matches_won: to_u32(row.matches_won, "matches_won")?,
            matches_lost: to_u32(row.matches_lost, "matches_lost")?,
            sets_won: to_u32(row.sets_won, "sets_won")?,
            sets_lost: to_u32(row.sets_lost, "sets_lost")?,
        })
    }
}

/// Converts a batch of rows, failing on the first bad one.
pub fn try_collect<R, T>(rows: Vec<R>) -> Result<Vec<T>, sqlx::Error>
where
    T: TryFrom<R, Error = sqlx::Error>,
{
    rows.into_iter().map(T::try_from).collect()
}
