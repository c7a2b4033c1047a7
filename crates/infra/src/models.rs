use crate::repos::leagues::{MatchFormat, ScheduleState};
use crate::repos::matches::MatchStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LeagueRow {
    pub id: Uuid,
    pub name: String,
    pub match_format: MatchFormat,
    pub min_teams: i32,
    pub max_teams: i32,
    pub points_per_win: i32,
    pub points_per_loss: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub schedule_state: ScheduleState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TeamRow {
    pub id: Uuid,
    pub name: String,
    pub league_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatchRow {
    pub id: Uuid,
    pub league_id: Uuid,
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
    pub scheduled_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub status: MatchStatus,
    pub team_a_score: Option<Vec<i32>>,
    pub team_b_score: Option<Vec<i32>>,
    pub winner_id: Option<Uuid>,
    pub generated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RankingRow {
    pub league_id: Uuid,
    pub team_id: Uuid,
    pub points: i32,
    pub matches_played: i32,
    pub matches_won: i32,
    pub matches_lost: i32,
    pub sets_won: i32,
    pub sets_lost: i32,
    pub computed_at: DateTime<Utc>,
}
