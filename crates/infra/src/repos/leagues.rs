use chrono::NaiveDate;
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::LeagueRow;

#[derive(Debug, Clone, Copy, PartialEq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(type_name = "match_format", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    SingleSet,
    #[sqlx(rename = "best_of_3")]
    #[serde(rename = "best_of_3")]
    BestOf3,
    #[sqlx(rename = "best_of_5")]
    #[serde(rename = "best_of_5")]
    BestOf5,
}

impl From<MatchFormat> for engine::MatchFormat {
    fn from(value: MatchFormat) -> Self {
        match value {
            MatchFormat::SingleSet => engine::MatchFormat::SingleSet,
            MatchFormat::BestOf3 => engine::MatchFormat::BestOf3,
            MatchFormat::BestOf5 => engine::MatchFormat::BestOf5,
        }
    }
}

impl From<engine::MatchFormat> for MatchFormat {
    fn from(value: engine::MatchFormat) -> Self {
        match value {
            engine::MatchFormat::SingleSet => MatchFormat::SingleSet,
            engine::MatchFormat::BestOf3 => MatchFormat::BestOf3,
            engine::MatchFormat::BestOf5 => MatchFormat::BestOf5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(type_name = "schedule_state", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ScheduleState {
    NoSchedule,
    Scheduled,
}

impl From<ScheduleState> for engine::ScheduleState {
    fn from(value: ScheduleState) -> Self {
        match value {
            ScheduleState::NoSchedule => engine::ScheduleState::NoSchedule,
            ScheduleState::Scheduled => engine::ScheduleState::Scheduled,
        }
    }
}

impl From<engine::ScheduleState> for ScheduleState {
    fn from(value: engine::ScheduleState) -> Self {
        match value {
            engine::ScheduleState::NoSchedule => ScheduleState::NoSchedule,
            engine::ScheduleState::Scheduled => ScheduleState::Scheduled,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLeague {
    pub name: String,
    pub match_format: MatchFormat,
    pub min_teams: i32,
    pub max_teams: i32,
    pub points_per_win: i32,
    pub points_per_loss: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateLeague) -> SqlxResult<LeagueRow> {
    sqlx::query_as::<_, LeagueRow>(
        r#"
        INSERT INTO leagues (name, match_format, min_teams, max_teams, points_per_win, points_per_loss, start_date, end_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, name, match_format, min_teams, max_teams, points_per_win, points_per_loss,
                  start_date, end_date, schedule_state, created_at, updated_at
        "#,
    )
    .bind(data.name)
    .bind(data.match_format)
    .bind(data.min_teams)
    .bind(data.max_teams)
    .bind(data.points_per_win)
    .bind(data.points_per_loss)
    .bind(data.start_date)
    .bind(data.end_date)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<LeagueRow>> {
    sqlx::query_as::<_, LeagueRow>(
        r#"
        SELECT id, name, match_format, min_teams, max_teams, points_per_win, points_per_loss,
               start_date, end_date, schedule_state, created_at, updated_at
        FROM leagues
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Same as [`get_by_id`] but row-locks the league until the surrounding
/// transaction ends. Schedule lifecycle changes go through this.
pub async fn get_for_update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<LeagueRow>> {
    sqlx::query_as::<_, LeagueRow>(
        r#"
        SELECT id, name, match_format, min_teams, max_teams, points_per_win, points_per_loss,
               start_date, end_date, schedule_state, created_at, updated_at
        FROM leagues
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Moves the league from `no_schedule` to `scheduled`. Returns false when the
/// league was not in `no_schedule`, leaving it untouched.
pub async fn mark_scheduled<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query(
        r#"
        UPDATE leagues
        SET schedule_state = 'scheduled', updated_at = NOW()
        WHERE id = $1 AND schedule_state = 'no_schedule'
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() == 1)
}

pub async fn set_schedule_state<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    state: ScheduleState,
) -> SqlxResult<bool> {
    let result = sqlx::query(
        r#"
        UPDATE leagues
        SET schedule_state = $2, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(state)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}
