use chrono::NaiveDate;
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::adapters::to_db_scores;
use crate::models::MatchRow;

#[derive(Debug, Clone, Copy, PartialEq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(type_name = "match_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Unscheduled,
    Scheduled,
    InProgress,
    Completed,
    Canceled,
    Postponed,
}

impl From<MatchStatus> for engine::MatchStatus {
    fn from(value: MatchStatus) -> Self {
        match value {
            MatchStatus::Unscheduled => engine::MatchStatus::Unscheduled,
            MatchStatus::Scheduled => engine::MatchStatus::Scheduled,
            MatchStatus::InProgress => engine::MatchStatus::InProgress,
            MatchStatus::Completed => engine::MatchStatus::Completed,
            MatchStatus::Canceled => engine::MatchStatus::Canceled,
            MatchStatus::Postponed => engine::MatchStatus::Postponed,
        }
    }
}

impl From<engine::MatchStatus> for MatchStatus {
    fn from(value: engine::MatchStatus) -> Self {
        match value {
            engine::MatchStatus::Unscheduled => MatchStatus::Unscheduled,
            engine::MatchStatus::Scheduled => MatchStatus::Scheduled,
            engine::MatchStatus::InProgress => MatchStatus::InProgress,
            engine::MatchStatus::Completed => MatchStatus::Completed,
            engine::MatchStatus::Canceled => MatchStatus::Canceled,
            engine::MatchStatus::Postponed => MatchStatus::Postponed,
        }
    }
}

const MATCH_COLUMNS: &str = "id, league_id, team_a_id, team_b_id, scheduled_date, location, status, \
     team_a_score, team_b_score, winner_id, generated, created_at, updated_at";

/// Inserts a batch of unplayed fixtures under the ids they already carry,
/// in one statement. Results are not written; a fixture never has one.
pub async fn insert_fixtures<'e>(
    executor: impl PgExecutor<'e>,
    fixtures: &[engine::Match],
) -> SqlxResult<u64> {
    let ids: Vec<Uuid> = fixtures.iter().map(|m| m.id).collect();
    let league_ids: Vec<Uuid> = fixtures.iter().map(|m| m.league_id).collect();
    let team_a_ids: Vec<Uuid> = fixtures.iter().map(|m| m.team_a).collect();
    let team_b_ids: Vec<Uuid> = fixtures.iter().map(|m| m.team_b).collect();
    let dates: Vec<Option<NaiveDate>> = fixtures.iter().map(|m| m.scheduled_date).collect();
    let locations: Vec<Option<String>> = fixtures.iter().map(|m| m.location.clone()).collect();
    let statuses: Vec<MatchStatus> = fixtures.iter().map(|m| m.status.into()).collect();
    let generated: Vec<bool> = fixtures.iter().map(|m| m.generated).collect();

    let result = sqlx::query(
        r#"
        INSERT INTO matches (id, league_id, team_a_id, team_b_id, scheduled_date, location, status, generated)
        SELECT * FROM UNNEST($1::uuid[], $2::uuid[], $3::uuid[], $4::uuid[], $5::date[],
                             $6::text[], $7::match_status[], $8::bool[])
        "#,
    )
    .bind(ids)
    .bind(league_ids)
    .bind(team_a_ids)
    .bind(team_b_ids)
    .bind(dates)
    .bind(locations)
    .bind(statuses)
    .bind(generated)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(&format!(
        r#"
        SELECT {MATCH_COLUMNS}
        FROM matches
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn get_for_update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(&format!(
        r#"
        SELECT {MATCH_COLUMNS}
        FROM matches
        WHERE id = $1
        FOR UPDATE
        "#
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_league<'e>(
    executor: impl PgExecutor<'e>,
    league_id: Uuid,
) -> SqlxResult<Vec<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(&format!(
        r#"
        SELECT {MATCH_COLUMNS}
        FROM matches
        WHERE league_id = $1
        ORDER BY scheduled_date ASC NULLS LAST, created_at ASC, id ASC
        "#
    ))
    .bind(league_id)
    .fetch_all(executor)
    .await
}

pub async fn list_completed_by_league<'e>(
    executor: impl PgExecutor<'e>,
    league_id: Uuid,
) -> SqlxResult<Vec<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(&format!(
        r#"
        SELECT {MATCH_COLUMNS}
        FROM matches
        WHERE league_id = $1 AND status = 'completed'
        "#
    ))
    .bind(league_id)
    .fetch_all(executor)
    .await
}

/// Writes a finalized result and marks the match completed in one row update.
pub async fn record_result<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    result: &engine::MatchResult,
) -> SqlxResult<MatchRow> {
    sqlx::query_as::<_, MatchRow>(&format!(
        r#"
        UPDATE matches
        SET status = 'completed',
            team_a_score = $2,
            team_b_score = $3,
            winner_id = $4,
            updated_at = NOW()
        WHERE id = $1
        RETURNING {MATCH_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(to_db_scores(&result.team_a_score))
    .bind(to_db_scores(&result.team_b_score))
    .bind(result.winner)
    .fetch_one(executor)
    .await
}

/// Deletes the generated fixtures of a league, returning how many went.
/// Manually created matches are kept.
pub async fn delete_generated<'e>(executor: impl PgExecutor<'e>, league_id: Uuid) -> SqlxResult<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM matches
        WHERE league_id = $1 AND generated = TRUE
        "#,
    )
    .bind(league_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
