use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::TeamRow;

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    name: &str,
    league_id: Option<Uuid>,
) -> SqlxResult<TeamRow> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        INSERT INTO teams (name, league_id)
        VALUES ($1, $2)
        RETURNING id, name, league_id, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(league_id)
    .fetch_one(executor)
    .await
}

pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[Uuid],
) -> SqlxResult<Vec<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT id, name, league_id, created_at, updated_at
        FROM teams
        WHERE id = ANY($1)
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

/// Appends a team to the end of a league's roster. Re-adding a rostered team
/// keeps its original position.
pub async fn add_to_roster<'e>(
    executor: impl PgExecutor<'e>,
    league_id: Uuid,
    team_id: Uuid,
) -> SqlxResult<i32> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO league_roster (league_id, team_id, position)
        SELECT $1, $2, COALESCE(MAX(position) + 1, 0)
        FROM league_roster
        WHERE league_id = $1
        ON CONFLICT (league_id, team_id) DO UPDATE SET position = league_roster.position
        RETURNING position
        "#,
    )
    .bind(league_id)
    .bind(team_id)
    .fetch_one(executor)
    .await
}

/// The league's roster in roster order. Teams that were reassigned to another
/// league stay on the roster and surface with their current `league_id`.
pub async fn list_roster<'e>(
    executor: impl PgExecutor<'e>,
    league_id: Uuid,
) -> SqlxResult<Vec<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT t.id, t.name, t.league_id, t.created_at, t.updated_at
        FROM league_roster r
        JOIN teams t ON t.id = r.team_id
        WHERE r.league_id = $1
        ORDER BY r.position ASC
        "#,
    )
    .bind(league_id)
    .fetch_all(executor)
    .await
}
