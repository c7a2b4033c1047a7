use sqlx::{PgConnection, PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::adapters::to_db_count;
use crate::models::RankingRow;

/// Stored rankings of a league in roster order. Callers apply presentation
/// ordering on top.
pub async fn list_by_league<'e>(
    executor: impl PgExecutor<'e>,
    league_id: Uuid,
) -> SqlxResult<Vec<RankingRow>> {
    sqlx::query_as::<_, RankingRow>(
        r#"
        SELECT rk.league_id, rk.team_id, rk.points, rk.matches_played, rk.matches_won,
               rk.matches_lost, rk.sets_won, rk.sets_lost, rk.computed_at
        FROM rankings rk
        LEFT JOIN league_roster r ON r.league_id = rk.league_id AND r.team_id = rk.team_id
        WHERE rk.league_id = $1
        ORDER BY r.position ASC NULLS LAST, rk.team_id ASC
        "#,
    )
    .bind(league_id)
    .fetch_all(executor)
    .await
}

pub async fn delete_for_league<'e>(executor: impl PgExecutor<'e>, league_id: Uuid) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM rankings WHERE league_id = $1")
        .bind(league_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

/// Overwrites every ranking of a league. Uses several statements, so run it
/// on a transaction connection.
pub async fn replace_for_league(
    conn: &mut PgConnection,
    league_id: Uuid,
    rankings: &[engine::Ranking],
) -> SqlxResult<Vec<RankingRow>> {
    delete_for_league(&mut *conn, league_id).await?;

    let mut rows = Vec::with_capacity(rankings.len());
    for ranking in rankings {
        let row = sqlx::query_as::<_, RankingRow>(
            r#"
            INSERT INTO rankings (league_id, team_id, points, matches_played, matches_won,
                                  matches_lost, sets_won, sets_lost)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING league_id, team_id, points, matches_played, matches_won,
                      matches_lost, sets_won, sets_lost, computed_at
            "#,
        )
        .bind(league_id)
        .bind(ranking.team_id)
        .bind(to_db_count(ranking.points))
        .bind(to_db_count(ranking.matches_played))
        .bind(to_db_count(ranking.matches_won))
        .bind(to_db_count(ranking.matches_lost))
        .bind(to_db_count(ranking.sets_won))
        .bind(to_db_count(ranking.sets_lost))
        .fetch_one(&mut *conn)
        .await?;

        rows.push(row);
    }

    Ok(rows)
}
