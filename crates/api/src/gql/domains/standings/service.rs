use engine::{standings, League, Match, Ranking, Team};
use infra::adapters::try_collect;
use infra::repos::{leagues, matches, rankings, teams};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ServiceError;

/// Stored standings of a league in presentation order. Reflects the last
/// recompute, not necessarily the latest results.
pub async fn get_standings(pool: &PgPool, league_id: Uuid) -> Result<Vec<Ranking>, ServiceError> {
    leagues::get_by_id(pool, league_id)
        .await?
        .ok_or(ServiceError::NotFound("League"))?;

    let mut table: Vec<Ranking> = try_collect(rankings::list_by_league(pool, league_id).await?)?;
    standings::rank(&mut table);

    Ok(table)
}

/// Rebuild and store a league's rankings from its completed matches.
///
/// Reads and the overwrite share one repeatable-read transaction, so the
/// stored table always matches a single snapshot of results.
pub async fn recompute_standings(
    pool: &PgPool,
    league_id: Uuid,
) -> Result<Vec<Ranking>, ServiceError> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
        .execute(&mut *tx)
        .await?;

    let row = leagues::get_by_id(&mut *tx, league_id)
        .await?
        .ok_or(ServiceError::NotFound("League"))?;
    let league = League::try_from(row)?;
    let roster: Vec<Team> = teams::list_roster(&mut *tx, league_id)
        .await?
        .into_iter()
        .map(Team::from)
        .collect();
    let completed: Vec<Match> =
        try_collect(matches::list_completed_by_league(&mut *tx, league_id).await?)?;

    let mut table = standings::recompute(&league, &roster, &completed);
    rankings::replace_for_league(&mut *tx, league_id, &table).await?;

    tx.commit().await?;

    tracing::info!(
        %league_id,
        teams = table.len(),
        matches = completed.len(),
        "Standings recomputed"
    );

    standings::rank(&mut table);
    Ok(table)
}
