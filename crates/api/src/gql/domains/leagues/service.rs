use engine::{schedule, validation, League, Match, ScheduleConstraints, ScheduleRejection, Team};
use infra::adapters::try_collect;
use infra::repos::{leagues, matches, rankings, teams};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ServiceError;

pub async fn get_league(pool: &PgPool, league_id: Uuid) -> Result<League, ServiceError> {
    let row = leagues::get_by_id(pool, league_id)
        .await?
        .ok_or(ServiceError::NotFound("League"))?;

    Ok(League::try_from(row)?)
}

pub async fn list_matches(pool: &PgPool, league_id: Uuid) -> Result<Vec<Match>, ServiceError> {
    get_league(pool, league_id).await?;
    let rows = matches::list_by_league(pool, league_id).await?;

    Ok(try_collect(rows)?)
}

/// Validates a schedule request against the league without writing anything.
pub async fn preview_schedule(
    pool: &PgPool,
    league_id: Uuid,
    constraints: &ScheduleConstraints,
) -> Result<validation::ScheduleWindow, ServiceError> {
    let league = get_league(pool, league_id).await?;
    let roster: Vec<Team> = teams::list_roster(pool, league_id)
        .await?
        .into_iter()
        .map(Team::from)
        .collect();

    validation::check_schedule(&league, &roster, constraints).map_err(|rejection| {
        tracing::warn!(%league_id, code = rejection.code(), "Schedule preview rejected");
        rejection.into()
    })
}

/// Generate and persist the full fixture list of a league.
///
/// The league row stays locked for the whole transaction and the state flip
/// is conditional on `no_schedule`, so concurrent requests for the same
/// league produce exactly one schedule.
pub async fn generate_schedule(
    pool: &PgPool,
    league_id: Uuid,
    constraints: &ScheduleConstraints,
) -> Result<Vec<Match>, ServiceError> {
    let mut tx = pool.begin().await?;

    let row = leagues::get_for_update(&mut *tx, league_id)
        .await?
        .ok_or(ServiceError::NotFound("League"))?;
    let league = League::try_from(row)?;
    let roster: Vec<Team> = teams::list_roster(&mut *tx, league_id)
        .await?
        .into_iter()
        .map(Team::from)
        .collect();

    let fixtures = schedule::generate(&league, &roster, constraints).map_err(|rejection| {
        tracing::warn!(%league_id, code = rejection.code(), "Schedule generation rejected");
        rejection
    })?;

    let inserted = matches::insert_fixtures(&mut *tx, &fixtures).await?;

    if !leagues::mark_scheduled(&mut *tx, league_id).await? {
        // Dropping the transaction rolls back the inserted fixtures
        return Err(ScheduleRejection::AlreadyScheduled { league_id }.into());
    }

    tx.commit().await?;

    tracing::info!(
        %league_id,
        matches = inserted,
        algorithm = constraints.algorithm.as_str(),
        "Schedule generated"
    );

    Ok(fixtures)
}

/// Remove every generated fixture of a league and reopen it for scheduling.
/// Stored rankings go too since they were derived from those fixtures.
/// Returns the number of deleted matches.
pub async fn clear_schedule(pool: &PgPool, league_id: Uuid) -> Result<u64, ServiceError> {
    let mut tx = pool.begin().await?;

    let row = leagues::get_for_update(&mut *tx, league_id)
        .await?
        .ok_or(ServiceError::NotFound("League"))?;
    let league = League::try_from(row)?;

    let deleted = matches::delete_generated(&mut *tx, league_id).await?;
    rankings::delete_for_league(&mut *tx, league_id).await?;
    leagues::set_schedule_state(&mut *tx, league_id, league.schedule_state.clear().into()).await?;

    tx.commit().await?;

    tracing::info!(%league_id, deleted, "Schedule cleared");

    Ok(deleted)
}
