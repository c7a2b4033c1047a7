use engine::{result, CandidateScore, League, Match, MatchStatus};
use infra::repos::{leagues, matches};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ServiceError;

pub async fn get_match(pool: &PgPool, match_id: Uuid) -> Result<Match, ServiceError> {
    let row = matches::get_by_id(pool, match_id)
        .await?
        .ok_or(ServiceError::NotFound("Match"))?;

    Ok(Match::try_from(row)?)
}

/// Validate a candidate score and record it as the match result.
///
/// Re-submitting replaces the previous result after full re-validation. The
/// match row is locked while the candidate is evaluated so concurrent edits
/// of the same match apply one after the other.
pub async fn submit_match_result(
    pool: &PgPool,
    match_id: Uuid,
    candidate: &CandidateScore,
) -> Result<Match, ServiceError> {
    let mut tx = pool.begin().await?;

    let row = matches::get_for_update(&mut *tx, match_id)
        .await?
        .ok_or(ServiceError::NotFound("Match"))?;
    let mut game = Match::try_from(row)?;

    if game.status == MatchStatus::Canceled {
        return Err(ServiceError::BadRequest(
            "canceled matches cannot take a result".to_string(),
        ));
    }

    let league_row = leagues::get_by_id(&mut *tx, game.league_id)
        .await?
        .ok_or(ServiceError::NotFound("League"))?;
    let league = League::try_from(league_row)?;

    let finalized = result::finalize(&mut game, league.match_format, candidate)
        .map_err(|rejection| {
            tracing::warn!(%match_id, code = rejection.code(), "Match result rejected");
            rejection
        })?
        .clone();

    let updated = matches::record_result(&mut *tx, match_id, &finalized).await?;
    tx.commit().await?;

    tracing::info!(
        %match_id,
        league_id = %game.league_id,
        winner = %finalized.winner,
        sets = finalized.sets_played(),
        "Match result recorded"
    );

    Ok(Match::try_from(updated)?)
}
