use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::gql::domains::matches::types::Match;
use crate::gql::error::ResultExt;
use crate::state::AppState;

use super::service;
use super::types::{ClearScheduleResponse, GenerateScheduleInput, League, SchedulePreview};

#[derive(Default)]
pub struct LeagueQuery;

#[Object]
impl LeagueQuery {
    async fn league(&self, ctx: &Context<'_>, id: ID) -> Result<Option<League>> {
        let state = ctx.data::<AppState>()?;
        let league_id = Uuid::parse_str(id.as_str()).gql_err("Invalid league ID")?;

        match service::get_league(&state.db, league_id).await {
            Ok(league) => Ok(Some(league.into())),
            Err(ServiceError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.extend()),
        }
    }

    /// All matches of a league, earliest date first.
    async fn league_matches(&self, ctx: &Context<'_>, league_id: ID) -> Result<Vec<Match>> {
        let state = ctx.data::<AppState>()?;
        let league_id = Uuid::parse_str(league_id.as_str()).gql_err("Invalid league ID")?;

        let matches = service::list_matches(&state.db, league_id)
            .await
            .map_err(|e| e.extend())?;

        Ok(matches.into_iter().map(Match::from).collect())
    }

    /// Runs the schedule checks without generating anything.
    async fn schedule_preview(
        &self,
        ctx: &Context<'_>,
        league_id: ID,
        #[graphql(default)] input: GenerateScheduleInput,
    ) -> Result<SchedulePreview> {
        let state = ctx.data::<AppState>()?;
        let league_id = Uuid::parse_str(league_id.as_str()).gql_err("Invalid league ID")?;
        let constraints = input
            .into_constraints()
            .map_err(|e| ServiceError::from(e).extend())?;

        let window = service::preview_schedule(&state.db, league_id, &constraints)
            .await
            .map_err(|e| e.extend())?;

        Ok(window.into())
    }
}

#[derive(Default)]
pub struct ScheduleMutation;

#[Object]
impl ScheduleMutation {
    /// Generate the league's fixture list. Fails if a schedule already exists.
    async fn generate_schedule(
        &self,
        ctx: &Context<'_>,
        league_id: ID,
        #[graphql(default)] input: GenerateScheduleInput,
    ) -> Result<Vec<Match>> {
        let state = ctx.data::<AppState>()?;
        let league_id = Uuid::parse_str(league_id.as_str()).gql_err("Invalid league ID")?;
        let constraints = input
            .into_constraints()
            .map_err(|e| ServiceError::from(e).extend())?;

        let fixtures = service::generate_schedule(&state.db, league_id, &constraints)
            .await
            .map_err(|e| e.extend())?;

        Ok(fixtures.into_iter().map(Match::from).collect())
    }

    async fn clear_schedule(
        &self,
        ctx: &Context<'_>,
        league_id: ID,
    ) -> Result<ClearScheduleResponse> {
        let state = ctx.data::<AppState>()?;
        let league_id = Uuid::parse_str(league_id.as_str()).gql_err("Invalid league ID")?;

        let deleted = service::clear_schedule(&state.db, league_id)
            .await
            .map_err(|e| e.extend())?;

        Ok(ClearScheduleResponse {
            success: true,
            deleted_matches: i32::try_from(deleted).unwrap_or(i32::MAX),
        })
    }
}
