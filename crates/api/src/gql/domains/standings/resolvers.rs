use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use uuid::Uuid;

use crate::gql::error::ResultExt;
use crate::state::AppState;

use super::service;
use super::types::Standing;

#[derive(Default)]
pub struct StandingsQuery;

#[Object]
impl StandingsQuery {
    /// Stored standings ordered by points, then wins, then sets won.
    async fn standings(&self, ctx: &Context<'_>, league_id: ID) -> Result<Vec<Standing>> {
        let state = ctx.data::<AppState>()?;
        let league_id = Uuid::parse_str(league_id.as_str()).gql_err("Invalid league ID")?;

        let table = service::get_standings(&state.db, league_id)
            .await
            .map_err(|e| e.extend())?;

        Ok(Standing::table(table))
    }
}

#[derive(Default)]
pub struct StandingsMutation;

#[Object]
impl StandingsMutation {
    async fn recompute_standings(&self, ctx: &Context<'_>, league_id: ID) -> Result<Vec<Standing>> {
        let state = ctx.data::<AppState>()?;
        let league_id = Uuid::parse_str(league_id.as_str()).gql_err("Invalid league ID")?;

        let table = service::recompute_standings(&state.db, league_id)
            .await
            .map_err(|e| e.extend())?;

        Ok(Standing::table(table))
    }
}
