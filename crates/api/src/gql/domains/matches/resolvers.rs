use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use engine::CandidateScore;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::gql::error::ResultExt;
use crate::state::AppState;

use super::service;
use super::types::{Match, SubmitMatchResultInput};

#[derive(Default)]
pub struct MatchQuery;

#[Object]
impl MatchQuery {
    #[graphql(name = "match")]
    async fn match_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Match>> {
        let state = ctx.data::<AppState>()?;
        let match_id = Uuid::parse_str(id.as_str()).gql_err("Invalid match ID")?;

        match service::get_match(&state.db, match_id).await {
            Ok(game) => Ok(Some(game.into())),
            Err(ServiceError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.extend()),
        }
    }
}

#[derive(Default)]
pub struct MatchMutation;

#[Object]
impl MatchMutation {
    /// Record or replace the result of a match. The score is validated
    /// against the league's match format before anything is written.
    async fn submit_match_result(
        &self,
        ctx: &Context<'_>,
        match_id: ID,
        input: SubmitMatchResultInput,
    ) -> Result<Match> {
        let state = ctx.data::<AppState>()?;
        let match_id = Uuid::parse_str(match_id.as_str()).gql_err("Invalid match ID")?;

        let game = service::submit_match_result(&state.db, match_id, &CandidateScore::from(input))
            .await
            .map_err(|e| e.extend())?;

        Ok(game.into())
    }
}
