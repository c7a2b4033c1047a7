use async_graphql::{
    dataloader::DataLoader, ComplexObject, Context, Enum, InputObject, Result, SimpleObject, ID,
};
use chrono::NaiveDate;
use engine::CandidateScore;
use uuid::Uuid;

use crate::gql::error::ResultExt;
use crate::gql::loaders::TeamLoader;
use crate::gql::types::{gql_int, Team};

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum MatchStatus {
    Unscheduled,
    Scheduled,
    InProgress,
    Completed,
    Canceled,
    Postponed,
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

#[derive(SimpleObject, Clone)]
pub struct MatchResult {
    pub team_a_score: Vec<i32>,
    pub team_b_score: Vec<i32>,
    pub winner_id: ID,
    pub sets_won_a: i32,
    pub sets_won_b: i32,
}

impl From<engine::MatchResult> for MatchResult {
    fn from(result: engine::MatchResult) -> Self {
        let (sets_won_a, sets_won_b) = result.set_tally();
        Self {
            team_a_score: result.team_a_score.into_iter().map(gql_int).collect(),
            team_b_score: result.team_b_score.into_iter().map(gql_int).collect(),
            winner_id: result.winner.into(),
            sets_won_a: gql_int(sets_won_a),
            sets_won_b: gql_int(sets_won_b),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Match {
    pub id: ID,
    pub league_id: ID,
    pub team_a_id: ID,
    pub team_b_id: ID,
    pub scheduled_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub status: MatchStatus,
    pub result: Option<MatchResult>,
    pub generated: bool,
}

impl From<engine::Match> for Match {
    fn from(game: engine::Match) -> Self {
        Self {
            id: game.id.into(),
            league_id: game.league_id.into(),
            team_a_id: game.team_a.into(),
            team_b_id: game.team_b.into(),
            scheduled_date: game.scheduled_date,
            location: game.location,
            status: game.status.into(),
            result: game.result.map(MatchResult::from),
            generated: game.generated,
        }
    }
}

async fn load_team(ctx: &Context<'_>, id: &ID) -> Result<Option<Team>> {
    let team_id = Uuid::parse_str(id.as_str()).gql_err("Invalid team ID")?;
    let loader = ctx.data::<DataLoader<TeamLoader>>()?;

    Ok(loader
        .load_one(team_id)
        .await
        .gql_err("Loading team failed")?
        .map(Team::from))
}

#[ComplexObject]
impl Match {
    async fn team_a(&self, ctx: &Context<'_>) -> Result<Option<Team>> {
        load_team(ctx, &self.team_a_id).await
    }

    async fn team_b(&self, ctx: &Context<'_>) -> Result<Option<Team>> {
        load_team(ctx, &self.team_b_id).await
    }
}

/// Per-set scores, one entry per set in play order. Trailing `0`/`0` sets
/// are treated as unplayed.
#[derive(InputObject)]
pub struct SubmitMatchResultInput {
    pub team_a_score: Vec<i32>,
    pub team_b_score: Vec<i32>,
}

impl From<SubmitMatchResultInput> for CandidateScore {
    fn from(input: SubmitMatchResultInput) -> Self {
        CandidateScore::new(input.team_a_score, input.team_b_score)
    }
}
