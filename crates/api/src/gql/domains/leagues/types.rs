use async_graphql::{ComplexObject, Context, Enum, InputObject, Result, SimpleObject, ID};
use chrono::NaiveDate;
use engine::schedule::DEFAULT_MATCHES_PER_DAY;
use engine::{ScheduleAlgorithm, ScheduleConstraints, ScheduleRejection, ScheduleWindow};
use uuid::Uuid;

use crate::gql::error::{GqlError, ResultExt};
use crate::gql::types::{gql_int, Team};
use crate::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum MatchFormat {
    SingleSet,
    #[graphql(name = "BEST_OF_3")]
    BestOf3,
    #[graphql(name = "BEST_OF_5")]
    BestOf5,
}

impl From<engine::MatchFormat> for MatchFormat {
    fn from(value: engine::MatchFormat) -> Self {
        match value {
            engine::MatchFormat::SingleSet => MatchFormat::SingleSet,
            engine::MatchFormat::BestOf3 => MatchFormat::BestOf3,
            engine::MatchFormat::BestOf5 => MatchFormat::BestOf5,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ScheduleState {
    NoSchedule,
    Scheduled,
}

impl From<engine::ScheduleState> for ScheduleState {
    fn from(value: engine::ScheduleState) -> Self {
        match value {
            engine::ScheduleState::NoSchedule => ScheduleState::NoSchedule,
            engine::ScheduleState::Scheduled => ScheduleState::Scheduled,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct League {
    pub id: ID,
    pub name: String,
    pub match_format: MatchFormat,
    pub min_teams: i32,
    pub max_teams: i32,
    pub points_per_win: i32,
    pub points_per_loss: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub schedule_state: ScheduleState,
}

impl From<engine::League> for League {
    fn from(league: engine::League) -> Self {
        Self {
            id: league.id.into(),
            name: league.name,
            match_format: league.match_format.into(),
            min_teams: gql_int(league.min_teams),
            max_teams: gql_int(league.max_teams),
            points_per_win: gql_int(league.points_per_win),
            points_per_loss: gql_int(league.points_per_loss),
            start_date: league.start_date,
            end_date: league.end_date,
            schedule_state: league.schedule_state.into(),
        }
    }
}

#[ComplexObject]
impl League {
    /// Roster in pairing order.
    async fn teams(&self, ctx: &Context<'_>) -> Result<Vec<Team>> {
        let state = ctx.data::<AppState>()?;
        let league_id = Uuid::parse_str(self.id.as_str()).gql_err("Invalid league ID")?;

        let rows = infra::repos::teams::list_roster(&state.db, league_id)
            .await
            .map_err(GqlError::from)?;

        Ok(rows.into_iter().map(Team::from).collect())
    }
}

#[derive(InputObject, Default)]
pub struct GenerateScheduleInput {
    /// `round-robin` (default) or `double-round-robin`.
    pub algorithm: Option<String>,
    /// Defaults to the league's start date.
    pub start_date: Option<NaiveDate>,
    /// Defaults to the league's end date.
    pub end_date: Option<NaiveDate>,
    pub matches_per_day: Option<i32>,
    pub venue: Option<String>,
}

impl GenerateScheduleInput {
    pub fn into_constraints(self) -> std::result::Result<ScheduleConstraints, ScheduleRejection> {
        let algorithm = match self.algorithm.as_deref() {
            Some(name) => name.parse()?,
            None => ScheduleAlgorithm::RoundRobin,
        };

        let matches_per_day = match self.matches_per_day {
            Some(value) => u32::try_from(value).map_err(|_| {
                ScheduleRejection::InvalidMatchesPerDay {
                    value: i64::from(value),
                }
            })?,
            None => DEFAULT_MATCHES_PER_DAY,
        };

        Ok(ScheduleConstraints {
            algorithm,
            start_date: self.start_date,
            end_date: self.end_date,
            matches_per_day,
            venue: self.venue,
        })
    }
}

/// Outcome of a schedule pre-flight check.
#[derive(SimpleObject, Clone)]
pub struct SchedulePreview {
    pub required_matches: i32,
    pub required_days: i32,
    pub available_days: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub matches_per_day: i32,
}

impl From<ScheduleWindow> for SchedulePreview {
    fn from(window: ScheduleWindow) -> Self {
        Self {
            required_matches: gql_int(window.requirements.required_matches),
            required_days: gql_int(window.requirements.required_days),
            available_days: gql_int(window.requirements.available_days),
            start_date: window.start_date,
            end_date: window.end_date,
            matches_per_day: gql_int(window.matches_per_day),
        }
    }
}

#[derive(SimpleObject)]
pub struct ClearScheduleResponse {
    pub success: bool,
    pub deleted_matches: i32,
}
