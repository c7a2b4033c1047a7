use async_graphql::MergedObject;

use crate::gql::domains::leagues::LeagueQuery;
use crate::gql::domains::matches::MatchQuery;
use crate::gql::domains::standings::StandingsQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(LeagueQuery, MatchQuery, StandingsQuery);
