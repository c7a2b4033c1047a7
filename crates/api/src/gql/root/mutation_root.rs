use async_graphql::MergedObject;

use crate::gql::domains::leagues::ScheduleMutation;
use crate::gql::domains::matches::MatchMutation;
use crate::gql::domains::standings::StandingsMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(ScheduleMutation, MatchMutation, StandingsMutation);
