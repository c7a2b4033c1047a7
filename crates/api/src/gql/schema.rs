use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use super::loaders::TeamLoader;
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type LeagueSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> LeagueSchema {
    let team_loader = DataLoader::new(TeamLoader::new(state.db.clone()), tokio::spawn);

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state.clone()) // available in resolvers via ctx.data::<AppState>()
    .data(team_loader)
    .limit_depth(15)
    .limit_complexity(200);

    if !state.config().gql_introspection {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
