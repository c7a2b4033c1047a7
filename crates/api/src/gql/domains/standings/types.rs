use async_graphql::{dataloader::DataLoader, ComplexObject, Context, Result, SimpleObject, ID};
use uuid::Uuid;

use crate::gql::error::ResultExt;
use crate::gql::loaders::TeamLoader;
use crate::gql::types::{gql_int, Team};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Standing {
    /// 1-based place in the table.
    pub position: i32,
    pub team_id: ID,
    pub points: i32,
    pub matches_played: i32,
    pub matches_won: i32,
    pub matches_lost: i32,
    pub sets_won: i32,
    pub sets_lost: i32,
}

impl Standing {
    /// Expects rankings already in presentation order.
    pub fn table(rankings: Vec<engine::Ranking>) -> Vec<Standing> {
        rankings
            .into_iter()
            .enumerate()
            .map(|(index, ranking)| Standing {
                position: i32::try_from(index + 1).unwrap_or(i32::MAX),
                team_id: ranking.team_id.into(),
                points: gql_int(ranking.points),
                matches_played: gql_int(ranking.matches_played),
                matches_won: gql_int(ranking.matches_won),
                matches_lost: gql_int(ranking.matches_lost),
                sets_won: gql_int(ranking.sets_won),
                sets_lost: gql_int(ranking.sets_lost),
            })
            .collect()
    }
}

#[ComplexObject]
impl Standing {
    async fn team(&self, ctx: &Context<'_>) -> Result<Option<Team>> {
        let team_id = Uuid::parse_str(self.team_id.as_str()).gql_err("Invalid team ID")?;
        let loader = ctx.data::<DataLoader<TeamLoader>>()?;

        Ok(loader
            .load_one(team_id)
            .await
            .gql_err("Loading team failed")?
            .map(Team::from))
    }
}
