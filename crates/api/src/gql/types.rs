use async_graphql::{SimpleObject, ID};

/// Engine counters are unsigned; GraphQL `Int` is 32-bit signed.
pub fn gql_int(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[derive(SimpleObject, Clone)]
pub struct Team {
    pub id: ID,
    pub name: String,
    pub league_id: Option<ID>,
}

impl From<infra::models::TeamRow> for Team {
    fn from(row: infra::models::TeamRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            league_id: row.league_id.map(Into::into),
        }
    }
}
