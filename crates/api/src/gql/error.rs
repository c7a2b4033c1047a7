use async_graphql::{ErrorExtensions, Value};

use crate::error::ServiceError;

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`.
///
/// `From<sqlx::Error>` logs the DB detail and shows a sanitized message to clients.
#[derive(Debug)]
pub enum GqlError {
    Sqlx(sqlx::Error),
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(e) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Database error: {e}");
                write!(f, "Internal database error")
            }
        }
    }
}

impl std::error::Error for GqlError {}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        GqlError::Sqlx(e)
    }
}

/// Extension trait that converts any `Result<T, E>` where `E: Display`
/// into `async_graphql::Result<T>` with a contextual message prefix.
///
/// Usage: `Uuid::parse_str(id).gql_err("Invalid league ID")?`
pub trait ResultExt<T> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error> {
        self.map_err(|e| async_graphql::Error::new(format!("{context}: {e}")))
    }
}

/// Workflow failures carry `code` and, for rejections, the structured
/// `details` in the error extensions.
impl ErrorExtensions for ServiceError {
    fn extend(&self) -> async_graphql::Error {
        let message = match self {
            ServiceError::Db(e) => {
                tracing::error!("Database error: {e}");
                "Internal database error".to_string()
            }
            other => other.to_string(),
        };

        let details = match self {
            ServiceError::Schedule(rejection) => serde_json::to_value(rejection).ok(),
            ServiceError::Result(rejection) => serde_json::to_value(rejection).ok(),
            _ => None,
        }
        .and_then(|json| Value::from_json(json).ok());

        let code = self.code();
        async_graphql::Error::new(message).extend_with(move |_, ext| {
            ext.set("code", code);
            if let Some(details) = details {
                ext.set("details", details);
            }
        })
    }
}
