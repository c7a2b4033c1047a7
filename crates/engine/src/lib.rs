//! League competition engine: fixture generation, result evaluation and
//! standings aggregation. Pure functions over the entity types; persistence
//! lives in `infra`.

pub mod entities;
pub mod error;
pub mod result;
pub mod schedule;
pub mod standings;
pub mod validation;

pub use entities::{
    League, Match, MatchFormat, MatchResult, MatchStatus, Ranking, ScheduleState, Team,
};
pub use error::{AlgorithmUnavailable, ResultRejection, ScheduleRejection, SetFault};
pub use result::CandidateScore;
pub use schedule::{ScheduleAlgorithm, ScheduleConstraints};
pub use validation::{ScheduleRequirements, ScheduleWindow};
