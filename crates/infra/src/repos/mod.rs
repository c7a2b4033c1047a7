pub mod leagues;
pub mod matches;
pub mod rankings;
pub mod teams;

pub use leagues::{CreateLeague, MatchFormat, ScheduleState};
pub use matches::MatchStatus;
