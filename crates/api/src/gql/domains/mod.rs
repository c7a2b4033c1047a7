// Each domain contains: mod.rs, resolvers.rs, service.rs, types.rs

pub mod leagues;
pub mod matches;
pub mod standings;
