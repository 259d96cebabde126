pub mod groups;
pub mod pool;
pub mod sampler;

pub use groups::{choose_users_from_freedom_teams, choose_users_from_groups};
pub use pool::choose_users;
pub use sampler::sample;
