//! Records exchanged between a game session and the host's stores: player settings, achievement
//! counters and leaderboard rows. Where they are persisted is up to the host.

pub use achievements::*;
pub use config::*;
pub use error::*;
pub use leaderboard::*;
pub use settings::*;

mod achievements;
mod config;
mod error;
mod leaderboard;
mod settings;
