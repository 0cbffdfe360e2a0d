pub mod results;
pub mod roster;
pub mod schedule;
pub mod stats;

pub use results::{GameResult, GamesDocument, PlayerOutcome, PlayerResult, TeamScore};
pub use roster::RosterRow;
pub use schedule::ScheduleRow;
pub use stats::{KarmaFeed, KarmaStats, RelayEnvelope};
