pub mod api;
pub mod csv;
pub mod models;
pub mod processors;

pub use api::{UpdateSummary, update_league_data};
pub use models::{GameResult, GamesDocument};
