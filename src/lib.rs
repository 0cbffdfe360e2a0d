//! Fantasy Karma League Scorer Library
//!
//! Scores a day's fantasy league games by joining a published schedule
//! sheet, a team roster sheet and per-player karma statistics fetched
//! through a CORS relay, then writes the per-game summary as JSON.
//!
//! # Examples
//!
//! ```rust,no_run
//! use karma_league::config::Config;
//! use karma_league::data_fetcher::api::create_http_client_with_timeout;
//! use karma_league::data_fetcher::update_league_data;
//! use karma_league::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     // Score today's games (or yesterday's before 07:00 Eastern)
//!     let summary = update_league_data(&client, &config, None).await?;
//!     println!("{} games written for {}", summary.games_count, summary.date);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod output;
pub mod server;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{UpdateSummary, update_league_data};
pub use data_fetcher::models::{GameResult, GamesDocument};
pub use error::AppError;
