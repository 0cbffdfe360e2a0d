pub mod date_logic;
pub mod fetch_utils;
pub mod http_client;
pub mod stats_api;
pub mod urls;
mod pipeline;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export pipeline entry points
pub use pipeline::*;
pub use date_logic::{determine_fetch_date, determine_fetch_date_with_time, format_schedule_date};
pub use stats_api::{fetch_karma_delta, score_team};
