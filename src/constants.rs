//! Application-wide constants and configuration defaults
//!
//! Centralizes the magic numbers and default endpoints so configuration
//! defaults and tests share a single source.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Pause after each player statistics call (milliseconds)
pub const DEFAULT_PLAYER_DELAY_MS: u64 = 500;

/// Pause after each processed game (milliseconds)
pub const DEFAULT_GAME_DELAY_MS: u64 = 1000;

/// Default listen address for the update endpoint
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// Default location of the generated summary, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "public/data.json";

/// Route served by the update endpoint
pub const UPDATE_ROUTE: &str = "/api/update";

/// Upstream endpoints
pub mod endpoints {
    /// Base URL of the karma statistics API
    pub const STATS_API_BASE: &str = "https://api.real.vg";

    /// CORS relay that wraps statistics responses in a `contents` envelope
    pub const PROXY_URL: &str = "https://api.allorigins.win/get";

    /// Published schedule sheet
    pub const SCHEDULE_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRgy7uZ8caLI4hTPKSjl9e7ztFaM9vdBk4vXDQbPtcybqzXGOm3FMpSJiyrRTzIM3K70z_6XbgBGP_0/pub?output=csv";

    /// Published roster sheet
    pub const ROSTER_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRe5WoA--wsfCCCvtL8QgQKsJv0z1AIUTY7k5NEYgUF-Ipu3Iotxkcbw7D-Cme6YGUksHy3DmyDYpaO/pub?output=csv";
}

/// Scoring rules
pub mod scoring {
    /// Multiplier applied to a captain's adjusted score
    pub const CAPTAIN_MULTIPLIER: f64 = 1.5;

    /// Placeholder the roster sheet uses for unresolved user ids
    pub const MISSING_ID_SENTINEL: &str = "not found";

    /// Handle shown when the roster row has no handle
    pub const UNKNOWN_HANDLE: &str = "Unknown";
}

/// Date rollover rules
pub mod schedule_day {
    /// Hour (Eastern) before which the previous day's games are scored
    pub const ROLLOVER_HOUR: u32 = 7;
}

/// Roster and schedule column names as published in the sheets
pub mod columns {
    pub const DATE: &str = "Date";
    pub const TEAM_1: &str = "Team 1";
    pub const TEAM_2: &str = "Team 2";
    pub const TEAM: &str = "Team";
    pub const PLAYING: &str = "playing?";
    pub const USER_ID: &str = "User ID";
    pub const HANDLE: &str = "User @";
    pub const DEDUCTIONS: &str = "deductions";
    pub const ROLE: &str = "role";
}

/// Environment variable names
pub mod env_vars {
    /// Schedule CSV URL override
    pub const SCHEDULE_URL: &str = "KARMA_LEAGUE_SCHEDULE_URL";

    /// Roster CSV URL override
    pub const ROSTER_URL: &str = "KARMA_LEAGUE_ROSTER_URL";

    /// Statistics API base override
    pub const STATS_API: &str = "KARMA_LEAGUE_STATS_API";

    /// CORS relay override
    pub const PROXY_URL: &str = "KARMA_LEAGUE_PROXY_URL";

    /// Output file override
    pub const OUTPUT: &str = "KARMA_LEAGUE_OUTPUT";

    /// Log file path override
    pub const LOG_FILE: &str = "KARMA_LEAGUE_LOG_FILE";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "KARMA_LEAGUE_HTTP_TIMEOUT";

    /// Listen address override
    pub const BIND: &str = "KARMA_LEAGUE_BIND";
}
