use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Whether the arguments only touch configuration and exit without scoring.
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_schedule_url.is_some()
        || args.new_roster_url.is_some()
        || args.new_output_path.is_some()
        || args.clear_log_file_path
}

/// Fantasy karma league scorer
///
/// Scores today's league games from the published schedule and roster sheets
/// and per-player karma statistics, writing the result as JSON.
///
/// By default an HTTP server is started; each GET to /api/update runs one
/// scoring pass. Use --once to run a single pass from the command line.
///
/// Games before 07:00 US Eastern are attributed to the previous day.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Run one scoring pass, print the summary and exit.
    #[arg(short, long)]
    pub once: bool,

    /// Score games for a specific date (YYYY-MM-DD or M/D) instead of today. Requires --once.
    #[arg(long = "date", short = 'd', requires = "once")]
    pub date: Option<String>,

    /// Listen address for the update endpoint, e.g. 0.0.0.0:8080.
    #[arg(long = "bind", short = 'b', help_heading = "Server")]
    pub bind: Option<String>,

    /// Write the output JSON here for this run only.
    #[arg(long = "output", help_heading = "Server")]
    pub output: Option<String>,

    /// Save a new schedule CSV URL in config.
    #[arg(long = "set-schedule-url", help_heading = "Configuration")]
    pub new_schedule_url: Option<String>,

    /// Save a new roster CSV URL in config.
    #[arg(long = "set-roster-url", help_heading = "Configuration")]
    pub new_roster_url: Option<String>,

    /// Save a new output file path in config.
    #[arg(long = "set-output", help_heading = "Configuration")]
    pub new_output_path: Option<String>,

    /// Clear the custom log file path from config.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also log to stdout in --once mode.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
