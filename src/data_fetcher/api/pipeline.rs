//! Main update pipeline: fetch the sheets, score today's games, persist the summary.

use reqwest::Client;
use serde::Serialize;
use tracing::{info, instrument};

use super::date_logic::determine_fetch_date;
use super::fetch_utils::fetch_text;
use super::stats_api::{pause, score_team};
use crate::config::Config;
use crate::data_fetcher::csv::parse_csv;
use crate::data_fetcher::models::{GameResult, GamesDocument, RosterRow, ScheduleRow};
use crate::data_fetcher::processors::{TeamMatching, filter_games_for_date, select_active_players};
use crate::error::AppError;
use crate::output::write_games_document;

/// Result of one successful update run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateSummary {
    /// Schedule day that was scored, `M/D`.
    pub date: String,
    #[serde(rename = "gamesCount")]
    pub games_count: usize,
}

/// Runs the full update: resolves the schedule day, scores its games and
/// overwrites the configured output file.
///
/// Nothing is written when any step before the write fails.
///
/// # Arguments
/// * `custom_date` - Optional day override in `YYYY-MM-DD` or `M/D` form
#[instrument(skip(client, config))]
pub async fn update_league_data(
    client: &Client,
    config: &Config,
    custom_date: Option<String>,
) -> Result<UpdateSummary, AppError> {
    let (date, _) = determine_fetch_date(custom_date)?;
    let document = build_games_document(client, config, &date).await?;
    write_games_document(&config.output_path, &document).await?;

    info!(
        "Wrote {} games for {date} to {}",
        document.games.len(),
        config.output_path
    );
    Ok(UpdateSummary {
        date,
        games_count: document.games.len(),
    })
}

/// Fetches both sheets and scores every game scheduled on `date`.
pub async fn build_games_document(
    client: &Client,
    config: &Config,
    date: &str,
) -> Result<GamesDocument, AppError> {
    let (schedule, roster) = fetch_sheets(client, config).await?;
    let matching = TeamMatching::from_config(config.normalize_team_names);

    let todays_games = filter_games_for_date(&schedule, date);
    info!(
        "Found {} games for {date} out of {} scheduled",
        todays_games.len(),
        schedule.len()
    );

    let mut games = Vec::with_capacity(todays_games.len());
    for game in todays_games {
        info!("Scoring {} vs {}", game.team1, game.team2);
        let team1_players = select_active_players(&roster, &game.team1, matching);
        let team2_players = select_active_players(&roster, &game.team2, matching);

        let side1 = score_team(client, config, &team1_players).await;
        let side2 = score_team(client, config, &team2_players).await;
        games.push(GameResult::new(&game.team1, &game.team2, side1, side2));

        pause(config.game_delay()).await;
    }

    Ok(GamesDocument { games })
}

/// Fetches the schedule and roster sheets concurrently.
pub async fn fetch_sheets(
    client: &Client,
    config: &Config,
) -> Result<(Vec<ScheduleRow>, Vec<RosterRow>), AppError> {
    let (schedule_text, roster_text) = tokio::try_join!(
        fetch_text(client, &config.schedule_csv_url),
        fetch_text(client, &config.roster_csv_url)
    )?;

    let schedule: Vec<ScheduleRow> = parse_csv(&schedule_text)?
        .iter()
        .map(ScheduleRow::from_record)
        .collect();
    let roster: Vec<RosterRow> = parse_csv(&roster_text)?
        .iter()
        .map(RosterRow::from_record)
        .collect();

    info!(
        "Loaded {} schedule rows and {} roster rows",
        schedule.len(),
        roster.len()
    );
    Ok((schedule, roster))
}
