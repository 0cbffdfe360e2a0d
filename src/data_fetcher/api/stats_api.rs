//! Karma statistics lookups through the CORS relay and per-team aggregation

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::fetch_utils::{decode_json, fetch_json};
use super::urls::{build_karmafeed_url, build_relay_url};
use crate::config::Config;
use crate::data_fetcher::models::{KarmaFeed, PlayerOutcome, RelayEnvelope, RosterRow, TeamScore};
use crate::data_fetcher::processors::{parse_deduction, round_half_up, score_player};
use crate::error::AppError;

/// Fetches the karma delta of one user.
///
/// The relay answers `{"contents": "<json string>"}`; the inner document's
/// `stats.karmaDelta` is returned, zero when absent.
#[instrument(skip(client, config))]
pub async fn fetch_karma_delta(
    client: &Client,
    config: &Config,
    user_id: &str,
) -> Result<f64, AppError> {
    let feed_url = build_karmafeed_url(&config.stats_api_base, user_id);
    let relay_url = build_relay_url(&config.proxy_url, &feed_url)?;

    let envelope: RelayEnvelope = fetch_json(client, relay_url.as_str()).await?;
    let delta = match envelope.contents {
        Some(contents) => decode_json::<Option<KarmaFeed>>(&contents, &feed_url)?
            .map(|feed| feed.karma_delta())
            .unwrap_or(0.0),
        None => 0.0,
    };

    debug!("Karma delta for user {user_id}: {delta}");
    Ok(delta)
}

/// Scores one side of a game, player by player, in roster order.
///
/// A player's failure only affects that player's line. Players that reach
/// the network are followed by the configured player delay.
pub async fn score_team(client: &Client, config: &Config, players: &[&RosterRow]) -> TeamScore {
    let mut total = 0.0;
    let mut lines = Vec::with_capacity(players.len());

    for player in players {
        let outcome = score_roster_entry(client, config, player).await;
        total += outcome.contribution();
        lines.push(outcome.display_line());
    }

    let total = round_half_up(total);
    info!("Team scored {total} from {} players", players.len());
    TeamScore { total, lines }
}

async fn score_roster_entry(client: &Client, config: &Config, player: &RosterRow) -> PlayerOutcome {
    let handle = player.display_handle().to_string();

    let Some(user_id) = player.resolved_user_id() else {
        info!("No user id for {handle}, skipping statistics lookup");
        return PlayerOutcome::MissingId { handle };
    };

    let deduction = match parse_deduction(&player.deduction) {
        Ok(deduction) => deduction,
        Err(e) => {
            warn!("Skipping {handle}: {e}");
            return PlayerOutcome::InvalidDeduction {
                handle,
                raw: player.deduction.clone(),
            };
        }
    };

    let outcome = match fetch_karma_delta(client, config, user_id).await {
        Ok(delta) => PlayerOutcome::Scored(score_player(&handle, player.is_captain(), delta, deduction)),
        Err(e) => {
            warn!("Failed to fetch karma for {handle} (user {user_id}): {e}");
            PlayerOutcome::FetchError { handle }
        }
    };

    pause(config.player_delay()).await;
    outcome
}

/// Sleeps for `delay`, returning immediately for a zero delay.
pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
