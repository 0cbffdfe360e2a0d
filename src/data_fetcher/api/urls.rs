//! URL building utilities for the statistics relay

use crate::error::AppError;
use reqwest::Url;

/// Builds the karma feed URL for a user.
///
/// # Example
/// ```
/// use karma_league::data_fetcher::api::build_karmafeed_url;
///
/// let url = build_karmafeed_url("https://api.real.vg", "12345");
/// assert_eq!(url, "https://api.real.vg/user/12345/karmafeed");
/// ```
pub fn build_karmafeed_url(stats_api_base: &str, user_id: &str) -> String {
    format!("{}/user/{user_id}/karmafeed", stats_api_base.trim_end_matches('/'))
}

/// Wraps `target` in the CORS relay, passing it percent-encoded in the `url`
/// query parameter.
///
/// # Example
/// ```
/// use karma_league::data_fetcher::api::build_relay_url;
///
/// let url = build_relay_url("https://relay.example.com/get", "https://api.real.vg/user/1/karmafeed").unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://relay.example.com/get?url=https%3A%2F%2Fapi.real.vg%2Fuser%2F1%2Fkarmafeed"
/// );
/// ```
pub fn build_relay_url(proxy_url: &str, target: &str) -> Result<Url, AppError> {
    Url::parse_with_params(proxy_url, &[("url", target)])
        .map_err(|e| AppError::invalid_url(proxy_url, e.to_string()))
}
