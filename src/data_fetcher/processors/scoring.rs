use crate::constants::scoring::CAPTAIN_MULTIPLIER;
use crate::data_fetcher::models::PlayerResult;
use thiserror::Error;

/// A deduction cell that is neither blank nor a finite number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid deduction value '{0}'")]
pub struct InvalidDeduction(pub String);

/// Parses a roster deduction cell. Blank means no deduction.
pub fn parse_deduction(raw: &str) -> Result<f64, InvalidDeduction> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InvalidDeduction(raw.to_string())),
    }
}

/// Rounds half-way values toward positive infinity (2.5 → 3, -2.5 → -2).
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// Applies the deduction and captain boost to a fetched karma delta.
pub fn score_player(handle: &str, is_captain: bool, karma_delta: f64, deduction: f64) -> PlayerResult {
    let adjusted = karma_delta - deduction;
    let boosted = if is_captain {
        adjusted * CAPTAIN_MULTIPLIER
    } else {
        adjusted
    };
    PlayerResult {
        handle: handle.to_string(),
        is_captain,
        raw_delta: karma_delta,
        adjusted,
        boosted,
    }
}
