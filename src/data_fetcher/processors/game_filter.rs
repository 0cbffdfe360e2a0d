use crate::data_fetcher::models::ScheduleRow;

/// Games scheduled on `date` (`M/D`), in sheet order.
///
/// Matching is exact string equality, so a zero-padded sheet date never
/// matches and simply yields no games.
pub fn filter_games_for_date<'a>(schedule: &'a [ScheduleRow], date: &str) -> Vec<&'a ScheduleRow> {
    schedule.iter().filter(|game| game.date == date).collect()
}
