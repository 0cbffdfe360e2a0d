use crate::data_fetcher::models::RosterRow;

/// How roster team names are compared with schedule team names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamMatching {
    /// Byte-for-byte equality.
    #[default]
    Exact,
    /// Equality after trimming and ignoring case.
    Normalized,
}

impl TeamMatching {
    pub fn from_config(normalize_team_names: bool) -> Self {
        if normalize_team_names {
            TeamMatching::Normalized
        } else {
            TeamMatching::Exact
        }
    }

    pub fn matches(self, roster_team: &str, schedule_team: &str) -> bool {
        match self {
            TeamMatching::Exact => roster_team == schedule_team,
            TeamMatching::Normalized => roster_team
                .trim()
                .to_lowercase()
                .eq(&schedule_team.trim().to_lowercase()),
        }
    }
}

/// Active players of `team`, in roster order.
pub fn select_active_players<'a>(
    roster: &'a [RosterRow],
    team: &str,
    matching: TeamMatching,
) -> Vec<&'a RosterRow> {
    roster
        .iter()
        .filter(|player| matching.matches(&player.team, team) && player.is_playing())
        .collect()
}
