pub mod game_filter;
pub mod roster_selection;
pub mod scoring;

pub use game_filter::filter_games_for_date;
pub use roster_selection::{TeamMatching, select_active_players};
pub use scoring::{InvalidDeduction, parse_deduction, round_half_up, score_player};
