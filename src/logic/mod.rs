//! Tournament business logic: the draw, results, rosters, scheduling.

mod bracket;
mod results;
mod roster;
mod schedule;

pub use bracket::{
    advance_round, create_tournament, current_bracket, BracketView, FixtureView, RoundView,
    TeamSlot,
};
pub use results::record_result;
pub use roster::{import_roster_csv, validate_entrants};
pub use schedule::{fixtures_by_day, schedule_fixture, DaySchedule};
