//! Football knockout tournament web app: library with models, bracket
//! logic, in-memory store, and the standalone clock widget.

pub mod clock;
pub mod logic;
pub mod models;
pub mod store;

pub use clock::{ClockEvent, ClockMode, DigitalClock};
pub use logic::{
    advance_round, create_tournament, current_bracket, fixtures_by_day, import_roster_csv,
    record_result, schedule_fixture, validate_entrants, BracketView, DaySchedule,
};
pub use models::{
    BracketSize, ErrorKind, Fixture, FixtureId, Player, PlayerId, Referee, RefereeId, Round,
    Score, Side, Team, TeamId, Tournament, TournamentError, TournamentId, TournamentState,
    MIN_SQUAD_SIZE,
};
pub use store::Store;
