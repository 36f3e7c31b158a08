//! Data structures for the football tournament: teams, fixtures, tournament state.

mod fixture;
mod team;
mod tournament;

pub use fixture::{Fixture, FixtureId, Round, Score, Side};
pub use team::{Player, PlayerId, Referee, RefereeId, Team, TeamId, MIN_SQUAD_SIZE};
pub use tournament::{
    BracketSize, ErrorKind, Tournament, TournamentError, TournamentId, TournamentState,
};
