//! Tournament, bracket size, state, and the error taxonomy.

use crate::models::fixture::{Fixture, FixtureId, Round};
use crate::models::team::{PlayerId, RefereeId, TeamId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Allowed bracket sizes (powers of two).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum BracketSize {
    Eight,
    Sixteen,
    ThirtyTwo,
}

impl BracketSize {
    /// Number of teams in the bracket.
    pub fn teams(self) -> usize {
        match self {
            BracketSize::Eight => 8,
            BracketSize::Sixteen => 16,
            BracketSize::ThirtyTwo => 32,
        }
    }

    /// Map a team count to a bracket size; `None` for anything else.
    pub fn from_teams(n: usize) -> Option<Self> {
        match n {
            8 => Some(BracketSize::Eight),
            16 => Some(BracketSize::Sixteen),
            32 => Some(BracketSize::ThirtyTwo),
            _ => None,
        }
    }
}

/// Lifecycle of a tournament. No way back from `Finished`; a new
/// tournament must be created instead.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Created but round-1 fixtures not drawn yet.
    #[default]
    Setup,
    /// Rounds being played; self-loops via advance_round.
    InProgress,
    /// Final decided; champion recorded.
    Finished,
}

/// Classification of a [`TournamentError`]: bad input vs. wrong state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed input; correct the request and retry. No state mutated.
    Validation,
    /// Operation invoked outside its valid state. No state mutated.
    State,
}

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Team count is not 8, 16, or 32.
    InvalidSize(usize),
    /// Entrant list length does not match the requested bracket size.
    WrongTeamCount { expected: usize, actual: usize },
    /// A team's squad is below the minimum; `missing` players short.
    SquadTooSmall { team: String, missing: usize },
    /// The same team appears more than once in the entrant list.
    DuplicateEntrant { team: String },
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// A name was empty after trimming.
    EmptyName,
    /// Score is level and no penalty shootout decides it.
    DrawnScore,
    /// Referee already has a fixture at this kickoff.
    RefereeConflict { referee: String, kickoff: NaiveDateTime },
    /// A tournament is already in progress; finalize it first.
    TournamentActive,
    /// No tournament is currently in progress.
    NoActiveTournament,
    /// The tournament has finished; no further results or rounds.
    TournamentFinished,
    /// Not every fixture in the current round has a winner yet.
    RoundIncomplete { missing: usize },
    /// The fixture's round has already been advanced past.
    RoundClosed,
    /// Fixture not found in the active tournament.
    FixtureNotFound(FixtureId),
    /// Team not found in the registry.
    TeamNotFound(TeamId),
    /// Referee not found in the registry.
    RefereeNotFound(RefereeId),
    /// Squad player not found in the team.
    PlayerNotFound(PlayerId),
}

impl TournamentError {
    /// Validation vs. state classification (drives HTTP status mapping).
    pub fn kind(&self) -> ErrorKind {
        use TournamentError::*;
        match self {
            InvalidSize(_)
            | WrongTeamCount { .. }
            | SquadTooSmall { .. }
            | DuplicateEntrant { .. }
            | DuplicateTeamName
            | EmptyName
            | DrawnScore
            | RefereeConflict { .. } => ErrorKind::Validation,
            TournamentActive
            | NoActiveTournament
            | TournamentFinished
            | RoundIncomplete { .. }
            | RoundClosed
            | FixtureNotFound(_)
            | TeamNotFound(_)
            | RefereeNotFound(_)
            | PlayerNotFound(_) => ErrorKind::State,
        }
    }
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidSize(n) => {
                write!(f, "A tournament needs 8, 16, or 32 teams (got {})", n)
            }
            TournamentError::WrongTeamCount { expected, actual } => {
                write!(f, "Expected {} entrants, got {}", expected, actual)
            }
            TournamentError::SquadTooSmall { team, missing } => {
                write!(f, "Team {} needs {} more player(s)", team, missing)
            }
            TournamentError::DuplicateEntrant { team } => {
                write!(f, "Team {} may enter the bracket only once", team)
            }
            TournamentError::DuplicateTeamName => {
                write!(f, "A team with this name already exists")
            }
            TournamentError::EmptyName => write!(f, "Name must not be empty"),
            TournamentError::DrawnScore => {
                write!(f, "Elimination play does not allow draws; record a penalty shootout")
            }
            TournamentError::RefereeConflict { referee, kickoff } => {
                write!(f, "Referee {} already has a fixture at {}", referee, kickoff)
            }
            TournamentError::TournamentActive => {
                write!(f, "A tournament is already in progress; finalize it first")
            }
            TournamentError::NoActiveTournament => write!(f, "No tournament is in progress"),
            TournamentError::TournamentFinished => write!(f, "The tournament has finished"),
            TournamentError::RoundIncomplete { missing } => {
                write!(f, "{} fixture(s) in the current round still need a result", missing)
            }
            TournamentError::RoundClosed => {
                write!(f, "This round has been advanced; its results are closed")
            }
            TournamentError::FixtureNotFound(_) => write!(f, "Fixture not found"),
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::RefereeNotFound(_) => write!(f, "Referee not found"),
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// A single-elimination tournament: all materialized fixtures in bracket
/// order, plus the round currently open for results.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub size: BracketSize,
    pub state: TournamentState,
    /// The round currently open for results.
    pub current_round: Round,
    /// Every fixture created so far, over all rounds, in bracket order.
    pub fixtures: Vec<Fixture>,
    /// Winner of the final; set when the tournament finishes.
    pub champion: Option<TeamId>,
}

impl Tournament {
    /// Create a tournament shell in Setup; the draw fills in round 1.
    pub fn new(name: impl Into<String>, size: BracketSize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            size,
            state: TournamentState::Setup,
            current_round: Round::first(size),
            fixtures: Vec::new(),
            champion: None,
        }
    }

    /// Fixtures of one round, in match-number order as stored.
    pub fn fixtures_in_round(&self, round: Round) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(move |fx| fx.round == round)
    }

    /// Mutable fixture lookup by id.
    pub fn fixture_mut(&mut self, id: FixtureId) -> Option<&mut Fixture> {
        self.fixtures.iter_mut().find(|fx| fx.id == id)
    }

    /// Fixture lookup by id.
    pub fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        self.fixtures.iter().find(|fx| fx.id == id)
    }

    /// Fixtures of the current round that still have no winner.
    pub fn unresolved_in_current_round(&self) -> usize {
        self.fixtures_in_round(self.current_round)
            .filter(|fx| fx.winner.is_none())
            .count()
    }

    /// A round is complete when every fixture in it has a winner.
    pub fn round_complete(&self, round: Round) -> bool {
        self.fixtures_in_round(round).all(|fx| fx.winner.is_some())
    }
}
