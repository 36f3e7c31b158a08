//! Fixture (a single bracket match), Score with penalty tiebreak, and Round.

use crate::models::team::{RefereeId, TeamId};
use crate::models::tournament::BracketSize;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a fixture.
pub type FixtureId = Uuid;

/// Which side of a fixture won.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

/// Knockout round, ordered from the largest bracket entry to the final.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Round {
    RoundOf32,
    RoundOf16,
    QuarterFinal,
    SemiFinal,
    Final,
}

impl Round {
    /// Number of teams entering this round.
    pub fn entrants(self) -> usize {
        match self {
            Round::RoundOf32 => 32,
            Round::RoundOf16 => 16,
            Round::QuarterFinal => 8,
            Round::SemiFinal => 4,
            Round::Final => 2,
        }
    }

    /// Number of matches played in this round (entrants / 2).
    pub fn matches(self) -> usize {
        self.entrants() / 2
    }

    /// Opening round for a bracket of the given size.
    pub fn first(size: BracketSize) -> Self {
        match size {
            BracketSize::Eight => Round::QuarterFinal,
            BracketSize::Sixteen => Round::RoundOf16,
            BracketSize::ThirtyTwo => Round::RoundOf32,
        }
    }

    /// The round the winners advance into; `None` after the final.
    pub fn next(self) -> Option<Self> {
        match self {
            Round::RoundOf32 => Some(Round::RoundOf16),
            Round::RoundOf16 => Some(Round::QuarterFinal),
            Round::QuarterFinal => Some(Round::SemiFinal),
            Round::SemiFinal => Some(Round::Final),
            Round::Final => None,
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Round::RoundOf32 => "round of 32",
            Round::RoundOf16 => "round of 16",
            Round::QuarterFinal => "quarter-final",
            Round::SemiFinal => "semi-final",
            Round::Final => "final",
        };
        write!(f, "{name}")
    }
}

/// A recorded result. Goals decide the match; an unequal penalty shootout
/// pair decides it when goals are level.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub goals_home: u32,
    pub goals_away: u32,
    /// Penalty shootout (home, away), only meaningful when goals are level.
    pub penalties: Option<(u32, u32)>,
}

impl Score {
    pub fn new(goals_home: u32, goals_away: u32) -> Self {
        Self {
            goals_home,
            goals_away,
            penalties: None,
        }
    }

    pub fn with_penalties(goals_home: u32, goals_away: u32, pens_home: u32, pens_away: u32) -> Self {
        Self {
            goals_home,
            goals_away,
            penalties: Some((pens_home, pens_away)),
        }
    }

    /// Winning side, or `None` if the score is drawn (no winner can be
    /// derived, which elimination play does not allow).
    pub fn winner(&self) -> Option<Side> {
        match self.goals_home.cmp(&self.goals_away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => match self.penalties {
                Some((h, a)) if h > a => Some(Side::Home),
                Some((h, a)) if h < a => Some(Side::Away),
                _ => None,
            },
        }
    }
}

/// A single bracket match. Rounds advance atomically, so a fixture is
/// only created once both of its teams are known.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub round: Round,
    /// 1-based position within the round, in bracket order.
    pub number: u32,
    pub home: TeamId,
    pub away: TeamId,
    /// Assigned from the calendar; not required to play.
    pub kickoff: Option<NaiveDateTime>,
    pub referee: Option<RefereeId>,
    /// None if not yet played.
    pub score: Option<Score>,
    pub winner: Option<TeamId>,
}

impl Fixture {
    pub fn new(round: Round, number: u32, home: TeamId, away: TeamId) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            number,
            home,
            away,
            kickoff: None,
            referee: None,
            score: None,
            winner: None,
        }
    }

    /// The team on the given side.
    pub fn side(&self, side: Side) -> TeamId {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}
