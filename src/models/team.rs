//! Team, squad Player, and Referee data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in fixtures and lookups).
pub type TeamId = Uuid;

/// Unique identifier for a squad player.
pub type PlayerId = Uuid;

/// Unique identifier for a referee.
pub type RefereeId = Uuid;

/// Minimum squad size for a team to enter a tournament.
pub const MIN_SQUAD_SIZE: usize = 7;

/// A squad member of one team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Shirt number (not required to be unique across teams).
    pub shirt: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, shirt: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            shirt,
        }
    }
}

/// A referee assignable to fixtures.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Referee {
    pub id: RefereeId,
    pub name: String,
}

impl Referee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A registered team with its squad.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Registration order; doubles as the default seed for display.
    pub seed: u32,
    /// Crest image path or URL, if any.
    pub crest: Option<String>,
    /// Kit color, if any.
    pub color: Option<String>,
    pub squad: Vec<Player>,
}

impl Team {
    /// Create a team with an empty squad. `seed` is the registration order.
    pub fn new(name: impl Into<String>, seed: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            seed,
            crest: None,
            color: None,
            squad: Vec::new(),
        }
    }

    /// Whether the squad is large enough to enter a tournament.
    pub fn eligible(&self) -> bool {
        self.squad.len() >= MIN_SQUAD_SIZE
    }

    /// How many players short of eligibility this team is (0 when eligible).
    pub fn players_missing(&self) -> usize {
        MIN_SQUAD_SIZE.saturating_sub(self.squad.len())
    }
}
