//! In-memory persistence collaborator: team/referee registry, the single
//! active tournament, and the archive of finished ones.
//!
//! The "one active tournament" rule lives here as an explicit record
//! (`active`), created by [`Store::create_tournament`] and cleared by
//! [`Store::finalize_active`]. Teams are frozen while a tournament is in
//! progress.

use crate::logic;
use crate::models::{
    Player, PlayerId, Referee, RefereeId, Team, TeamId, Tournament, TournamentError,
};
use rand::Rng;

/// Everything the app persists. Backing-store mechanics (schema, SQL) are
/// out of scope; this registry is the unit of atomic read-modify-write.
#[derive(Clone, Debug, Default)]
pub struct Store {
    teams: Vec<Team>,
    referees: Vec<Referee>,
    active: Option<Tournament>,
    archive: Vec<Tournament>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Team mutation is rejected while a tournament is in progress.
    fn ensure_teams_unfrozen(&self) -> Result<(), TournamentError> {
        if self.active.is_some() {
            return Err(TournamentError::TournamentActive);
        }
        Ok(())
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn referees(&self) -> &[Referee] {
        &self.referees
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn referee(&self, id: RefereeId) -> Option<&Referee> {
        self.referees.iter().find(|r| r.id == id)
    }

    /// Register a team. Names are unique, case-insensitive.
    pub fn add_team(&mut self, name: &str) -> Result<TeamId, TournamentError> {
        self.ensure_teams_unfrozen()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if self.teams.iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
            return Err(TournamentError::DuplicateTeamName);
        }
        let team = Team::new(name, self.teams.len() as u32 + 1);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    pub fn remove_team(&mut self, id: TeamId) -> Result<(), TournamentError> {
        self.ensure_teams_unfrozen()?;
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == id)
            .ok_or(TournamentError::TeamNotFound(id))?;
        self.teams.remove(idx);
        Ok(())
    }

    /// Add a squad player to a team.
    pub fn add_squad_player(
        &mut self,
        team_id: TeamId,
        name: &str,
        shirt: u32,
    ) -> Result<PlayerId, TournamentError> {
        self.ensure_teams_unfrozen()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        let player = Player::new(name, shirt);
        let id = player.id;
        team.squad.push(player);
        Ok(id)
    }

    pub fn remove_squad_player(
        &mut self,
        team_id: TeamId,
        player_id: PlayerId,
    ) -> Result<(), TournamentError> {
        self.ensure_teams_unfrozen()?;
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        let idx = team
            .squad
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?;
        team.squad.remove(idx);
        Ok(())
    }

    /// Referees may register at any time; they are not bracket entrants.
    pub fn add_referee(&mut self, name: &str) -> Result<RefereeId, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        let referee = Referee::new(name);
        let id = referee.id;
        self.referees.push(referee);
        Ok(id)
    }

    /// Merge CSV-imported teams into the registry. Any name clash with an
    /// existing team rejects the whole import.
    pub fn import_teams(&mut self, imported: Vec<Team>) -> Result<usize, TournamentError> {
        self.ensure_teams_unfrozen()?;
        for team in &imported {
            if self
                .teams
                .iter()
                .any(|t| t.name.eq_ignore_ascii_case(&team.name))
            {
                return Err(TournamentError::DuplicateTeamName);
            }
        }
        let count = imported.len();
        let base = self.teams.len() as u32;
        for (i, mut team) in imported.into_iter().enumerate() {
            team.seed = base + i as u32 + 1;
            self.teams.push(team);
        }
        Ok(count)
    }

    /// Run the draw over the selected teams and install the result as the
    /// active tournament. Rejected while one is already in progress.
    pub fn create_tournament(
        &mut self,
        name: &str,
        team_ids: &[TeamId],
        rng: &mut impl Rng,
    ) -> Result<&Tournament, TournamentError> {
        if self.active.is_some() {
            return Err(TournamentError::TournamentActive);
        }
        let mut entrants = Vec::with_capacity(team_ids.len());
        for &id in team_ids {
            let team = self.team(id).ok_or(TournamentError::TeamNotFound(id))?;
            entrants.push(team.clone());
        }
        let tournament = logic::create_tournament(name, &entrants, rng)?;
        self.active = Some(tournament);
        self.active()
    }

    /// The tournament currently in progress.
    pub fn active(&self) -> Result<&Tournament, TournamentError> {
        self.active
            .as_ref()
            .ok_or(TournamentError::NoActiveTournament)
    }

    /// Mutable access for engine operations (results, advancing, scheduling).
    pub fn active_mut(&mut self) -> Result<&mut Tournament, TournamentError> {
        self.active
            .as_mut()
            .ok_or(TournamentError::NoActiveTournament)
    }

    /// Archive the active tournament (finished or explicitly cancelled)
    /// and clear the singleton so a new one may be created.
    pub fn finalize_active(&mut self) -> Result<&Tournament, TournamentError> {
        let tournament = self
            .active
            .take()
            .ok_or(TournamentError::NoActiveTournament)?;
        log::info!(
            "Finalized tournament '{}' ({:?})",
            tournament.name,
            tournament.state
        );
        self.archive.push(tournament);
        match self.archive.last() {
            Some(t) => Ok(t),
            None => Err(TournamentError::NoActiveTournament),
        }
    }

    pub fn archive(&self) -> &[Tournament] {
        &self.archive
    }
}
