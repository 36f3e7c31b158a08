//! Entrant validation and bulk roster import.

use crate::models::{BracketSize, Player, Team, TournamentError};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;

/// The pre-draw gate: the entrant list must be exactly 8, 16, or 32
/// distinct teams and every squad must have at least the minimum number
/// of players. Returns the bracket size the list maps to.
pub fn validate_entrants(teams: &[Team]) -> Result<BracketSize, TournamentError> {
    let size = BracketSize::from_teams(teams.len())
        .ok_or(TournamentError::InvalidSize(teams.len()))?;
    let mut seen = HashSet::new();
    for team in teams {
        if !seen.insert(team.id) {
            return Err(TournamentError::DuplicateEntrant {
                team: team.name.clone(),
            });
        }
        if !team.eligible() {
            return Err(TournamentError::SquadTooSmall {
                team: team.name.clone(),
                missing: team.players_missing(),
            });
        }
    }
    Ok(size)
}

/// One `team,player,shirt` row of a roster CSV.
#[derive(Debug, Deserialize)]
struct RosterRow {
    team: String,
    player: String,
    shirt: u32,
}

/// Bulk-import teams and squads from CSV (`team,player,shirt` with a
/// header row). Players group under their team by name; teams keep
/// first-seen order as their registration order.
pub fn import_roster_csv<R: Read>(reader: R) -> Result<Vec<Team>, csv::Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut teams: Vec<Team> = Vec::new();

    for row in csv_reader.deserialize() {
        let row: RosterRow = row?;
        let name = row.team.trim();
        let idx = match teams.iter().position(|t| t.name.eq_ignore_ascii_case(name)) {
            Some(i) => i,
            None => {
                let seed = teams.len() as u32 + 1;
                teams.push(Team::new(name, seed));
                teams.len() - 1
            }
        };
        teams[idx].squad.push(Player::new(row.player.trim(), row.shirt));
    }

    log::info!("Imported {} team(s) from roster CSV", teams.len());
    Ok(teams)
}
