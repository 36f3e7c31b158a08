//! Bracket engine: the draw, round advancement, and the bracket view.

use crate::logic::roster::validate_entrants;
use crate::models::{
    Fixture, FixtureId, Round, Score, Team, TeamId, Tournament, TournamentError, TournamentState,
};
use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Run the draw and create a tournament.
///
/// 1. Validate the entrant list (8/16/32 teams, every squad at full strength).
/// 2. Shuffle the teams uniformly with the injected rng.
/// 3. Pair consecutively: shuffled slots 2i and 2i+1 meet in match i+1.
///
/// The rng is injected so a seeded draw is reproducible under test.
/// Returns the tournament already in progress with round 1 materialized.
pub fn create_tournament(
    name: impl Into<String>,
    teams: &[Team],
    rng: &mut impl Rng,
) -> Result<Tournament, TournamentError> {
    let size = validate_entrants(teams)?;

    let mut slots: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
    slots.shuffle(rng);

    let mut tournament = Tournament::new(name, size);
    let round = Round::first(size);
    tournament.fixtures = slots
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| Fixture::new(round, i as u32 + 1, pair[0], pair[1]))
        .collect();
    tournament.state = TournamentState::InProgress;

    log::info!(
        "Drew tournament '{}': {} teams, {} first-round fixtures",
        tournament.name,
        size.teams(),
        tournament.fixtures.len()
    );
    Ok(tournament)
}

/// Close the current round and open the next one.
///
/// Every fixture of the current round must have a winner. Winners pair in
/// bracket order: matches 2i-1 and 2i feed match i of the next round. When
/// the final is the round being closed, the tournament finishes and the
/// final's winner becomes the champion.
pub fn advance_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.state == TournamentState::Finished {
        return Err(TournamentError::TournamentFinished);
    }
    let missing = tournament.unresolved_in_current_round();
    if missing > 0 {
        return Err(TournamentError::RoundIncomplete { missing });
    }

    let current = tournament.current_round;
    let mut winners: Vec<(u32, TeamId)> = tournament
        .fixtures_in_round(current)
        .filter_map(|fx| fx.winner.map(|w| (fx.number, w)))
        .collect();
    winners.sort_by_key(|(number, _)| *number);

    match current.next() {
        None => {
            // The final: exactly one winner left.
            tournament.champion = winners.first().map(|(_, w)| *w);
            tournament.state = TournamentState::Finished;
            log::info!("Tournament '{}' finished", tournament.name);
        }
        Some(next) => {
            let next_fixtures: Vec<Fixture> = winners
                .chunks_exact(2)
                .enumerate()
                .map(|(i, pair)| Fixture::new(next, i as u32 + 1, pair[0].1, pair[1].1))
                .collect();
            tournament.fixtures.extend(next_fixtures);
            tournament.current_round = next;
            log::info!(
                "Tournament '{}' advanced to {} ({} fixtures)",
                tournament.name,
                next,
                next.matches()
            );
        }
    }
    Ok(())
}

/// One team slot in the bracket view; `None` name if the id is unknown.
#[derive(Clone, Debug, Serialize)]
pub struct TeamSlot {
    pub id: TeamId,
    pub name: Option<String>,
}

/// One fixture as rendered in the bracket view.
#[derive(Clone, Debug, Serialize)]
pub struct FixtureView {
    pub id: FixtureId,
    pub number: u32,
    pub home: TeamSlot,
    pub away: TeamSlot,
    pub kickoff: Option<NaiveDateTime>,
    pub score: Option<Score>,
    pub winner: Option<TeamId>,
}

/// One round of the bracket view, fixtures in match order.
#[derive(Clone, Debug, Serialize)]
pub struct RoundView {
    pub round: Round,
    pub fixtures: Vec<FixtureView>,
}

/// The whole bracket, first materialized round to the last.
#[derive(Clone, Debug, Serialize)]
pub struct BracketView {
    pub rounds: Vec<RoundView>,
    pub champion: Option<TeamSlot>,
}

/// Read-only bracket query for rendering. `teams` supplies display names;
/// ids with no registered team render without one. No side effects.
pub fn current_bracket(tournament: &Tournament, teams: &[Team]) -> BracketView {
    let slot = |id: TeamId| TeamSlot {
        id,
        name: teams.iter().find(|t| t.id == id).map(|t| t.name.clone()),
    };

    let mut rounds = Vec::new();
    let mut round = Some(Round::first(tournament.size));
    while let Some(r) = round {
        let mut fixtures: Vec<FixtureView> = tournament
            .fixtures_in_round(r)
            .map(|fx| FixtureView {
                id: fx.id,
                number: fx.number,
                home: slot(fx.home),
                away: slot(fx.away),
                kickoff: fx.kickoff,
                score: fx.score,
                winner: fx.winner,
            })
            .collect();
        if fixtures.is_empty() {
            break;
        }
        fixtures.sort_by_key(|fx| fx.number);
        rounds.push(RoundView { round: r, fixtures });
        round = r.next();
    }

    BracketView {
        rounds,
        champion: tournament.champion.map(slot),
    }
}
