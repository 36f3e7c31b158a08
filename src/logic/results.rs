//! Result recording for fixtures of the open round.

use crate::models::{FixtureId, Score, Tournament, TournamentError, TournamentState};

/// Record (or overwrite) the result of a fixture in the current round.
///
/// The score must produce a winner: unequal goals, or level goals decided
/// by an unequal penalty shootout pair. A drawn score is rejected and the
/// fixture is left untouched. Re-recording before the round is advanced
/// replaces the previous score and winner in place; once the round has
/// been advanced its results are closed.
pub fn record_result(
    tournament: &mut Tournament,
    fixture_id: FixtureId,
    score: Score,
) -> Result<(), TournamentError> {
    if tournament.state == TournamentState::Finished {
        return Err(TournamentError::TournamentFinished);
    }

    let current = tournament.current_round;
    let fixture = tournament
        .fixture(fixture_id)
        .ok_or(TournamentError::FixtureNotFound(fixture_id))?;
    if fixture.round != current {
        return Err(TournamentError::RoundClosed);
    }

    // Validate before touching the fixture; a draw must leave it unset.
    let side = score.winner().ok_or(TournamentError::DrawnScore)?;
    let winner = fixture.side(side);

    let fixture = tournament
        .fixture_mut(fixture_id)
        .ok_or(TournamentError::FixtureNotFound(fixture_id))?;
    fixture.score = Some(score);
    fixture.winner = Some(winner);
    Ok(())
}
