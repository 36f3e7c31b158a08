//! Fixture scheduling: kickoff times and referee assignment.

use crate::models::{
    FixtureId, Referee, Tournament, TournamentError, TournamentState,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Assign a kickoff (and optionally a referee) to a fixture.
///
/// A referee already booked for a different fixture at the same kickoff is
/// rejected; re-scheduling the same fixture never conflicts with itself.
pub fn schedule_fixture(
    tournament: &mut Tournament,
    fixture_id: FixtureId,
    kickoff: NaiveDateTime,
    referee: Option<&Referee>,
) -> Result<(), TournamentError> {
    if tournament.state == TournamentState::Finished {
        return Err(TournamentError::TournamentFinished);
    }
    if tournament.fixture(fixture_id).is_none() {
        return Err(TournamentError::FixtureNotFound(fixture_id));
    }

    if let Some(referee) = referee {
        let booked = tournament.fixtures.iter().any(|fx| {
            fx.id != fixture_id && fx.referee == Some(referee.id) && fx.kickoff == Some(kickoff)
        });
        if booked {
            return Err(TournamentError::RefereeConflict {
                referee: referee.name.clone(),
                kickoff,
            });
        }
    }

    let fixture = tournament
        .fixture_mut(fixture_id)
        .ok_or(TournamentError::FixtureNotFound(fixture_id))?;
    fixture.kickoff = Some(kickoff);
    fixture.referee = referee.map(|r| r.id);
    Ok(())
}

/// Fixtures of one calendar day, in kickoff order.
#[derive(Clone, Debug, Serialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub fixtures: Vec<FixtureId>,
}

/// Scheduled fixtures grouped by day, earliest day first. Unscheduled
/// fixtures are not listed.
pub fn fixtures_by_day(tournament: &Tournament) -> Vec<DaySchedule> {
    let mut scheduled: Vec<(NaiveDateTime, FixtureId)> = tournament
        .fixtures
        .iter()
        .filter_map(|fx| fx.kickoff.map(|k| (k, fx.id)))
        .collect();
    scheduled.sort();

    let mut days: Vec<DaySchedule> = Vec::new();
    for (kickoff, id) in scheduled {
        let date = kickoff.date();
        match days.last_mut() {
            Some(day) if day.date == date => day.fixtures.push(id),
            _ => days.push(DaySchedule {
                date,
                fixtures: vec![id],
            }),
        }
    }
    days
}
