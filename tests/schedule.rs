//! Integration tests for fixture scheduling and the calendar view.

use chrono::NaiveDate;
use football_tournament_web::{
    create_tournament, fixtures_by_day, schedule_fixture, Player, Referee, Team, Tournament,
    TournamentError, MIN_SQUAD_SIZE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn eight_team_tournament() -> Tournament {
    let teams: Vec<Team> = (0..8)
        .map(|i| {
            let mut team = Team::new(format!("Team {i}"), i as u32 + 1);
            for j in 0..MIN_SQUAD_SIZE {
                team.squad.push(Player::new(format!("P{i}-{j}"), j as u32 + 1));
            }
            team
        })
        .collect();
    let mut rng = StdRng::seed_from_u64(50);
    create_tournament("Cup", &teams, &mut rng).unwrap()
}

fn kickoff(day: u32, hour: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 9, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[test]
fn referee_cannot_take_two_fixtures_at_the_same_kickoff() {
    let mut t = eight_team_tournament();
    let referee = Referee::new("Collina");
    let first = t.fixtures[0].id;
    let second = t.fixtures[1].id;

    schedule_fixture(&mut t, first, kickoff(5, 16), Some(&referee)).unwrap();
    assert_eq!(
        schedule_fixture(&mut t, second, kickoff(5, 16), Some(&referee)).unwrap_err(),
        TournamentError::RefereeConflict {
            referee: "Collina".to_string(),
            kickoff: kickoff(5, 16),
        }
    );

    // A different hour is fine.
    schedule_fixture(&mut t, second, kickoff(5, 18), Some(&referee)).unwrap();
}

#[test]
fn rescheduling_a_fixture_does_not_conflict_with_itself() {
    let mut t = eight_team_tournament();
    let referee = Referee::new("Collina");
    let id = t.fixtures[0].id;

    schedule_fixture(&mut t, id, kickoff(5, 16), Some(&referee)).unwrap();
    schedule_fixture(&mut t, id, kickoff(5, 16), Some(&referee)).unwrap();
    assert_eq!(t.fixture(id).unwrap().kickoff, Some(kickoff(5, 16)));
    assert_eq!(t.fixture(id).unwrap().referee, Some(referee.id));
}

#[test]
fn calendar_groups_fixtures_by_day_in_kickoff_order() {
    let mut t = eight_team_tournament();
    let ids: Vec<_> = t.fixtures.iter().map(|fx| fx.id).collect();

    schedule_fixture(&mut t, ids[0], kickoff(6, 18), None).unwrap();
    schedule_fixture(&mut t, ids[1], kickoff(5, 16), None).unwrap();
    schedule_fixture(&mut t, ids[2], kickoff(5, 12), None).unwrap();
    // ids[3] left unscheduled.

    let days = fixtures_by_day(&t);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 9, 5).unwrap());
    assert_eq!(days[0].fixtures, vec![ids[2], ids[1]]);
    assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2026, 9, 6).unwrap());
    assert_eq!(days[1].fixtures, vec![ids[0]]);
}

#[test]
fn scheduling_an_unknown_fixture_is_reported() {
    let mut t = eight_team_tournament();
    let bogus = uuid::Uuid::new_v4();
    assert_eq!(
        schedule_fixture(&mut t, bogus, kickoff(5, 16), None).unwrap_err(),
        TournamentError::FixtureNotFound(bogus)
    );
}
