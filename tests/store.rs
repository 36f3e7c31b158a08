//! Integration tests for the store: registry, one-active-tournament rule,
//! roster import.

use football_tournament_web::{
    import_roster_csv, validate_entrants, BracketSize, Store, TeamId, TournamentError,
    MIN_SQUAD_SIZE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Register `n` full-squad teams and return their ids.
fn register_teams(store: &mut Store, n: usize) -> Vec<TeamId> {
    (0..n)
        .map(|i| {
            let id = store.add_team(&format!("Team {i}")).unwrap();
            for j in 0..MIN_SQUAD_SIZE {
                store
                    .add_squad_player(id, &format!("P{i}-{j}"), j as u32 + 1)
                    .unwrap();
            }
            id
        })
        .collect()
}

#[test]
fn team_names_are_unique_case_insensitively() {
    let mut store = Store::new();
    store.add_team("Eagles").unwrap();
    assert_eq!(
        store.add_team("  eagles ").unwrap_err(),
        TournamentError::DuplicateTeamName
    );
    assert_eq!(store.add_team("").unwrap_err(), TournamentError::EmptyName);
}

#[test]
fn only_one_tournament_may_be_in_progress() {
    let mut store = Store::new();
    let ids = register_teams(&mut store, 8);
    let mut rng = StdRng::seed_from_u64(1);

    store.create_tournament("First", &ids, &mut rng).unwrap();
    assert_eq!(
        store
            .create_tournament("Second", &ids, &mut rng)
            .unwrap_err(),
        TournamentError::TournamentActive
    );
}

#[test]
fn finalize_clears_the_active_slot_and_permits_a_new_draw() {
    let mut store = Store::new();
    let ids = register_teams(&mut store, 8);
    let mut rng = StdRng::seed_from_u64(2);

    store.create_tournament("First", &ids, &mut rng).unwrap();
    store.finalize_active().unwrap();
    assert_eq!(
        store.active().unwrap_err(),
        TournamentError::NoActiveTournament
    );
    assert_eq!(store.archive().len(), 1);

    store.create_tournament("Second", &ids, &mut rng).unwrap();
    assert_eq!(store.active().unwrap().name, "Second");
}

#[test]
fn teams_are_frozen_while_a_tournament_is_active() {
    let mut store = Store::new();
    let ids = register_teams(&mut store, 8);
    let mut rng = StdRng::seed_from_u64(3);
    store.create_tournament("Cup", &ids, &mut rng).unwrap();

    assert_eq!(
        store.add_team("Latecomers").unwrap_err(),
        TournamentError::TournamentActive
    );
    assert_eq!(
        store.remove_team(ids[0]).unwrap_err(),
        TournamentError::TournamentActive
    );
    assert_eq!(
        store.add_squad_player(ids[0], "Sub", 12).unwrap_err(),
        TournamentError::TournamentActive
    );
    // Referees are not frozen; they can still register.
    store.add_referee("Ref").unwrap();
}

#[test]
fn a_team_cannot_enter_the_draw_twice() {
    let mut store = Store::new();
    let ids = register_teams(&mut store, 7);
    // Pad the entrant list to 8 by repeating the first team.
    let mut entrants = ids.clone();
    entrants.push(ids[0]);

    assert_eq!(
        store
            .create_tournament("Cup", &entrants, &mut StdRng::seed_from_u64(8))
            .unwrap_err(),
        TournamentError::DuplicateEntrant {
            team: "Team 0".to_string()
        }
    );
    assert_eq!(
        store.active().unwrap_err(),
        TournamentError::NoActiveTournament
    );
}

#[test]
fn failed_draw_leaves_no_active_tournament() {
    let mut store = Store::new();
    let ids = register_teams(&mut store, 9);
    let mut rng = StdRng::seed_from_u64(4);
    assert_eq!(
        store.create_tournament("Cup", &ids, &mut rng).unwrap_err(),
        TournamentError::InvalidSize(9)
    );
    assert_eq!(
        store.active().unwrap_err(),
        TournamentError::NoActiveTournament
    );
}

#[test]
fn roster_csv_groups_players_under_their_teams() {
    let csv = "\
team,player,shirt
Eagles,Ana,1
Eagles,Bea,2
Hawks,Cruz,1
Eagles,Dee,3
Hawks,Eli,2
";
    let teams = import_roster_csv(csv.as_bytes()).unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].name, "Eagles");
    assert_eq!(teams[0].seed, 1);
    assert_eq!(teams[0].squad.len(), 3);
    assert_eq!(teams[1].name, "Hawks");
    assert_eq!(teams[1].squad.len(), 2);
}

#[test]
fn importing_a_clashing_team_name_rejects_the_whole_batch() {
    let mut store = Store::new();
    store.add_team("Eagles").unwrap();
    let csv = "team,player,shirt\nEAGLES,Ana,1\nHawks,Bea,2\n";
    let teams = import_roster_csv(csv.as_bytes()).unwrap();
    assert_eq!(
        store.import_teams(teams).unwrap_err(),
        TournamentError::DuplicateTeamName
    );
    assert_eq!(store.teams().len(), 1);
}

#[test]
fn entrant_validation_reports_size_and_short_squads() {
    let mut store = Store::new();
    let ids = register_teams(&mut store, 16);
    let teams: Vec<_> = ids.iter().map(|id| store.team(*id).unwrap().clone()).collect();
    assert_eq!(validate_entrants(&teams).unwrap(), BracketSize::Sixteen);

    let mut short = teams.clone();
    short[5].squad.truncate(4);
    assert_eq!(
        validate_entrants(&short).unwrap_err(),
        TournamentError::SquadTooSmall {
            team: "Team 5".to_string(),
            missing: 3
        }
    );
}
