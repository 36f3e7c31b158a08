//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::NaiveDateTime;
use football_tournament_web::{
    advance_round, current_bracket, fixtures_by_day, import_roster_csv, record_result,
    schedule_fixture, ErrorKind, FixtureId, PlayerId, RefereeId, Score, Store, TeamId,
    TournamentError,
};
use serde::Deserialize;
use std::sync::RwLock;

/// Shared app state: the whole persistence collaborator behind one lock.
/// Each request is a single atomic read-modify-write against it.
type AppState = Data<RwLock<Store>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
}

#[derive(Deserialize)]
struct AddSquadPlayerBody {
    name: String,
    shirt: u32,
}

#[derive(Deserialize)]
struct AddRefereeBody {
    name: String,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    team_ids: Vec<TeamId>,
}

#[derive(Deserialize)]
struct RecordResultBody {
    fixture_id: FixtureId,
    goals_home: u32,
    goals_away: u32,
    /// Penalty shootout (home, away); required when goals are level.
    penalties: Option<(u32, u32)>,
}

#[derive(Deserialize)]
struct ScheduleFixtureBody {
    fixture_id: FixtureId,
    kickoff: NaiveDateTime,
    referee_id: Option<RefereeId>,
}

/// Path segment: team id (e.g. /api/teams/{id})
#[derive(Deserialize)]
struct TeamPath {
    id: TeamId,
}

/// Path segments: team id and player id.
#[derive(Deserialize)]
struct TeamPlayerPath {
    id: TeamId,
    player_id: PlayerId,
}

/// Map engine errors onto HTTP: missing things are 404, bad input 422,
/// wrong-state 409. Body is always `{"error": "..."}`.
fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::FixtureNotFound(_)
        | TournamentError::TeamNotFound(_)
        | TournamentError::RefereeNotFound(_)
        | TournamentError::PlayerNotFound(_)
        | TournamentError::NoActiveTournament => HttpResponse::NotFound().json(body),
        _ => match e.kind() {
            ErrorKind::Validation => HttpResponse::UnprocessableEntity().json(body),
            ErrorKind::State => HttpResponse::Conflict().json(body),
        },
    }
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "football-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[get("/api/teams")]
async fn api_list_teams(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(g.teams())
}

/// Register a team (rejected while a tournament is in progress).
#[post("/api/teams")]
async fn api_add_team(state: AppState, body: Json<AddTeamBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.add_team(&body.name) {
        Ok(id) => HttpResponse::Ok().json(g.team(id)),
        Err(e) => error_response(&e),
    }
}

#[delete("/api/teams/{id}")]
async fn api_remove_team(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.remove_team(path.id) {
        Ok(()) => HttpResponse::Ok().json(g.teams()),
        Err(e) => error_response(&e),
    }
}

/// Add a squad player to a team.
#[post("/api/teams/{id}/players")]
async fn api_add_squad_player(
    state: AppState,
    path: Path<TeamPath>,
    body: Json<AddSquadPlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.add_squad_player(path.id, &body.name, body.shirt) {
        Ok(_) => HttpResponse::Ok().json(g.team(path.id)),
        Err(e) => error_response(&e),
    }
}

#[delete("/api/teams/{id}/players/{player_id}")]
async fn api_remove_squad_player(state: AppState, path: Path<TeamPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.remove_squad_player(path.id, path.player_id) {
        Ok(()) => HttpResponse::Ok().json(g.team(path.id)),
        Err(e) => error_response(&e),
    }
}

/// Bulk roster import: CSV body with `team,player,shirt` columns.
#[post("/api/teams/import")]
async fn api_import_roster(state: AppState, body: String) -> HttpResponse {
    let teams = match import_roster_csv(body.as_bytes()) {
        Ok(teams) => teams,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": format!("CSV parse error: {}", e) }))
        }
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.import_teams(teams) {
        Ok(count) => HttpResponse::Ok().json(serde_json::json!({ "imported": count })),
        Err(e) => error_response(&e),
    }
}

#[get("/api/referees")]
async fn api_list_referees(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(g.referees())
}

#[post("/api/referees")]
async fn api_add_referee(state: AppState, body: Json<AddRefereeBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.add_referee(&body.name) {
        Ok(id) => HttpResponse::Ok().json(g.referee(id)),
        Err(e) => error_response(&e),
    }
}

/// Run the draw over the selected teams; only one tournament may be in
/// progress at a time.
#[post("/api/tournament")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut rng = rand::thread_rng();
    match g.create_tournament(&body.name, &body.team_ids, &mut rng) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

#[get("/api/tournament")]
async fn api_get_tournament(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.active() {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Full bracket view: every materialized round with teams and results.
#[get("/api/tournament/bracket")]
async fn api_bracket(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.active() {
        Ok(t) => HttpResponse::Ok().json(current_bracket(t, g.teams())),
        Err(e) => error_response(&e),
    }
}

/// Record (or overwrite) a result for a fixture of the open round.
#[put("/api/tournament/result")]
async fn api_record_result(state: AppState, body: Json<RecordResultBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let score = match body.penalties {
        Some((h, a)) => Score::with_penalties(body.goals_home, body.goals_away, h, a),
        None => Score::new(body.goals_home, body.goals_away),
    };
    let t = match g.active_mut() {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match record_result(t, body.fixture_id, score) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(&e),
    }
}

/// Close the current round: pair winners into the next round, or finish
/// the tournament when the final is done.
#[post("/api/tournament/advance")]
async fn api_advance_round(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.active_mut() {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match advance_round(t) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(&e),
    }
}

/// Set a fixture's kickoff and referee.
#[put("/api/tournament/schedule")]
async fn api_schedule_fixture(state: AppState, body: Json<ScheduleFixtureBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let referee = match body.referee_id {
        Some(id) => match g.referee(id) {
            Some(r) => Some(r.clone()),
            None => return error_response(&TournamentError::RefereeNotFound(id)),
        },
        None => None,
    };
    let t = match g.active_mut() {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match schedule_fixture(t, body.fixture_id, body.kickoff, referee.as_ref()) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(&e),
    }
}

/// Calendar view: scheduled fixtures grouped by day.
#[get("/api/tournament/calendar")]
async fn api_calendar(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.active() {
        Ok(t) => HttpResponse::Ok().json(fixtures_by_day(t)),
        Err(e) => error_response(&e),
    }
}

/// Archive the active tournament and clear the one-active slot.
#[post("/api/tournament/finalize")]
async fn api_finalize_tournament(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.finalize_active() {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(Store::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_list_teams)
            .service(api_add_team)
            .service(api_remove_team)
            .service(api_add_squad_player)
            .service(api_remove_squad_player)
            .service(api_import_roster)
            .service(api_list_referees)
            .service(api_add_referee)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_bracket)
            .service(api_record_result)
            .service(api_advance_round)
            .service(api_schedule_fixture)
            .service(api_calendar)
            .service(api_finalize_tournament)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
