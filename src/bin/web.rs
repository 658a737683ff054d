//! Single binary web server: REST API over one match-maker session.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable on a LAN at the courts.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_FILE (roster JSON path).

use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use badminton_match_maker::{
    apply, export_csv, import_csv, Command, GameMode, Gender, JsonFileStore, PlayerId, Session,
    StoredRoster,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// The live session plus where its roster is persisted.
struct AppState {
    session: Session,
    store: JsonFileStore,
}

type SharedState = Data<RwLock<AppState>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Session as returned to clients, with the headcount the current settings need.
#[derive(Serialize)]
struct SessionResponse<'a> {
    #[serde(flatten)]
    session: &'a Session,
    players_needed: usize,
}

impl<'a> SessionResponse<'a> {
    fn new(session: &'a Session) -> Self {
        Self {
            session,
            players_needed: session.players_needed(),
        }
    }
}

#[derive(Deserialize)]
struct AddPlayersBody {
    /// One or more names separated by commas or whitespace.
    names: String,
    gender: Gender,
}

#[derive(Deserialize)]
struct SelectAllBody {
    select: bool,
}

#[derive(Deserialize)]
struct SetModeBody {
    mode: GameMode,
}

#[derive(Deserialize)]
struct SetCourtsBody {
    courts: usize,
}

/// Path segment: player id (e.g. /api/players/{id})
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

fn bad_request(message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": message.to_string() }))
}

/// Apply one command to the shared session and persist the roster if it changed.
fn run_command(state: &SharedState, command: Command) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let persist = command.touches_roster();
    let clearing = matches!(command, Command::ClearAll);
    let outcome = apply(&g.session, command, &mut rand::thread_rng());
    g.session = outcome.session;
    if let Some(e) = outcome.error {
        return bad_request(e);
    }
    if persist {
        let result = if clearing {
            g.store.clear()
        } else {
            g.store.save(&StoredRoster::from_session(&g.session))
        };
        // The session stays usable in memory even if the disk is not.
        if let Err(e) = result {
            log::error!("failed to persist roster to {}: {}", g.store.path().display(), e);
        }
    }
    HttpResponse::Ok().json(SessionResponse::new(&g.session))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "badminton-match-maker",
    })
}

/// Current roster, selection, settings and pending matches.
#[get("/api/session")]
async fn api_get_session(state: SharedState) -> HttpResponse {
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(SessionResponse::new(&g.session)),
        Err(_) => HttpResponse::InternalServerError().body("lock error"),
    }
}

/// Add one or more players of one gender; they are selected right away.
#[post("/api/players")]
async fn api_add_players(state: SharedState, body: Json<AddPlayersBody>) -> HttpResponse {
    let body = body.into_inner();
    run_command(
        &state,
        Command::AddPlayers {
            names: body.names,
            gender: body.gender,
        },
    )
}

/// Remove every player.
#[delete("/api/players")]
async fn api_clear_players(state: SharedState) -> HttpResponse {
    run_command(&state, Command::ClearAll)
}

#[delete("/api/players/{id}")]
async fn api_delete_player(state: SharedState, path: Path<PlayerPath>) -> HttpResponse {
    run_command(&state, Command::DeletePlayer { id: path.id })
}

#[post("/api/players/{id}/selection")]
async fn api_toggle_selection(state: SharedState, path: Path<PlayerPath>) -> HttpResponse {
    run_command(&state, Command::ToggleSelection { id: path.id })
}

/// Toggle the must-play flag.
#[post("/api/players/{id}/priority")]
async fn api_toggle_priority(state: SharedState, path: Path<PlayerPath>) -> HttpResponse {
    run_command(&state, Command::TogglePriority { id: path.id })
}

/// Select everyone (`{"select": true}`) or no one.
#[put("/api/selection")]
async fn api_select_all(state: SharedState, body: Json<SelectAllBody>) -> HttpResponse {
    let command = if body.select {
        Command::SelectAll
    } else {
        Command::SelectNone
    };
    run_command(&state, command)
}

#[put("/api/mode")]
async fn api_set_mode(state: SharedState, body: Json<SetModeBody>) -> HttpResponse {
    run_command(&state, Command::SetMode { mode: body.mode })
}

#[put("/api/courts")]
async fn api_set_courts(state: SharedState, body: Json<SetCourtsBody>) -> HttpResponse {
    run_command(&state, Command::SetCourts { courts: body.courts })
}

/// Propose matches for every court (replaces any pending proposal).
#[post("/api/matches/generate")]
async fn api_generate_matches(state: SharedState) -> HttpResponse {
    run_command(&state, Command::Generate)
}

/// All courts finished: count the appearances and clear the proposal.
#[post("/api/matches/confirm")]
async fn api_confirm_matches(state: SharedState) -> HttpResponse {
    run_command(&state, Command::Confirm)
}

#[get("/api/roster.csv")]
async fn api_export_roster(state: SharedState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match export_csv(&g.session.players) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => {
            log::error!("roster export failed: {}", e);
            HttpResponse::InternalServerError().body("export error")
        }
    }
}

/// Append players from a CSV body (`name,gender,play_count,priority`).
#[post("/api/roster.csv")]
async fn api_import_roster(state: SharedState, body: String) -> HttpResponse {
    match import_csv(body.as_bytes()) {
        Ok(entries) => run_command(&state, Command::ImportRoster { entries }),
        Err(e) => bad_request(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> String {
    "badminton_roster.json".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_file = std::env::var("DATA_FILE").unwrap_or_else(|_| default_data_file());
    let bind = (host.as_str(), port);

    let store = JsonFileStore::new(data_file);
    let session = store.load().into_session();
    log::info!(
        "Roster file {} ({} players). Starting server at http://{}:{}",
        store.path().display(),
        session.players.len(),
        bind.0,
        bind.1
    );

    let state = Data::new(RwLock::new(AppState { session, store }));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_get_session)
            .service(api_add_players)
            .service(api_clear_players)
            .service(api_delete_player)
            .service(api_toggle_selection)
            .service(api_toggle_priority)
            .service(api_select_all)
            .service(api_set_mode)
            .service(api_set_courts)
            .service(api_generate_matches)
            .service(api_confirm_matches)
            .service(api_export_roster)
            .service(api_import_roster)
            .route("/", web::get().to(index))
    })
    .bind(bind)?
    .run()
    .await
}

/// Plain pointer to the API; the court display is a separate front end.
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Badminton match maker API: see /api/session")
}
