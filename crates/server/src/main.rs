// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use rota_api::{
    ApiError, CreateScheduleRequest, CreateUserRequest, PublicScheduleResponse, ReassignRequest,
    SwapRequest, SwapResponse, UpdateSettingsRequest, UpdateUserRequest,
};
use rota_audit::TradeRecord;
use rota_core::{MemoryStore, ScheduleStore};
use rota_domain::{MonthlySettings, Schedule, User};
use rota_persistence::SqliteStore;

/// Rota Server - HTTP server for the on-call scheduler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory storage.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The store is behind a Mutex so handlers can take the mutable access
/// every store operation requires.
#[derive(Clone)]
struct AppState {
    /// The schedule store backing all operations.
    store: Arc<Mutex<Box<dyn ScheduleStore + Send>>>,
}

/// Query parameters selecting a month.
#[derive(Debug, Deserialize)]
struct MonthQuery {
    /// Calendar month (1-12).
    month: u8,
    /// Calendar year.
    year: u16,
}

/// API request for patching a month's settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateSettingsApiRequest {
    /// Calendar month (1-12).
    month: u8,
    /// Calendar year.
    year: u16,
    /// New publish state, unchanged when omitted.
    #[serde(default)]
    is_published: Option<bool>,
    /// New share token, unchanged when omitted.
    #[serde(default)]
    public_share_token: Option<String>,
}

/// API request for regenerating a month's share token.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenApiRequest {
    /// Calendar month (1-12).
    month: u8,
    /// Calendar year.
    year: u16,
}

/// API response for delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteResponse {
    /// Success indicator.
    success: bool,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Conflict { .. } => Self {
                status: StatusCode::CONFLICT,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/api/users`.
async fn handle_list_users(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<User>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let users: Vec<User> = rota_api::list_users(&mut **store)?;
    Ok(Json(users))
}

/// Handler for POST `/api/users`.
async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), HttpError> {
    info!(name = %req.name, role = %req.role, "Handling create_user request");

    let mut store = app_state.store.lock().await;
    let user: User = rota_api::create_user(&mut **store, req)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Handler for PUT `/api/users/{id}`.
async fn handle_update_user(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<User>, HttpError> {
    info!(user_id = %id, "Handling update_user request");

    let mut store = app_state.store.lock().await;
    let user: User = rota_api::update_user(&mut **store, &id, req)?;
    Ok(Json(user))
}

/// Handler for DELETE `/api/users/{id}`.
async fn handle_delete_user(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(user_id = %id, "Handling delete_user request");

    let mut store = app_state.store.lock().await;
    rota_api::delete_user(&mut **store, &id)?;
    Ok(Json(DeleteResponse { success: true }))
}

/// Handler for GET `/api/schedules`.
async fn handle_list_schedules(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<Schedule>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let schedules: Vec<Schedule> =
        rota_api::list_schedules(&mut **store, query.month, query.year)?;
    Ok(Json(schedules))
}

/// Handler for POST `/api/schedules`.
async fn handle_create_schedule(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<Schedule>), HttpError> {
    info!(
        month = req.month,
        year = req.year,
        day = req.day,
        user_id = %req.user_id,
        "Handling create_schedule request"
    );

    let mut store = app_state.store.lock().await;
    let schedule: Schedule = rota_api::create_schedule(&mut **store, req)?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// Handler for DELETE `/api/schedules/{id}`.
async fn handle_delete_schedule(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(schedule_id = %id, "Handling delete_schedule request");

    let mut store = app_state.store.lock().await;
    rota_api::delete_schedule(&mut **store, &id)?;
    Ok(Json(DeleteResponse { success: true }))
}

/// Handler for POST `/api/schedules/reassign`.
async fn handle_reassign(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ReassignRequest>,
) -> Result<Json<Schedule>, HttpError> {
    info!(
        schedule_id = %req.schedule_id,
        to_user_id = %req.to_user_id,
        "Handling reassign request"
    );

    let mut store = app_state.store.lock().await;
    let schedule: Schedule = rota_api::reassign_schedule(&mut **store, req)?;
    Ok(Json(schedule))
}

/// Handler for POST `/api/schedules/swap`.
async fn handle_swap(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SwapRequest>,
) -> Result<Json<SwapResponse>, HttpError> {
    info!(
        schedule_id_a = %req.schedule_id_a,
        schedule_id_b = %req.schedule_id_b,
        "Handling swap request"
    );

    let mut store = app_state.store.lock().await;
    let response: SwapResponse = rota_api::swap_schedules(&mut **store, req)?;
    Ok(Json(response))
}

/// Handler for GET `/api/monthly-settings`.
///
/// A month that was never configured serializes as `null`.
async fn handle_get_settings(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Option<MonthlySettings>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let settings: Option<MonthlySettings> =
        rota_api::get_monthly_settings(&mut **store, query.month, query.year)?;
    Ok(Json(settings))
}

/// Handler for PUT `/api/monthly-settings`.
async fn handle_update_settings(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UpdateSettingsApiRequest>,
) -> Result<Json<MonthlySettings>, HttpError> {
    info!(
        month = req.month,
        year = req.year,
        is_published = ?req.is_published,
        "Handling update_settings request"
    );

    let mut store = app_state.store.lock().await;
    let settings: MonthlySettings = rota_api::update_monthly_settings(
        &mut **store,
        req.month,
        req.year,
        UpdateSettingsRequest {
            is_published: req.is_published,
            public_share_token: req.public_share_token,
        },
    )?;
    Ok(Json(settings))
}

/// Handler for POST `/api/monthly-settings/token`.
async fn handle_generate_token(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<TokenApiRequest>,
) -> Result<Json<MonthlySettings>, HttpError> {
    info!(
        month = req.month,
        year = req.year,
        "Handling generate_token request"
    );

    let mut store = app_state.store.lock().await;
    let settings: MonthlySettings =
        rota_api::regenerate_share_token(&mut **store, req.month, req.year)?;
    Ok(Json(settings))
}

/// Handler for GET `/api/trades`.
async fn handle_list_trades(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<TradeRecord>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let trades: Vec<TradeRecord> =
        rota_api::list_trades(&mut **store, query.month, query.year)?;
    Ok(Json(trades))
}

/// Handler for GET `/api/public/{token}`.
async fn handle_public_schedule(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<PublicScheduleResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let snapshot: PublicScheduleResponse = rota_api::public_schedule(&mut **store, &token)?;
    Ok(Json(snapshot))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/users", get(handle_list_users))
        .route("/api/users", post(handle_create_user))
        .route("/api/users/{id}", put(handle_update_user))
        .route("/api/users/{id}", delete(handle_delete_user))
        .route("/api/schedules", get(handle_list_schedules))
        .route("/api/schedules", post(handle_create_schedule))
        .route("/api/schedules/{id}", delete(handle_delete_schedule))
        .route("/api/schedules/reassign", post(handle_reassign))
        .route("/api/schedules/swap", post(handle_swap))
        .route("/api/monthly-settings", get(handle_get_settings))
        .route("/api/monthly-settings", put(handle_update_settings))
        .route("/api/monthly-settings/token", post(handle_generate_token))
        .route("/api/trades", get(handle_list_trades))
        .route("/api/public/{token}", get(handle_public_schedule))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Rota Server");

    // Choose the store backend from CLI arguments
    let store: Box<dyn ScheduleStore + Send> = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Box::new(SqliteStore::new_with_file(db_path)?)
    } else {
        info!("Using in-memory storage");
        Box::new(MemoryStore::new())
    };

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state backed by an in-memory database.
    fn create_test_app_state() -> AppState {
        let store: SqliteStore =
            SqliteStore::new_in_memory().expect("Failed to create in-memory store");
        AppState {
            store: Arc::new(Mutex::new(Box::new(store))),
        }
    }

    async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn get_uri(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Creates a user via the API and returns its ID.
    async fn create_user(app: &Router, name: &str, role: &str) -> String {
        let response = post_json(
            app,
            "/api/users",
            serde_json::json!({
                "name": name,
                "phone": "555-123-4567",
                "role": role,
            }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::CREATED);
        body_json(response).await["id"].as_str().unwrap().to_string()
    }

    /// Creates a March 2025 schedule entry and returns its ID.
    async fn create_march_schedule(app: &Router, user_id: &str, day: u8) -> String {
        let response = post_json(
            app,
            "/api/schedules",
            serde_json::json!({
                "month": 3,
                "year": 2025,
                "day": day,
                "userId": user_id,
            }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::CREATED);
        body_json(response).await["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_one_role_slot_per_day() {
        let app: Router = build_router(create_test_app_state());

        let first: String = create_user(&app, "Dr. Chen", "physician").await;
        let second: String = create_user(&app, "Dr. Patel", "physician").await;
        let learner: String = create_user(&app, "Sam Rivera", "learner").await;

        create_march_schedule(&app, &first, 5).await;

        let conflict = post_json(
            &app,
            "/api/schedules",
            serde_json::json!({
                "month": 3,
                "year": 2025,
                "day": 5,
                "userId": second,
            }),
        )
        .await;
        assert_eq!(conflict.status(), HttpStatusCode::CONFLICT);
        let body = body_json(conflict).await;
        assert!(body["message"].as_str().unwrap().contains("physician"));

        // A learner on the same day is fine
        create_march_schedule(&app, &learner, 5).await;
    }

    #[tokio::test]
    async fn test_nonexistent_date_is_bad_request() {
        let app: Router = build_router(create_test_app_state());
        let user: String = create_user(&app, "Dr. Chen", "physician").await;

        let response = post_json(
            &app,
            "/api/schedules",
            serde_json::json!({
                "month": 2,
                "year": 2025,
                "day": 30,
                "userId": user,
            }),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = post_json(
            &app,
            "/api/schedules",
            serde_json::json!({
                "month": 3,
                "year": 2025,
                "day": 5,
                "userId": "00000000-0000-4000-8000-000000000000",
            }),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_user_name_is_conflict() {
        let app: Router = build_router(create_test_app_state());
        create_user(&app, "Dr. Chen", "physician").await;

        let response = post_json(
            &app,
            "/api/users",
            serde_json::json!({
                "name": "Dr. Chen",
                "phone": "555-987-6543",
                "role": "learner",
            }),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_delete_user_owning_schedules_is_conflict() {
        let app: Router = build_router(create_test_app_state());
        let user: String = create_user(&app, "Dr. Chen", "physician").await;
        create_march_schedule(&app, &user, 5).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/users/{user}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::CONFLICT);

        // The user is still there
        let users = body_json(get_uri(&app, "/api/users").await).await;
        assert_eq!(users.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_swap_leaves_both_owners_in_place() {
        let app: Router = build_router(create_test_app_state());
        let user: String = create_user(&app, "Dr. Chen", "physician").await;
        let schedule_a: String = create_march_schedule(&app, &user, 5).await;
        let schedule_b: String = create_march_schedule(&app, &user, 12).await;

        let response = post_json(
            &app,
            "/api/schedules/swap",
            serde_json::json!({
                "scheduleIdA": schedule_a,
                "scheduleIdB": schedule_b,
            }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::CONFLICT);

        let schedules = body_json(get_uri(&app, "/api/schedules?month=3&year=2025").await).await;
        for entry in schedules.as_array().unwrap() {
            assert_eq!(entry["userId"].as_str().unwrap(), user);
        }
    }

    #[tokio::test]
    async fn test_swap_exchanges_owners_and_records_trade() {
        let app: Router = build_router(create_test_app_state());
        let first: String = create_user(&app, "Dr. Chen", "physician").await;
        let second: String = create_user(&app, "Dr. Patel", "physician").await;
        let schedule_a: String = create_march_schedule(&app, &first, 5).await;
        let schedule_b: String = create_march_schedule(&app, &second, 12).await;

        let response = post_json(
            &app,
            "/api/schedules/swap",
            serde_json::json!({
                "scheduleIdA": schedule_a,
                "scheduleIdB": schedule_b,
            }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["scheduleA"]["userId"].as_str().unwrap(), second);
        assert_eq!(body["scheduleB"]["userId"].as_str().unwrap(), first);

        let trades = body_json(get_uri(&app, "/api/trades?month=3&year=2025").await).await;
        assert_eq!(trades.as_array().unwrap().len(), 1);
        assert_eq!(trades[0]["kind"].as_str().unwrap(), "swap");
    }

    #[tokio::test]
    async fn test_reassign_moves_schedule() {
        let app: Router = build_router(create_test_app_state());
        let first: String = create_user(&app, "Dr. Chen", "physician").await;
        let second: String = create_user(&app, "Dr. Patel", "physician").await;
        let schedule: String = create_march_schedule(&app, &first, 5).await;

        let response = post_json(
            &app,
            "/api/schedules/reassign",
            serde_json::json!({
                "scheduleId": schedule,
                "toUserId": second,
            }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["id"].as_str().unwrap(), schedule);
        assert_eq!(body["userId"].as_str().unwrap(), second);
    }

    #[tokio::test]
    async fn test_unconfigured_month_settings_are_null() {
        let app: Router = build_router(create_test_app_state());

        let response = get_uri(&app, "/api/monthly-settings?month=3&year=2025").await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body = body_json(response).await;
        assert!(body.is_null());
    }

    #[tokio::test]
    async fn test_public_view_lifecycle() {
        let app: Router = build_router(create_test_app_state());
        let user: String = create_user(&app, "Dr. Chen", "physician").await;
        create_march_schedule(&app, &user, 5).await;

        // Token on an unpublished month does not resolve
        let token_response = post_json(
            &app,
            "/api/monthly-settings/token",
            serde_json::json!({"month": 3, "year": 2025}),
        )
        .await;
        assert_eq!(token_response.status(), HttpStatusCode::OK);
        let first_token: String = body_json(token_response).await["publicShareToken"]
            .as_str()
            .unwrap()
            .to_string();

        let hidden = get_uri(&app, &format!("/api/public/{first_token}")).await;
        assert_eq!(hidden.status(), HttpStatusCode::NOT_FOUND);

        // Publish the month
        let publish = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/monthly-settings")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({"month": 3, "year": 2025, "isPublished": true})
                            .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(publish.status(), HttpStatusCode::OK);

        let snapshot = body_json(get_uri(&app, &format!("/api/public/{first_token}")).await).await;
        assert_eq!(snapshot["schedules"].as_array().unwrap().len(), 1);
        assert_eq!(snapshot["users"].as_array().unwrap().len(), 1);

        // Regenerating invalidates the previous token
        let regenerated = post_json(
            &app,
            "/api/monthly-settings/token",
            serde_json::json!({"month": 3, "year": 2025}),
        )
        .await;
        let second_token: String = body_json(regenerated).await["publicShareToken"]
            .as_str()
            .unwrap()
            .to_string();
        assert_ne!(first_token, second_token);

        let stale = get_uri(&app, &format!("/api/public/{first_token}")).await;
        assert_eq!(stale.status(), HttpStatusCode::NOT_FOUND);

        let fresh = get_uri(&app, &format!("/api/public/{second_token}")).await;
        assert_eq!(fresh.status(), HttpStatusCode::OK);
    }

    #[tokio::test]
    async fn test_settings_put_accepts_share_token() {
        let app: Router = build_router(create_test_app_state());
        let user: String = create_user(&app, "Dr. Chen", "physician").await;
        create_march_schedule(&app, &user, 5).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/monthly-settings")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "month": 3,
                            "year": 2025,
                            "isPublished": true,
                            "publicShareToken": "restored-token",
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["publicShareToken"].as_str().unwrap(), "restored-token");

        let public = get_uri(&app, "/api/public/restored-token").await;
        assert_eq!(public.status(), HttpStatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/schedules/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }
}
