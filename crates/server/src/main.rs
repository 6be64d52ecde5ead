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
    extract::{
        Path, Query, State as AxumState,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use kitchen::ScheduleStore;
use kitchen_api::{
    ApiError, FieldErrors, ListSchedulesQuery, ListSchedulesResponse, ScheduleResponse,
    ScheduleStatusResponse, cancel_schedule, create_schedule, delete_schedule, get_schedule,
    get_schedule_status, list_schedules, update_schedule,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Kitchen Schedules Server - HTTP API for kitchen order schedules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The store is held behind a mutex; each request holds the lock for
/// the whole of its read-modify-write.
#[derive(Clone)]
struct AppState {
    /// The in-memory schedule collection.
    store: Arc<Mutex<ScheduleStore>>,
}

impl AppState {
    fn new(store: ScheduleStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
    /// Field-level validation detail, present only for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// Field-level validation detail.
    errors: Option<FieldErrors>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            errors: self.errors,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ValidationFailed { ref errors } => {
                let fields: Vec<&str> = errors.fields().collect();
                debug!(?fields, error = %err, "Request failed validation");
                Self {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    message: String::from("Validation failed"),
                    errors: Some(errors.clone()),
                }
            }
            ApiError::ResourceNotFound {
                ref resource_type, ..
            } => {
                warn!(resource = %resource_type, error = %err, "Resource not found");
                Self {
                    status: StatusCode::NOT_FOUND,
                    message: err.to_string(),
                    errors: None,
                }
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                    errors: None,
                }
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(error = %rejection, "Rejected request body");
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
            errors: None,
        }
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        debug!(error = %rejection, "Rejected query string");
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
            errors: None,
        }
    }
}

/// Handler for GET `/kitchen/schedules` endpoint.
///
/// Lists schedules, optionally filtered by `progress`, `since` and `limit`.
/// The query is taken as raw pairs so a repeated parameter keeps its first
/// value instead of being rejected.
async fn handle_list_schedules(
    AxumState(app_state): AxumState<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ListSchedulesResponse>, HttpError> {
    let Query(pairs) = pairs?;
    let query: ListSchedulesQuery = ListSchedulesQuery::from_pairs(pairs);
    info!(
        progress = ?query.progress,
        limit = ?query.limit,
        since = ?query.since,
        "Handling list_schedules request"
    );

    let store = app_state.store.lock().await;
    let response: ListSchedulesResponse = list_schedules(&store, &query)?;
    drop(store);

    info!(count = response.schedules.len(), "Listed schedules");
    Ok(Json(response))
}

/// Handler for POST `/kitchen/schedules` endpoint.
///
/// Creates a new pending schedule.
async fn handle_create_schedule(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ScheduleResponse>), HttpError> {
    let Json(body) = payload?;
    info!("Handling create_schedule request");

    let mut store = app_state.store.lock().await;
    let response: ScheduleResponse = create_schedule(&mut store, &body)?;
    drop(store);

    info!(
        schedule_id = %response.id,
        items = response.order.len(),
        "Successfully created schedule"
    );
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/kitchen/schedules/{schedule_id}` endpoint.
async fn handle_get_schedule(
    AxumState(app_state): AxumState<AppState>,
    Path(schedule_id): Path<String>,
) -> Result<Json<ScheduleResponse>, HttpError> {
    info!(schedule_id = %schedule_id, "Handling get_schedule request");

    let store = app_state.store.lock().await;
    let response: ScheduleResponse = get_schedule(&store, &schedule_id)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for PUT `/kitchen/schedules/{schedule_id}` endpoint.
///
/// Replaces the order of an existing schedule.
async fn handle_update_schedule(
    AxumState(app_state): AxumState<AppState>,
    Path(schedule_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ScheduleResponse>, HttpError> {
    let Json(body) = payload?;
    info!(schedule_id = %schedule_id, "Handling update_schedule request");

    let mut store = app_state.store.lock().await;
    let response: ScheduleResponse = update_schedule(&mut store, &schedule_id, &body)?;
    drop(store);

    info!(schedule_id = %schedule_id, "Successfully updated schedule");
    Ok(Json(response))
}

/// Handler for DELETE `/kitchen/schedules/{schedule_id}` endpoint.
async fn handle_delete_schedule(
    AxumState(app_state): AxumState<AppState>,
    Path(schedule_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    info!(schedule_id = %schedule_id, "Handling delete_schedule request");

    let mut store = app_state.store.lock().await;
    delete_schedule(&mut store, &schedule_id)?;
    drop(store);

    info!(schedule_id = %schedule_id, "Successfully deleted schedule");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST `/kitchen/schedules/{schedule_id}/cancel` endpoint.
///
/// Cancels a schedule whatever its current status.
async fn handle_cancel_schedule(
    AxumState(app_state): AxumState<AppState>,
    Path(schedule_id): Path<String>,
) -> Result<Json<ScheduleResponse>, HttpError> {
    info!(schedule_id = %schedule_id, "Handling cancel_schedule request");

    let mut store = app_state.store.lock().await;
    let response: ScheduleResponse = cancel_schedule(&mut store, &schedule_id)?;
    drop(store);

    info!(schedule_id = %schedule_id, "Successfully cancelled schedule");
    Ok(Json(response))
}

/// Handler for GET `/kitchen/schedules/{schedule_id}/status` endpoint.
async fn handle_get_schedule_status(
    AxumState(app_state): AxumState<AppState>,
    Path(schedule_id): Path<String>,
) -> Result<Json<ScheduleStatusResponse>, HttpError> {
    info!(schedule_id = %schedule_id, "Handling get_schedule_status request");

    let store = app_state.store.lock().await;
    let response: ScheduleStatusResponse = get_schedule_status(&store, &schedule_id)?;
    drop(store);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/kitchen/schedules",
            get(handle_list_schedules).post(handle_create_schedule),
        )
        .route(
            "/kitchen/schedules/{schedule_id}",
            get(handle_get_schedule)
                .put(handle_update_schedule)
                .delete(handle_delete_schedule),
        )
        .route(
            "/kitchen/schedules/{schedule_id}/cancel",
            post(handle_cancel_schedule),
        )
        .route(
            "/kitchen/schedules/{schedule_id}/status",
            get(handle_get_schedule_status),
        )
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

    info!("Initializing Kitchen Schedules Server");

    let app_state: AppState = AppState::new(ScheduleStore::new());
    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.host, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
