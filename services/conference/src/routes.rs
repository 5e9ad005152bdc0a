//! Conference service routes

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
};
use common::User;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    display::{MeetingTime, format_meeting_date},
    error::ConferenceResult,
    roster::{Meeting, UnresolvedReference},
    state::AppState,
};

/// Request for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for user login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: User,
}

/// Query for profile lookup
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub email: String,
}

/// Meeting as listed to clients, with display-ready time fields
#[derive(Debug, Serialize)]
pub struct ScheduledMeeting {
    #[serde(flatten)]
    pub meeting: Meeting,
    pub time: Option<String>,
    pub day: Option<String>,
}

/// Response for roster listing
#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub meetings: Vec<ScheduledMeeting>,
    pub unresolved: Vec<UnresolvedReference>,
}

/// Create the router for the conference service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/auth/login", post(login))
        .route("/users", get(profile))
        .route("/users/:id/meetings", get(meetings))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "conference"
    }))
}

/// User login endpoint
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ConferenceResult<Json<LoginResponse>> {
    let user = state
        .login_service
        .authenticate(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse { user }))
}

/// Profile lookup endpoint
pub async fn profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> ConferenceResult<Json<User>> {
    let user = state.login_service.profile(&query.email).await?;
    Ok(Json(user))
}

/// Roster endpoint
pub async fn meetings(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ConferenceResult<Json<RosterResponse>> {
    let roster = state.roster_service.roster_for(&user_id).await?;

    let meetings = roster
        .meetings
        .into_iter()
        .map(|meeting| {
            let schedule = match format_meeting_date(&meeting.date, state.display_offset) {
                Ok(MeetingTime { time, day }) => Some((time, day)),
                Err(e) => {
                    warn!("Meeting {} has no displayable time: {}", meeting.id, e);
                    None
                }
            };
            let (time, day) = schedule.unzip();
            ScheduledMeeting { meeting, time, day }
        })
        .collect();

    Ok(Json(RosterResponse {
        meetings,
        unresolved: roster.unresolved,
    }))
}
