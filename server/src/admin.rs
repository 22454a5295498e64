//! Admin panel: credential check against configuration, dashboard listing,
//! appointment deletion. All gated on the session `admin` flag.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use tracing::{info, warn};

use crate::{
    database,
    error::AppError,
    models::{AdminLoginPayload, PublicUser},
    session,
    state::AppState,
};

pub async fn admin_login_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<AdminLoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    if payload.username != state.config.admin_username
        || payload.password != state.config.admin_password
    {
        warn!("Failed admin login for {}", payload.username);
        return Err(AppError::Unauthorized);
    }

    let mut con = state.redis_connection.clone();

    let (id, mut session) = session::load(&mut con, &jar).await?;
    session.admin = true;
    let jar = session::save(&mut con, jar, &id, &session).await?;

    info!("Admin session opened");

    Ok((jar, Json(json!({ "message": "Admin login successful." }))))
}

pub async fn admin_logout_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let mut con = state.redis_connection.clone();

    let (id, mut session) = session::load(&mut con, &jar).await?;
    session.admin = false;
    let jar = session::save(&mut con, jar, &id, &session).await?;

    Ok((jar, Json(json!({ "message": "Admin logged out successfully." }))))
}

pub async fn admin_dashboard_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let mut con = state.redis_connection.clone();

    let (_, session) = session::load(&mut con, &jar).await?;
    if !session.admin {
        return Err(AppError::Unauthorized);
    }

    let users: Vec<PublicUser> = database::all_users(&mut con)
        .await?
        .into_iter()
        .map(PublicUser::from)
        .collect();
    let appointments = database::all_appointments(&mut con).await?;

    Ok(Json(json!({ "users": users, "appointments": appointments })))
}

pub async fn delete_appointment_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut con = state.redis_connection.clone();

    let (_, session) = session::load(&mut con, &jar).await?;
    if !session.admin {
        return Err(AppError::Unauthorized);
    }

    if !database::delete_appointment(&mut con, &id).await? {
        return Err(AppError::NotFound);
    }

    info!("Appointment {id} deleted");

    Ok(Json(json!({ "message": "Appointment deleted successfully." })))
}
