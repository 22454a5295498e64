use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::Utc;
use serde_json::json;
use tracing::info;
use triage::{catalog, quiz, symptoms};
use uuid::Uuid;

use crate::{
    database,
    error::AppError,
    models::{
        Appointment, AppointmentPayload, LoginPayload, RegisterPayload, SymptomsPayload, User,
    },
    session,
    state::AppState,
    utils,
};

pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse, AppError> {
    let name = utils::non_empty(&payload.name)?.to_string();
    let email = utils::valid_email(&payload.email)?.to_string();
    utils::non_empty(&payload.password)?;

    let mut con = state.redis_connection.clone();

    if database::find_user(&mut con, &email).await?.is_some() {
        return Err(AppError::EmailTaken);
    }

    let user = User {
        name,
        email,
        password_hash: hash(&payload.password, DEFAULT_COST)?,
        created_at: Utc::now(),
    };

    database::insert_user(&mut con, &user).await?;

    info!("Registered {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Registration successful! Please login." })),
    ))
}

pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    let email = utils::valid_email(&payload.email)?.to_string();

    let mut con = state.redis_connection.clone();

    // Same response for unknown email and wrong password.
    let user = database::find_user(&mut con, &email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify(&payload.password, &user.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    let (id, mut session) = session::load(&mut con, &jar).await?;
    session.user = Some(user.name.clone());
    let jar = session::save(&mut con, jar, &id, &session).await?;

    info!("Login for {email}");

    Ok((
        jar,
        Json(json!({ "message": "Login successful!", "name": user.name })),
    ))
}

pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let mut con = state.redis_connection.clone();

    let (id, mut session) = session::load(&mut con, &jar).await?;
    session.user = None;
    let jar = session::save(&mut con, jar, &id, &session).await?;

    Ok((jar, Json(json!({ "message": "You have been logged out." }))))
}

pub async fn tests_handler() -> impl IntoResponse {
    let names: Vec<&str> = catalog::TESTS.iter().map(|t| t.name).collect();

    Json(names)
}

pub async fn test_details_handler(
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    catalog::find(&name).map(Json).ok_or(AppError::NotFound)
}

pub async fn book_appointment_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<AppointmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    let mut con = state.redis_connection.clone();

    let (id, mut session) = session::load(&mut con, &jar).await?;
    let user_name = session.user.clone().ok_or(AppError::Unauthorized)?;

    let email = utils::valid_email(&payload.email)?.to_string();
    utils::non_empty(&payload.date)?;
    utils::non_empty(&payload.time)?;
    utils::non_empty(&payload.test)?;
    utils::non_empty(&payload.phone_number)?;

    let appointment = Appointment {
        id: Uuid::new_v4().to_string(),
        name: user_name,
        email,
        date: payload.date,
        time: payload.time,
        test: payload.test,
        phone_number: payload.phone_number,
        description: payload.description,
        created_at: Utc::now(),
    };

    database::insert_appointment(&mut con, &appointment).await?;

    // Kept for one read by the confirmation endpoint.
    session.appointment_details = Some(appointment.clone());
    let jar = session::save(&mut con, jar, &id, &session).await?;

    info!("Appointment booked for {}", appointment.email);

    Ok((StatusCode::CREATED, jar, Json(appointment)))
}

pub async fn confirmation_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let mut con = state.redis_connection.clone();

    let (id, mut session) = session::load(&mut con, &jar).await?;

    let details = session
        .appointment_details
        .take()
        .ok_or(AppError::NotFound)?;
    let jar = session::save(&mut con, jar, &id, &session).await?;

    Ok((jar, Json(details)))
}

pub async fn symptoms_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<SymptomsPayload>,
) -> Result<impl IntoResponse, AppError> {
    let assessment = symptoms::evaluate(&payload.symptoms);

    let mut con = state.redis_connection.clone();

    let (id, mut session) = session::load(&mut con, &jar).await?;
    session.symptoms_input = Some(payload.symptoms);
    let jar = session::save(&mut con, jar, &id, &session).await?;

    Ok((jar, Json(assessment)))
}

pub async fn symptoms_input_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let mut con = state.redis_connection.clone();

    let (_, session) = session::load(&mut con, &jar).await?;

    Ok(Json(
        json!({ "symptoms_input": session.symptoms_input.unwrap_or_default() }),
    ))
}

pub async fn quiz_handler() -> impl IntoResponse {
    Json(quiz::QUESTIONS)
}

pub async fn quiz_submit_handler(Json(answers): Json<quiz::QuizAnswers>) -> impl IntoResponse {
    let recommended_tests = quiz::recommend(&answers);

    Json(json!({ "recommended_tests": recommended_tests, "answers": answers }))
}
