//! # Redis
//!
//! Document store for the clinic.
//!
//! ## Layout
//!
//! - Hash `users`: field = email, value = JSON user document
//! - Hash `appointments`: field = appointment id (UUID v4), value = JSON
//!   appointment document
//! - Key `session:<id>`: JSON session document with a TTL (see
//!   [`crate::session`])
//!
//! One hash per collection keeps single-document lookups O(1) on the natural
//! key, and the admin dashboard can fetch a whole collection with one
//! HGETALL-family call.
use std::time::Duration;

use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

use crate::{
    error::AppError,
    models::{Appointment, User},
};

pub const USERS_KEY: &str = "users";
pub const APPOINTMENTS_KEY: &str = "appointments";

pub async fn init_redis(redis_url: &str) -> ConnectionManager {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url).unwrap();

    client
        .get_connection_manager_with_config(config)
        .await
        .unwrap()
}

pub async fn find_user(
    con: &mut ConnectionManager,
    email: &str,
) -> Result<Option<User>, AppError> {
    let raw: Option<String> = con.hget(USERS_KEY, email).await?;

    raw.map(|doc| serde_json::from_str(&doc))
        .transpose()
        .map_err(AppError::from)
}

pub async fn insert_user(con: &mut ConnectionManager, user: &User) -> Result<(), AppError> {
    let doc = serde_json::to_string(user)?;
    let _: () = con.hset(USERS_KEY, &user.email, doc).await?;

    Ok(())
}

pub async fn all_users(con: &mut ConnectionManager) -> Result<Vec<User>, AppError> {
    let raw: Vec<String> = con.hvals(USERS_KEY).await?;

    raw.iter()
        .map(|doc| serde_json::from_str(doc))
        .collect::<Result<_, _>>()
        .map_err(AppError::from)
}

pub async fn insert_appointment(
    con: &mut ConnectionManager,
    appointment: &Appointment,
) -> Result<(), AppError> {
    let doc = serde_json::to_string(appointment)?;
    let _: () = con.hset(APPOINTMENTS_KEY, &appointment.id, doc).await?;

    Ok(())
}

pub async fn all_appointments(
    con: &mut ConnectionManager,
) -> Result<Vec<Appointment>, AppError> {
    let raw: Vec<String> = con.hvals(APPOINTMENTS_KEY).await?;

    raw.iter()
        .map(|doc| serde_json::from_str(doc))
        .collect::<Result<_, _>>()
        .map_err(AppError::from)
}

/// Returns whether an appointment was actually removed.
pub async fn delete_appointment(
    con: &mut ConnectionManager,
    id: &str,
) -> Result<bool, AppError> {
    let removed: usize = con.hdel(APPOINTMENTS_KEY, id).await?;

    Ok(removed > 0)
}
