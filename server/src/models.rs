use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored user document. Lives in the `users` hash keyed by email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User view for the admin dashboard. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Stored appointment document. Lives in the `appointments` hash keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub test: String,
    pub phone_number: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AppointmentPayload {
    pub email: String,
    pub date: String,
    pub time: String,
    pub test: String,
    pub phone_number: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct SymptomsPayload {
    pub symptoms: String,
}

#[derive(Debug, Deserialize)]
pub struct AdminLoginPayload {
    pub username: String,
    pub password: String,
}
