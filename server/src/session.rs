//! Cookie-backed sessions.
//!
//! The browser holds one opaque UUID v4 id in an HTTP-only cookie; the
//! session document itself lives in Redis under `session:<id>` and expires
//! after a month of inactivity (every save refreshes the TTL). Ids that no
//! longer resolve to a document are discarded and replaced.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use redis::{AsyncCommands, aio::ConnectionManager};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::AppError, models::Appointment};

pub const SESSION_COOKIE: &str = "clinic_session";

const SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 30;

/// Per-browser state. Same field set the request handlers read and write:
/// login name, admin flag, last symptom input, pending booking confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub user: Option<String>,
    pub admin: bool,
    pub symptoms_input: Option<String>,
    pub appointment_details: Option<Appointment>,
}

fn session_key(id: &str) -> String {
    format!("session:{id}")
}

/// Loads the session named by the request cookie.
///
/// A missing cookie or an unknown/expired id yields a fresh id and an empty
/// session; nothing is written until [`save`].
pub async fn load(
    con: &mut ConnectionManager,
    jar: &CookieJar,
) -> Result<(String, Session), AppError> {
    let id = match jar.get(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => return Ok((Uuid::new_v4().to_string(), Session::default())),
    };

    let raw: Option<String> = con.get(session_key(&id)).await?;

    match raw {
        Some(doc) => Ok((id, serde_json::from_str(&doc)?)),
        None => Ok((Uuid::new_v4().to_string(), Session::default())),
    }
}

/// Persists the session and returns the jar carrying its cookie.
pub async fn save(
    con: &mut ConnectionManager,
    jar: CookieJar,
    id: &str,
    session: &Session,
) -> Result<CookieJar, AppError> {
    let doc = serde_json::to_string(session)?;
    let _: () = con.set_ex(session_key(id), doc, SESSION_TTL_SECS).await?;

    let mut cookie = Cookie::new(SESSION_COOKIE, id.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);

    Ok(jar.add(cookie))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_deserializes_to_defaults() {
        let session: Session = serde_json::from_str("{}").unwrap();

        assert_eq!(session.user, None);
        assert!(!session.admin);
        assert_eq!(session.symptoms_input, None);
        assert!(session.appointment_details.is_none());
    }

    #[test]
    fn round_trip_preserves_fields() {
        let session = Session {
            user: Some("Ada".to_string()),
            admin: true,
            symptoms_input: Some("fever cough".to_string()),
            appointment_details: None,
        };

        let doc = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&doc).unwrap();

        assert_eq!(back.user.as_deref(), Some("Ada"));
        assert!(back.admin);
        assert_eq!(back.symptoms_input.as_deref(), Some("fever cough"));
    }

    #[test]
    fn session_keys_are_namespaced() {
        assert_eq!(session_key("abc"), "session:abc");
    }
}
