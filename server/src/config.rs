use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub redis_url: String,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("CLINIC_PORT", "8080"),
            redis_url: try_load("REDIS_URL", "redis://127.0.0.1:6379"),
            admin_username: try_load("CLINIC_ADMIN_USER", "admin"),
            admin_password: secret_or("CLINIC_ADMIN_PASSWORD", "admin123"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

// Docker secret file first, then env, then the default.
fn secret_or(name: &str, default: &str) -> String {
    let path = format!("/run/secrets/{name}");

    if let Ok(value) = read_to_string(&path) {
        return value.trim().to_string();
    }

    try_load(name, default)
}
