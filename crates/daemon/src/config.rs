//! Server configuration, read once from the environment at startup

use std::str::FromStr;
use std::time::Duration;
use tally_api_http::rate_limiter::MAX_BURST;
use tally_api_http::{HttpServerConfig, SessionSettings};
use tally_core::error::{AppError, Result};

const DEFAULT_DB_PATH: &str = "~/.tally/tally.db";
const DEFAULT_SESSION_TTL_HOURS: i64 = 168;
/// Ten years
const MAX_SESSION_TTL_HOURS: i64 = 10 * 366 * 24;
const MS_PER_HOUR: i64 = 60 * 60 * 1000;
const DEFAULT_LOGIN_RATE_BURST: u32 = 20;
const DEFAULT_LOGIN_RATE_RATE: u32 = 5;
const DEFAULT_MAINTENANCE_INTERVAL_MINUTES: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Operator account created at startup when missing
#[derive(Clone, PartialEq)]
pub struct BootstrapUser {
    pub email: String,
    pub user_name: String,
    pub name: String,
    pub password: String,
}

impl std::fmt::Debug for BootstrapUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapUser")
            .field("email", &self.email)
            .field("user_name", &self.user_name)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub db_path: String,
    pub http: HttpServerConfig,
    pub session: SessionSettings,
    pub maintenance_interval: Duration,
    pub bootstrap: Option<BootstrapUser>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset and blank values take the default
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let db_path = get("TALLY_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        let db_path = shellexpand::tilde(&db_path).into_owned();

        let defaults = HttpServerConfig::default();
        let http = HttpServerConfig {
            host: get("TALLY_HTTP_HOST").unwrap_or(defaults.host),
            port: parse(&get, "TALLY_HTTP_PORT", defaults.port)?,
        };

        let ttl_hours: i64 = parse(&get, "TALLY_SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)?;
        if !(1..=MAX_SESSION_TTL_HOURS).contains(&ttl_hours) {
            return Err(AppError::Config(format!(
                "TALLY_SESSION_TTL_HOURS must be between 1 and {}",
                MAX_SESSION_TTL_HOURS
            )));
        }

        let session = SessionSettings {
            ttl_ms: ttl_hours * MS_PER_HOUR,
            cookie_secure: parse(&get, "TALLY_COOKIE_SECURE", false)?,
            login_rate_burst: parse(&get, "TALLY_LOGIN_RATE_BURST", DEFAULT_LOGIN_RATE_BURST)?,
            login_rate_per_sec: parse(&get, "TALLY_LOGIN_RATE_RATE", DEFAULT_LOGIN_RATE_RATE)?,
        };
        if !(1..=MAX_BURST).contains(&session.login_rate_burst) {
            return Err(AppError::Config(format!(
                "TALLY_LOGIN_RATE_BURST must be between 1 and {}",
                MAX_BURST
            )));
        }

        let interval_minutes: u64 = parse(
            &get,
            "TALLY_MAINTENANCE_INTERVAL_MINUTES",
            DEFAULT_MAINTENANCE_INTERVAL_MINUTES,
        )?;
        let maintenance_interval = interval_minutes
            .checked_mul(60)
            .filter(|_| interval_minutes > 0)
            .map(Duration::from_secs)
            .ok_or_else(|| {
                AppError::Config(
                    "TALLY_MAINTENANCE_INTERVAL_MINUTES must be a positive number of minutes"
                        .to_string(),
                )
            })?;

        let log_format = match get("TALLY_LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "TALLY_LOG_FORMAT must be 'json' or 'pretty', got '{}'",
                    other
                )))
            }
        };

        Ok(Self {
            db_path,
            http,
            session,
            maintenance_interval,
            bootstrap: bootstrap_user(&get)?,
            log_format,
        })
    }
}

fn parse<T, G>(get: &G, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid {} '{}': {}", key, raw, e))),
    }
}

/// Email and password go together; user name defaults to the email's local part
fn bootstrap_user<G>(get: &G) -> Result<Option<BootstrapUser>>
where
    G: Fn(&str) -> Option<String>,
{
    match (get("TALLY_BOOTSTRAP_EMAIL"), get("TALLY_BOOTSTRAP_PASSWORD")) {
        (None, None) => Ok(None),
        (Some(email), Some(password)) => {
            let user_name = get("TALLY_BOOTSTRAP_USER_NAME").unwrap_or_else(|| {
                email
                    .split('@')
                    .next()
                    .unwrap_or(email.as_str())
                    .to_string()
            });
            let name = get("TALLY_BOOTSTRAP_NAME").unwrap_or_else(|| user_name.clone());
            Ok(Some(BootstrapUser {
                email,
                user_name,
                name,
                password,
            }))
        }
        _ => Err(AppError::Config(
            "TALLY_BOOTSTRAP_EMAIL and TALLY_BOOTSTRAP_PASSWORD must be set together".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert!(config.db_path.ends_with(".tally/tally.db"));
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.session.ttl_ms, 168 * 3_600_000);
        assert!(!config.session.cookie_secure);
        assert_eq!(config.session.login_rate_burst, 20);
        assert_eq!(config.session.login_rate_per_sec, 5);
        assert_eq!(config.maintenance_interval, Duration::from_secs(3600));
        assert_eq!(config.bootstrap, None);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("TALLY_DB_PATH", "/var/lib/tally/shop.db"),
            ("TALLY_HTTP_PORT", "9000"),
            ("TALLY_COOKIE_SECURE", "true"),
            ("TALLY_SESSION_TTL_HOURS", "1"),
            ("TALLY_LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.db_path, "/var/lib/tally/shop.db");
        assert_eq!(config.http.port, 9000);
        assert!(config.session.cookie_secure);
        assert_eq!(config.session.ttl_ms, 3_600_000);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values_rejected() {
        for vars in [
            [("TALLY_HTTP_PORT", "eighty")],
            [("TALLY_SESSION_TTL_HOURS", "0")],
            [("TALLY_SESSION_TTL_HOURS", "3000000000000000")],
            [("TALLY_SESSION_TTL_HOURS", "87841")],
            [("TALLY_COOKIE_SECURE", "yes")],
            [("TALLY_LOG_FORMAT", "xml")],
            [("TALLY_LOGIN_RATE_BURST", "0")],
            [("TALLY_LOGIN_RATE_BURST", "4294968")],
            [("TALLY_MAINTENANCE_INTERVAL_MINUTES", "0")],
            [("TALLY_MAINTENANCE_INTERVAL_MINUTES", "18446744073709551615")],
        ] {
            assert!(
                matches!(config(&vars), Err(AppError::Config(_))),
                "{:?}",
                vars
            );
        }
    }

    #[test]
    fn test_bootstrap_user() {
        let bootstrap = config(&[
            ("TALLY_BOOTSTRAP_EMAIL", "owner@shop.rs"),
            ("TALLY_BOOTSTRAP_PASSWORD", "change-me-now"),
        ])
        .unwrap()
        .bootstrap
        .unwrap();
        assert_eq!(bootstrap.user_name, "owner");
        assert_eq!(bootstrap.name, "owner");
        assert!(!format!("{:?}", bootstrap).contains("change-me-now"));

        let partial = config(&[("TALLY_BOOTSTRAP_EMAIL", "owner@shop.rs")]);
        assert!(matches!(partial, Err(AppError::Config(_))));
    }
}
