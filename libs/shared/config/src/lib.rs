use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("CLINIC_API_URL")
                .unwrap_or_else(|_| {
                    warn!("CLINIC_API_URL not set, using default {}", DEFAULT_API_URL);
                    DEFAULT_API_URL.to_string()
                }),
            session_file: env::var("CLINIC_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_file()),
            http_timeout_secs: match env::var("CLINIC_HTTP_TIMEOUT_SECS") {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!("CLINIC_HTTP_TIMEOUT_SECS is not a number ({}), using default", raw);
                    DEFAULT_HTTP_TIMEOUT_SECS
                }),
                Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
            },
        };

        if !config.is_configured() {
            warn!("Application not fully configured - API base URL is empty");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.trim().is_empty()
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Base URL without a trailing slash, ready for `format!("{}{}", base, path)`.
    pub fn api_root(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

fn default_session_file() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join("clinic-booking").join("session.json"),
        None => {
            warn!("No local data directory available, storing session next to the binary");
            PathBuf::from("clinic-session.json")
        }
    }
}
