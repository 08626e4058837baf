use std::path::PathBuf;
use serde_json::{json, Value};

use shared_config::AppConfig;

pub struct TestConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub http_timeout_secs: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            session_file: PathBuf::from("test-session.json"),
            http_timeout_secs: 5,
        }
    }
}

impl TestConfig {
    /// Points the client at a mock server, e.g. `wiremock::MockServer::uri()`.
    pub fn with_server(uri: &str) -> Self {
        Self {
            api_base_url: uri.to_string(),
            ..Self::default()
        }
    }

    pub fn session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            api_base_url: self.api_base_url.clone(),
            session_file: self.session_file.clone(),
            http_timeout_secs: self.http_timeout_secs,
        }
    }
}

pub struct MockClinicResponses;

impl MockClinicResponses {
    pub fn slot(id: i64, time: &str, is_booked: bool) -> Value {
        json!({
            "id": id,
            "time": time,
            "isBooked": is_booked
        })
    }

    /// The two-slot day used throughout the tests: 9:00 open, 10:00 taken.
    pub fn sample_day() -> Value {
        json!([
            Self::slot(1, "9:00", false),
            Self::slot(2, "10:00", true)
        ])
    }

    pub fn open_day(times: &[&str]) -> Value {
        Value::Array(
            times.iter()
                .enumerate()
                .map(|(i, time)| Self::slot(i as i64 + 1, time, false))
                .collect(),
        )
    }

    pub fn booking(time: &str, booked_date: &str, doctor_name: &str) -> Value {
        json!({
            "time": time,
            "bookedDate": booked_date,
            "doctorName": doctor_name
        })
    }

    pub fn login_response(username: &str) -> Value {
        json!({ "username": username })
    }

    pub fn error_response(message: &str) -> Value {
        json!({ "message": message })
    }
}
