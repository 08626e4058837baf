use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Method,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use shared_config::AppConfig;
use shared_models::auth::{LoginRequest, LoginResponse, RegisterRequest};
use shared_models::booking::{BookingRecord, BookingRequest};
use shared_models::slot::Slot;
use shared_models::ClientError;

/// Thin JSON client for the clinic booking API. One instance is shared by
/// every service; it holds no per-user state.
#[derive(Clone)]
pub struct ClinicApiClient {
    client: Client,
    base_url: String,
}

impl ClinicApiClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(config.http_timeout())
            .build()
            .unwrap_or_else(|err| {
                warn!("Failed to build HTTP client with timeout ({}), using defaults", err);
                Client::new()
            });

        Self {
            client,
            base_url: config.api_root().to_string(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut req = self.client.request(method, &url)
            .headers(self.get_headers());

        if !query.is_empty() {
            req = req.query(query);
        }

        if let Some(body_data) = body {
            req = req.json(body_data);
        }

        let response = req.send().await.map_err(|err| {
            error!("Request to {} failed: {}", url, err);
            ClientError::Transport(err)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_slice(&bytes).map_err(|err| {
                error!("API error ({}) with unreadable body: {}", status, err);
                ClientError::Decode(err.to_string())
            })?;

            let message = body.get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    status.canonical_reason().unwrap_or("Request failed").to_string()
                });

            warn!("API rejected request ({}): {}", status, message);
            return Err(ClientError::Rejected { status: status.as_u16(), message });
        }

        let data = serde_json::from_slice::<T>(&bytes)?;
        Ok(data)
    }

    pub async fn get_slots(&self, date: &str) -> Result<Vec<Slot>, ClientError> {
        self.request::<_, ()>(Method::GET, "/slots", &[("date", date)], None).await
    }

    pub async fn book(&self, booking: &BookingRequest) -> Result<(), ClientError> {
        let _: Value = self.request(Method::POST, "/book", &[], Some(booking)).await?;
        Ok(())
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.request(Method::POST, "/login", &[], Some(credentials)).await
    }

    pub async fn register(&self, registration: &RegisterRequest) -> Result<(), ClientError> {
        let _: Value = self.request(Method::POST, "/register", &[], Some(registration)).await?;
        Ok(())
    }

    pub async fn my_bookings(&self, username: &str) -> Result<Vec<BookingRecord>, ClientError> {
        self.request::<_, ()>(Method::GET, "/my-bookings", &[("name", username)], None).await
    }
}
