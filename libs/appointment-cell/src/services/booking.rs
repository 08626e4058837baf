use tracing::{debug, info};

use shared_api::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::booking::BookingRequest;
use shared_models::ClientError;

use crate::models::BookingForm;

pub struct BookingService {
    api: ClinicApiClient,
}

impl BookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(ClinicApiClient::new(config))
    }

    pub fn with_client(api: ClinicApiClient) -> Self {
        Self { api }
    }

    /// Validates the form and posts it. Nothing is sent when validation
    /// fails.
    pub async fn book(
        &self,
        form: &BookingForm,
        selected_slot: Option<i64>,
    ) -> Result<BookingRequest, ClientError> {
        let request = form.to_request(selected_slot)?;
        debug!("Booking slot {} on {} with {}", request.slot_id, request.date, request.doctor);

        self.api.book(&request).await?;

        info!("Slot {} booked for {}", request.slot_id, request.name);
        Ok(request)
    }
}
