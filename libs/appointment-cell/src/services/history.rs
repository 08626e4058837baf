use tracing::debug;

use shared_api::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::ClientError;

use crate::models::HistoryList;

pub struct HistoryService {
    api: ClinicApiClient,
}

impl HistoryService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(ClinicApiClient::new(config))
    }

    pub fn with_client(api: ClinicApiClient) -> Self {
        Self { api }
    }

    pub async fn load(&self, username: &str) -> Result<HistoryList, ClientError> {
        debug!("Fetching bookings for {}", username);

        let records = self.api.my_bookings(username).await?;
        Ok(HistoryList::from_records(records))
    }
}
