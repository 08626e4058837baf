use tracing::debug;

use shared_api::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::ClientError;

use crate::models::SlotBoard;

pub struct SlotService {
    api: ClinicApiClient,
}

impl SlotService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(ClinicApiClient::new(config))
    }

    pub fn with_client(api: ClinicApiClient) -> Self {
        Self { api }
    }

    /// Fetches the slots for `date` exactly as the server orders them.
    pub async fn load_board(&self, date: &str) -> Result<SlotBoard, ClientError> {
        debug!("Loading slots for {}", date);

        let slots = self.api.get_slots(date).await?;
        let board = SlotBoard::from_slots(slots);

        debug!("{} slots for {} ({} available)", board.len(), date, board.available_count());
        Ok(board)
    }
}
