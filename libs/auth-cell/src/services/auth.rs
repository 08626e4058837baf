use tracing::{debug, info};

use shared_api::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::auth::{LoginRequest, RegisterRequest};
use shared_models::ClientError;

use crate::models::{AuthForm, AuthMode, AuthOutcome, Session};

pub const MISSING_CREDENTIALS: &str = "Username and Password are required";

pub struct AuthService {
    api: ClinicApiClient,
}

impl AuthService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(ClinicApiClient::new(config))
    }

    pub fn with_client(api: ClinicApiClient) -> Self {
        Self { api }
    }

    /// Submits the auth form to the endpoint selected by `mode`. Email and
    /// phone are only sent when registering.
    pub async fn submit(
        &self,
        mode: AuthMode,
        form: &AuthForm,
    ) -> Result<AuthOutcome, ClientError> {
        if form.username.is_empty() || form.password.is_empty() {
            return Err(ClientError::Validation(MISSING_CREDENTIALS.to_string()));
        }

        debug!("Submitting {} for {}", mode.endpoint(), form.username);

        match mode {
            AuthMode::Login => {
                let response = self.api.login(&LoginRequest {
                    username: form.username.clone(),
                    password: form.password.clone(),
                }).await?;

                info!("Login accepted for {}", response.username);
                Ok(AuthOutcome::LoggedIn(Session { username: response.username }))
            }
            AuthMode::Register => {
                self.api.register(&RegisterRequest {
                    username: form.username.clone(),
                    password: form.password.clone(),
                    email: form.email.clone(),
                    phone: form.phone.clone(),
                }).await?;

                info!("Registration accepted for {}", form.username);
                Ok(AuthOutcome::Registered)
            }
        }
    }
}
