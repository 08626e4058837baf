use serde::{Deserialize, Serialize};

/// The logged-in identity. Only a display/gating flag; the server must not
/// treat it as a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            AuthMode::Login => "/login",
            AuthMode::Register => "/register",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    pub fn toggle_text(self) -> &'static str {
        match self {
            AuthMode::Login => "Need an account? Register",
            AuthMode::Register => "Have an account? Login",
        }
    }

    pub fn username_placeholder(self) -> &'static str {
        match self {
            AuthMode::Login => "Username or Email",
            AuthMode::Register => "Username",
        }
    }

    /// Email and phone are collected only while registering.
    pub fn shows_register_fields(self) -> bool {
        self == AuthMode::Register
    }
}

/// Values of the auth modal's inputs at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub username: String,
    pub password: String,
    pub email: String,
    pub phone: String,
}

impl AuthForm {
    pub fn login(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            ..Self::default()
        }
    }

    pub fn register(username: &str, password: &str, email: &str, phone: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Registered,
    LoggedIn(Session),
}
