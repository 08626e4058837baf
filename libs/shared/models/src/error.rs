use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Session storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// Text suitable for an inline status element. Server rejections surface
    /// their message verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// True when the request never produced a usable response.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::Decode(_))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_rejected_user_message_is_verbatim() {
        let err = ClientError::Rejected {
            status: 409,
            message: "Slot already booked".to_string(),
        };
        assert_eq!(err.user_message(), "Slot already booked");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let err: ClientError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert_matches!(err, ClientError::Decode(_));
        assert!(err.is_transport());
    }
}
