use derive_more::{Display, Error};
use reqwest::StatusCode;

#[derive(Debug, Display, Error)]
pub(crate) enum ClientError {
    #[display("not logged in")]
    MissingSession,
    #[display("session is invalid or expired")]
    Unauthorized,
    #[display("access restricted to staff")]
    Forbidden,
    #[display("Incorrect username or password.")]
    InvalidCredentials,
    #[display("Username already exists.")]
    UsernameTaken,
    #[display("Your cart is empty!")]
    EmptyCart,
    #[display("{message}")]
    Rejected { status: u16, message: String },
    #[display("could not connect to the server, {reason}")]
    Transport { reason: String },
    #[display("unexpected response body, {reason}")]
    Decode { reason: String },
    #[display("local state storage failed, {reason}")]
    Storage { reason: String },
}

impl ClientError {
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Rejected {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// Replace the message of a rejected call, leaving every other error as is.
    pub fn reword(self, message: &str) -> Self {
        match self {
            Self::Rejected { status, .. } => Self::Rejected {
                status,
                message: message.to_string(),
            },
            other => other,
        }
    }

    /// Whether the persisted session must be dropped after this error.
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        Self::Storage {
            reason: e.to_string(),
        }
    }
}
