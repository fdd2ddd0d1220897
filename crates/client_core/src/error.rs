use thiserror::Error;

/// Failure below the domain layer: the backend never produced a usable
/// classification body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Non-2xx status. The body is not inspected.
    #[error("Backend request failed")]
    Status(u16),
    #[error("Backend unreachable: {0}")]
    Network(String),
    #[error("Backend returned a malformed response: {0}")]
    MalformedResponse(String),
    #[error("Backend worker unavailable: {0}")]
    WorkerUnavailable(String),
}

impl TransportError {
    /// Message to surface to the user, or `None` when the failure carries no
    /// usable detail.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Network(detail)
            | Self::MalformedResponse(detail)
            | Self::WorkerUnavailable(detail)
                if detail.trim().is_empty() =>
            {
                None
            }
            _ => Some(self.to_string()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Status(_) => "status",
            Self::Network(_) => "network",
            Self::MalformedResponse(_) => "malformed_response",
            Self::WorkerUnavailable(_) => "worker_unavailable",
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
