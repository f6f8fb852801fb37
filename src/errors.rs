/// All error types that can occur when talking to a Hue bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Building or executing an HTTP request failed.
    #[error("transport {action} error: {reason}")]
    Transport { action: String, reason: String },

    /// Failed to serialize a state payload.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize a bridge response.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// The bridge answered with a non-success HTTP status.
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// The bridge answered with an error object in the response body.
    #[error("bridge error {kind} at {address}: {description}")]
    Bridge {
        kind: u16,
        address: String,
        description: String,
    },

    /// No light with the given id is known to the client.
    #[error("light {0} not found")]
    LightNotFound(String),

    /// Failed to parse a [`crate::Rgb`] from a string.
    #[error("invalid color string: {0}")]
    InvalidColorString(String),
}

impl Error {
    /// Create a new transport error
    pub fn transport(action: &str, reason: impl std::fmt::Display) -> Self {
        Error::Transport {
            action: action.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a new status error
    pub fn status(url: &str, status: u16) -> Self {
        Error::Status {
            url: url.to_string(),
            status,
        }
    }

    /// Returns true for failures of the HTTP round trip itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
