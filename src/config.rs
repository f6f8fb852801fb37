//! Bridge connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};

/// Where the bridge lives and how to authenticate against it.
///
/// The credential is the API username handed out by the bridge when the link
/// button is pressed. Both values are supplied by the caller; nothing is read
/// from the environment.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use hue_lights_rs::ClientConfig;
///
/// let config = ClientConfig::new("192.168.1.2", "s3cr3t").with_timeout(Duration::from_secs(5));
/// assert_eq!(config.lights_url(), "http://192.168.1.2/api/s3cr3t/lights");
/// assert_eq!(config.light_state_url("7"), "http://192.168.1.2/api/s3cr3t/lights/7/state");
/// ```
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub address: String,
    pub credential: String,
    /// Upper bound for a single request, in whole seconds when (de)serialized.
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(address: &str, credential: &str) -> Self {
        ClientConfig {
            address: address.to_string(),
            credential: credential.to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api/{}/", self.address, self.credential)
    }

    pub fn lights_url(&self) -> String {
        format!("{}lights", self.base_url())
    }

    pub fn light_state_url(&self, id: &str) -> String {
        format!("{}lights/{}/state", self.base_url(), id)
    }
}
