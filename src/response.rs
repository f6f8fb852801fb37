//! Bridge response validation.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{Error, Result};
use crate::transport::Response;

/// An error object as reported by the bridge.
///
/// The bridge answers state changes with a list of `{"success": ...}` or
/// `{"error": ...}` entries, often with HTTP 200 even when the change failed.
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct BridgeError {
    #[serde(rename = "type")]
    pub kind: u16,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

impl From<BridgeError> for Error {
    fn from(err: BridgeError) -> Self {
        Error::Bridge {
            kind: err.kind,
            address: err.address,
            description: err.description,
        }
    }
}

/// Reject non-2xx answers and bodies carrying a bridge error object.
///
/// Bodies that are not a list of reply entries (the discovery map, plain
/// text) are accepted unchanged.
pub(crate) fn check(url: &str, response: &Response) -> Result<()> {
    debug!("HTTP {} from {}", response.status, url);

    if !response.is_success() {
        return Err(Error::status(url, response.status));
    }

    let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(&response.body) else {
        return Ok(());
    };

    let first_error = entries
        .iter()
        .filter_map(|entry| entry.get("error"))
        .find_map(|err| serde_json::from_value::<BridgeError>(err.clone()).ok());

    match first_error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
