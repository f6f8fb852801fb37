//! HTTP transport abstraction.
//!
//! The library never talks to the network directly; every bridge round trip
//! goes through a [`Transport`]. With the `transport-reqwest` feature (on by
//! default) [`HttpTransport`] provides a blocking implementation backed by
//! reqwest. Disable the feature to plug in your own client:
//!
//! ```toml
//! [dependencies]
//! hue-lights-rs = { version = "0.1", default-features = false }
//! ```

use std::fmt;

use crate::errors::Result;

#[cfg(feature = "transport-reqwest")]
mod reqwest_impl;

#[cfg(feature = "transport-reqwest")]
pub use reqwest_impl::HttpTransport;

#[cfg(test)]
pub(crate) mod mock;

/// HTTP methods used by the bridge API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Put,
}

/// A single request to the bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl Request {
    pub fn get(url: &str) -> Self {
        Request {
            method: Method::Get,
            url: url.to_string(),
            body: None,
        }
    }

    pub fn put(url: &str, body: String) -> Self {
        Request {
            method: Method::Put,
            url: url.to_string(),
            body: Some(body),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// The raw answer of the bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn ok(body: &str) -> Self {
        Response {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for synchronous request/response exchanges with the bridge.
///
/// Implementations must report failures of the round trip itself (bad
/// address, refused connection, timeout) as [`crate::Error::Transport`]. The
/// status code and body are returned as-is; interpreting them is up to the
/// caller.
pub trait Transport: Send + Sync {
    /// Execute the request and block until the bridge answers.
    fn send(&self, request: &Request) -> Result<Response>;
}
