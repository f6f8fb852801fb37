//! Blocking reqwest implementation.

use std::time::Duration;

use reqwest::blocking::Client as ReqwestClient;
use reqwest::header::CONTENT_TYPE;

use super::{Method, Request, Response, Transport};
use crate::errors::{Error, Result};

/// reqwest-based blocking HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransport(ReqwestClient);

impl HttpTransport {
    /// Build a transport, optionally bounding each request by `timeout`.
    ///
    /// Without a timeout reqwest's own default applies.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map(HttpTransport)
            .map_err(|e| Error::transport("build client", e))
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &Request) -> Result<Response> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
        };

        let mut builder = self.0.request(method, &request.url);
        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let action = request.to_string();
        let response = builder
            .send()
            .map_err(|e| Error::transport(&action, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| Error::transport("read body", e))?;

        Ok(Response { status, body })
    }
}
