//! In-memory transport for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{Request, Response, Transport};
use crate::errors::{Error, Result};

/// Records every request and answers from a script.
///
/// Once the script runs dry every request gets a plain success reply. Clones
/// share the same recording, so a test can keep one clone after handing the
/// other to a client.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockTransport {
    requests: Arc<Mutex<Vec<Request>>>,
    script: Arc<Mutex<VecDeque<std::result::Result<Response, String>>>>,
}

impl MockTransport {
    pub(crate) const SUCCESS: &'static str = r#"[{"success":{}}]"#;

    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(&self, response: Response) -> &Self {
        self.script.lock().unwrap().push_back(Ok(response));
        self
    }

    pub(crate) fn fail(&self, reason: &str) -> &Self {
        self.script.lock().unwrap().push_back(Err(reason.to_string()));
        self
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn bodies(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter_map(|r| r.body)
            .collect()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &Request) -> Result<Response> {
        self.requests.lock().unwrap().push(request.clone());
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(reason)) => Err(Error::transport(&request.to_string(), reason)),
            None => Ok(Response::ok(Self::SUCCESS)),
        }
    }
}
