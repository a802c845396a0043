//! Mock HTTP Source
//!
//! Serves canned bodies by URL and records every request it receives.

use super::{FetchError, HttpSource};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// In-memory source for pipeline and cache tests
#[derive(Default)]
pub struct MockSource {
    /// Bodies served with a success status
    pub bodies: HashMap<String, Vec<u8>>,
    /// URLs answered with an explicit error status
    pub statuses: HashMap<String, u16>,
    /// URLs whose request fails before any response arrives
    pub unreachable: HashSet<String>,
    requests: RefCell<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: Vec<u8>) -> Self {
        self.bodies.insert(url.to_string(), body);
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.statuses.insert(url.to_string(), status);
        self
    }

    pub fn with_transport_error(mut self, url: &str) -> Self {
        self.unreachable.insert(url.to_string());
        self
    }

    /// Every URL requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Number of requests made for `url`
    pub fn request_count(&self, url: &str) -> usize {
        self.requests.borrow().iter().filter(|u| *u == url).count()
    }
}

impl HttpSource for MockSource {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.requests.borrow_mut().push(url.to_string());

        if self.unreachable.contains(url) {
            return Err(FetchError::Transport {
                url: url.to_string(),
                message: "connection refused".to_string(),
            });
        }

        if let Some(body) = self.bodies.get(url) {
            return Ok(body.clone());
        }

        // Unknown URLs behave like a missing file on the mirror
        let status = self.statuses.get(url).copied().unwrap_or(404);
        Err(FetchError::Status {
            url: url.to_string(),
            status,
        })
    }
}
