//! Test doubles for the fetcher and relay ports.
//!
//! Available to unit tests and, through the `mock` feature, to integration
//! tests and downstream crates.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use crate::error::{FetchError, RelayError};
use crate::fetch::Fetcher;
use crate::relay::{EmailRelay, TemplateParams};

/// Fetcher answering from a URL → response table.
///
/// Unknown URLs fail with [`FetchError::Network`]. Every call is counted,
/// answered or not.
#[derive(Debug, Default)]
pub struct StubFetcher {
    responses: RefCell<HashMap<String, Result<Value, FetchError>>>,
    calls: RefCell<HashMap<String, usize>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `body` from now on.
    pub fn respond(&self, url: &str, body: Value) {
        self.responses.borrow_mut().insert(url.to_string(), Ok(body));
    }

    /// Fail `url` with `err` from now on.
    pub fn fail(&self, url: &str, err: FetchError) {
        self.responses.borrow_mut().insert(url.to_string(), Err(err));
    }

    /// Number of requests made for `url`.
    pub fn calls(&self, url: &str) -> usize {
        self.calls.borrow().get(url).copied().unwrap_or(0)
    }

    /// Number of requests made overall.
    pub fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }
}

impl Fetcher for StubFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        *self.calls.borrow_mut().entry(url.to_string()).or_default() += 1;
        self.responses
            .borrow()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Network(format!("no stub for {url}"))))
    }
}

/// Relay that records successful sends and fails chosen templates.
#[derive(Debug, Default)]
pub struct RecordingRelay {
    sent: RefCell<Vec<(String, TemplateParams)>>,
    failures: RefCell<HashMap<String, RelayError>>,
}

impl RecordingRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send with `template_id` fail with `err`.
    pub fn fail_template(&self, template_id: &str, err: RelayError) {
        self.failures
            .borrow_mut()
            .insert(template_id.to_string(), err);
    }

    /// Successful sends as `(template_id, params)`, oldest first.
    pub fn sent(&self) -> Vec<(String, TemplateParams)> {
        self.sent.borrow().clone()
    }
}

impl EmailRelay for RecordingRelay {
    async fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), RelayError> {
        if let Some(err) = self.failures.borrow().get(template_id) {
            return Err(err.clone());
        }
        self.sent
            .borrow_mut()
            .push((template_id.to_string(), params.clone()));
        Ok(())
    }
}
