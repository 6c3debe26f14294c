//! Fetch API adapter for the fetcher port.
//!
//! Provides [`BrowserFetcher`] and the promise racing helper used for the
//! optional request timeout.

use fadeline_core::{FetchError, Fetcher};
use js_sys::{Array, Promise};
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timer; a resolved `undefined` means the timer won.
async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Timeout promise resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(js_error_message(&e)),
    }
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Fetcher
// =============================================================================

/// GET requests through `window.fetch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserFetcher {
    /// Abandon requests after this many milliseconds. `None` waits forever.
    pub timeout_ms: Option<u32>,
}

impl BrowserFetcher {
    pub fn new(timeout_ms: Option<u32>) -> Self {
        Self { timeout_ms }
    }

    async fn send(&self, url: &str) -> Result<Response, FetchError> {
        let window = web_sys::window().ok_or(FetchError::NoWindow)?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|_| FetchError::RequestCreationFailed(url.to_string()))?;
        let _ = request.headers().set("Accept", "application/json");

        let fetch_promise = window.fetch_with_request(&request);
        let result = match self.timeout_ms {
            Some(ms) => match race_with_timeout(fetch_promise, ms.min(i32::MAX as u32) as i32).await {
                RaceResult::Completed(value) => value,
                RaceResult::TimedOut => return Err(FetchError::Timeout),
                RaceResult::Error(msg) => return Err(FetchError::Network(msg)),
            },
            None => JsFuture::from(fetch_promise)
                .await
                .map_err(|e| FetchError::Network(js_error_message(&e)))?,
        };

        result
            .dyn_into::<Response>()
            .map_err(|_| FetchError::Decode("fetch did not return a Response".to_string()))
    }
}

impl Fetcher for BrowserFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let resp = self.send(url).await?;

        if !resp.ok() {
            return Err(FetchError::Status {
                status: resp.status(),
                url: url.to_string(),
            });
        }

        let text = JsFuture::from(resp.text().map_err(|e| FetchError::Decode(js_error_message(&e)))?)
            .await
            .map_err(|e| FetchError::Decode(js_error_message(&e)))?;
        let text = text
            .as_string()
            .ok_or_else(|| FetchError::Decode("response body is not text".to_string()))?;

        Ok(serde_json::from_str(&text)?)
    }
}
