//! Browser adapters for the `fadeline-core` ports, plus DOM helpers.
//!
//! Provides:
//! - [`LocalStorage`] / [`BrowserClock`] - storage and clock ports
//! - [`BrowserFetcher`] - Fetch API with optional timeout racing
//! - [`EmailJsRelay`] - EmailJS REST relay
//! - [`log`] - `tracing` to devtools console

pub mod dom;
mod fetch;
pub mod log;
mod relay;
mod storage;

pub use fetch::BrowserFetcher;
pub use relay::EmailJsRelay;
pub use storage::{BrowserClock, LocalStorage};
