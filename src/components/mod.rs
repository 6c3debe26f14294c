//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Header with navigation and theme toggle, footer
//! - [`pages`] - One component per route
//! - [`common`] - Small shared widgets (section headings, stars, notices)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod common;
pub mod icons;
pub mod layout;
pub mod pages;
pub mod router;

pub use router::AppRouter;
