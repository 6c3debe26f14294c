//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! adapters wiring `fadeline-core` to the browser.

use fadeline_core::{ApiClient, SiteConfig, Theme, ThemeStore};
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::site_config;
use crate::utils::{BrowserClock, BrowserFetcher, EmailJsRelay, LocalStorage, dom};

/// API client over the browser adapters.
pub type SiteApi = ApiClient<BrowserFetcher, LocalStorage, BrowserClock>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `expect_context::<AppContext>()`. `Copy`: every field is an arena
/// handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Parsed site settings.
    pub config: StoredValue<SiteConfig>,
    /// Current colour scheme, persisted on change.
    pub theme: RwSignal<Theme>,
}

impl AppContext {
    /// Context with the stored theme preference.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            theme: RwSignal::new(ThemeStore::new(LocalStorage).load()),
        }
    }

    /// A fresh API client. The adapters are stateless, so this is cheap and
    /// can be called inside any async block.
    pub fn api(&self) -> SiteApi {
        let api = self.config.with_value(|c| c.api.clone());
        let fetcher = BrowserFetcher::new(api.fetch_timeout_ms);
        ApiClient::new(api, fetcher, LocalStorage, BrowserClock)
    }

    /// Relay for booking and contact emails.
    pub fn relay(&self) -> EmailJsRelay {
        self.config.with_value(|c| EmailJsRelay::new(&c.email))
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Parses the embedded site settings and provides the AppContext
/// - Keeps the document theme and the stored preference in sync
/// - Renders the router, or the error page if settings are invalid
#[component]
pub fn App() -> impl IntoView {
    let content = match site_config() {
        Ok(config) => {
            let ctx = AppContext::new(config);
            provide_context(ctx);

            Effect::new(move |_| {
                let theme = ctx.theme.get();
                dom::apply_theme(theme);
                ThemeStore::new(LocalStorage).save(theme);
            });

            Ok(view! { <AppRouter /> })
        }
        Err(err) => {
            tracing::error!(error = %err, "invalid site configuration");
            Err(err)
        }
    };

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #000;
                    color: #e0e0e0;
                    font-family: 'Playfair Display', serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #d4af37; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="
                            text-align: left;
                            color: #ff6b6b;
                            font-size: 0.9rem;
                            margin-bottom: 2rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #d4af37;
                                color: #000;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {content}
        </ErrorBoundary>
    }
}
