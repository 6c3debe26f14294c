//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native hashchange
//! events instead of leptos_router for plain hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the page is derived from `#/path`
//! - **Header and footer never re-render on navigation**
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::layout::{Footer, Header};
use crate::components::pages::{
    AboutPage, BookingPage, ContactPage, GalleryPage, HomePage, NotFoundPage, ServiceDetailPage,
    ServicesPage,
};
use crate::models::AppRoute;
use crate::utils::dom::scroll_to_top;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Route of the current page, provided to every component.
#[derive(Clone, Copy)]
pub struct RouteContext(pub Memo<AppRoute>);

/// Main application router.
///
/// - `#/` → Home
/// - `#/about`, `#/services`, `#/gallery`, `#/booking`, `#/contact`
/// - `#/services/{slug}` → Service detail
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());
    provide_context(RouteContext(route_memo));

    // New page starts at the top
    Effect::new(move |prev: Option<AppRoute>| {
        let current = route_memo.get();
        if prev.is_some_and(|p| p != current) {
            scroll_to_top();
        }
        current
    });

    view! {
        <div class=css::app>
            <Header />
            <main class=css::main>
                {move || match route_memo.get() {
                    AppRoute::Home => view! { <HomePage /> }.into_any(),
                    AppRoute::About => view! { <AboutPage /> }.into_any(),
                    AppRoute::Services => view! { <ServicesPage /> }.into_any(),
                    AppRoute::ServiceDetail { slug } => {
                        view! { <ServiceDetailPage slug=slug /> }.into_any()
                    }
                    AppRoute::Gallery => view! { <GalleryPage /> }.into_any(),
                    AppRoute::Booking => view! { <BookingPage /> }.into_any(),
                    AppRoute::Contact => view! { <ContactPage /> }.into_any(),
                    AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
