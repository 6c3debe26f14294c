//! Site header: brand, navigation, theme toggle and mobile menu.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router::RouteContext;
use crate::config::SHOP_NAME;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let RouteContext(route) = expect_context::<RouteContext>();
    let menu_open = RwSignal::new(false);

    // Close the mobile menu whenever the page changes
    Effect::new(move |_| {
        route.track();
        menu_open.set(false);
    });

    let nav_links = move || {
        AppRoute::nav_items()
            .into_iter()
            .map(|(label, target)| {
                let href = target.to_hash();
                let class = move || {
                    if target.is_section_of(&route.get()) {
                        format!("{} {}", css::nav_link, css::nav_active)
                    } else {
                        css::nav_link.to_string()
                    }
                };
                view! {
                    <a href=href class=class>
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=css::header>
            <a href="#/" class=css::brand>
                <span class=css::brand_icon><Icon icon=ic::SCISSORS /></span>
                {SHOP_NAME}
            </a>

            <nav class=css::nav>{nav_links}</nav>

            <div class=css::header_actions>
                <button
                    class=css::icon_button
                    title=move || if ctx.theme.get().is_dark() { "Switch to light" } else { "Switch to dark" }
                    on:click=move |_| ctx.toggle_theme()
                >
                    {move || if ctx.theme.get().is_dark() {
                        view! { <Icon icon=ic::SUN /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MOON /> }.into_any()
                    }}
                </button>
                <a href=AppRoute::Booking.to_hash() class=css::cta>"Book Now"</a>
                <button
                    class=css::menu_button
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class=css::mobile_nav>{nav_links}</nav>
            </Show>
        </header>
    }
}
