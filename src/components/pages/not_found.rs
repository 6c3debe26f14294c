use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class=css::section>
            <div class=css::not_found>
                <h1 class=css::hero_title>"404"</h1>
                <p class=css::muted>"This page doesn't exist."</p>
                <a href=AppRoute::Home.to_hash() class=css::button>
                    <Icon icon=ic::CHEVRON_LEFT /> "Back home"
                </a>
            </div>
        </section>
    }
}
