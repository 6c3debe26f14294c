use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{
    ADDRESS_LINES, CONTACT_EMAIL, FACEBOOK_HREF, INSTAGRAM_HREF, PHONE_DISPLAY, PHONE_HREF,
    SHOP_NAME, SHOP_TAGLINE,
};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class=css::footer>
            <div class=css::footer_grid>
                <div>
                    <h3 class=css::footer_title>{SHOP_NAME}</h3>
                    <p class=css::footer_text>{SHOP_TAGLINE}</p>
                    <div class=css::socials>
                        <a href=INSTAGRAM_HREF target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                            <Icon icon=ic::INSTAGRAM />
                        </a>
                        <a href=FACEBOOK_HREF target="_blank" rel="noopener noreferrer" aria-label="Facebook">
                            <Icon icon=ic::FACEBOOK />
                        </a>
                    </div>
                </div>

                <div>
                    <h4 class=css::footer_heading>"Explore"</h4>
                    <ul class=css::footer_links>
                        {AppRoute::nav_items()
                            .into_iter()
                            .map(|(label, route)| view! {
                                <li><a href=route.to_hash()>{label}</a></li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class=css::footer_heading>"Visit"</h4>
                    <p class=css::footer_text>
                        <Icon icon=ic::LOCATION />
                        {ADDRESS_LINES[0]}<br />{ADDRESS_LINES[1]}
                    </p>
                    <p class=css::footer_text>
                        <Icon icon=ic::PHONE />
                        <a href=PHONE_HREF>{PHONE_DISPLAY}</a>
                    </p>
                    <p class=css::footer_text>
                        <Icon icon=ic::MAIL />
                        <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    </p>
                </div>
            </div>

            <p class=css::copyright>
                {format!("© {year} {SHOP_NAME}. All rights reserved.")}
            </p>
        </footer>
    }
}
