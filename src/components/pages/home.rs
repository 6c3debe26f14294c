//! Landing page: hero, category tiles, team and testimonials.

use fadeline_core::HomeData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::common::{Loading, SectionHeading, Stars};
use crate::components::icons as ic;
use crate::config::{HERO_BACKGROUNDS, SHOP_NAME, SHOP_SUBTITLE};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let home = LocalResource::new(move || async move { ctx.api().load_home(false).await });

    let hero_style = move || {
        let (dark, light) = HERO_BACKGROUNDS;
        let image = if ctx.theme.get().is_dark() { dark } else { light };
        format!("background-image: url('{image}')")
    };

    view! {
        <section class=css::hero style=hero_style>
            <div class=css::hero_overlay>
                <h1 class=css::hero_title>{SHOP_NAME}</h1>
                <p class=css::hero_subtitle>{SHOP_SUBTITLE}</p>
                <a href=AppRoute::Booking.to_hash() class=css::button>
                    "Book Appointment" <Icon icon=ic::ARROW_RIGHT />
                </a>
            </div>
        </section>

        <Suspense fallback=|| view! { <Loading label="Loading..." /> }>
            {move || home.get().map(|data| view! { <HomeSections data=data /> })}
        </Suspense>
    }
}

#[component]
fn HomeSections(data: HomeData) -> impl IntoView {
    let HomeData {
        services,
        barbers,
        testimonials,
    } = data;

    view! {
        <section class=css::section>
            <SectionHeading title="Our Services" subtitle="Premium grooming and beauty, tailored to you" />
            <div class=css::card_grid>
                {services
                    .into_iter()
                    .map(|s| view! {
                        <a href=AppRoute::Services.to_hash() class=css::card>
                            <img class=css::card_image src=s.img alt=s.name.clone() loading="lazy" />
                            <div class=css::card_body>
                                <h3>{s.name}</h3>
                                <p>{s.desc}</p>
                            </div>
                        </a>
                    })
                    .collect_view()}
            </div>
        </section>

        {(!barbers.is_empty()).then(|| view! {
            <section class=css::section_alt>
                <SectionHeading title="Meet the Team" />
                <div class=css::card_grid>
                    {barbers
                        .into_iter()
                        .map(|b| view! {
                            <div class=css::card>
                                <img class=css::card_image src=b.img alt=b.name.clone() loading="lazy" />
                                <div class=css::card_body>
                                    <h3>{b.name}</h3>
                                    <p class=css::accent>{b.specialty}</p>
                                    <p class=css::muted>{format!("Experience: {}", b.exp)}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        })}

        <section class=css::section>
            <SectionHeading title="What Our Clients Say" />
            <div class=css::card_grid>
                {testimonials
                    .into_iter()
                    .map(|t| view! {
                        <blockquote class=css::testimonial>
                            <Stars rating=t.rating />
                            <p>{format!("\u{201c}{}\u{201d}", t.text)}</p>
                            <footer class=css::testimonial_author>
                                {(!t.img.is_empty()).then(|| view! {
                                    <img class=css::avatar src=t.img.clone() alt=t.name.clone() />
                                })}
                                <span>{t.name}</span>
                            </footer>
                        </blockquote>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
