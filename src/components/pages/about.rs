use fadeline_core::mapper::map_artists_to_barbers;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::common::{Loading, SectionHeading};
use crate::config::{ABOUT_INTRO, ABOUT_STATS, ABOUT_STORY, ABOUT_VALUES};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn AboutPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let team = LocalResource::new(move || async move {
        let api = ctx.api();
        let artists = api.fetch_artists(false).await;
        map_artists_to_barbers(&artists, api.now_millis())
    });

    view! {
        <section class=css::section>
            <SectionHeading title="About Us" subtitle=ABOUT_INTRO />
            <div class=css::prose>
                {ABOUT_STORY.map(|p| view! { <p>{p}</p> }).collect_view()}
            </div>
        </section>

        <section class=css::section_alt>
            <SectionHeading title="Our Values" />
            <div class=css::card_grid>
                {ABOUT_VALUES
                    .map(|(title, desc)| view! {
                        <div class=css::card_body>
                            <h3 class=css::accent>{title}</h3>
                            <p>{desc}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class=css::section>
            <div class=css::stats>
                {ABOUT_STATS
                    .map(|(label, desc)| view! {
                        <div class=css::stat>
                            <strong>{label}</strong>
                            <span class=css::muted>{desc}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class=css::section_alt>
            <SectionHeading title="Meet the Team" />
            <Suspense fallback=|| view! { <Loading label="Loading team..." /> }>
                {move || team.get().map(|barbers| {
                    if barbers.is_empty() {
                        return view! { <p class=css::muted>"Our team will be introduced soon."</p> }
                            .into_any();
                    }
                    view! {
                        <div class=css::card_grid>
                            {barbers
                                .into_iter()
                                .map(|b| view! {
                                    <div class=css::card>
                                        <img class=css::card_image src=b.img alt=b.name.clone() loading="lazy" />
                                        <div class=css::card_body>
                                            <h3>{b.name}</h3>
                                            <p class=css::accent>{b.specialty}</p>
                                            <p class=css::muted>{b.exp}</p>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                })}
            </Suspense>
        </section>
    }
}
