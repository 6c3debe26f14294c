//! Services menu grouped by category.

use fadeline_core::format_duration_long;
use fadeline_core::models::ServiceCard;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::common::{Loading, Notice, NoticeKind, SectionHeading};
use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn ServicesPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let groups = LocalResource::new(move || async move { ctx.api().load_service_groups(false).await });

    view! {
        <section class=css::section>
            <SectionHeading title="Our Services" subtitle="Explore the full menu of cuts, shaves and styling" />
            <Suspense fallback=|| view! { <Loading label="Loading services..." /> }>
                {move || groups.get().map(|loaded| {
                    if loaded.items.is_empty() {
                        let message = if loaded.is_degraded() {
                            "Services are unavailable right now. Please try again later."
                        } else {
                            "No services are listed yet."
                        };
                        return view! { <Notice kind=NoticeKind::Info message=message /> }.into_any();
                    }
                    loaded
                        .items
                        .into_iter()
                        .map(|group| view! {
                            <div class=css::group>
                                <h3 class=css::group_title>{group.name}</h3>
                                <div class=css::card_grid>
                                    {group.services.into_iter().map(|s| view! { <ServiceTile service=s /> }).collect_view()}
                                </div>
                            </div>
                        })
                        .collect_view()
                        .into_any()
                })}
            </Suspense>
        </section>
    }
}

#[component]
fn ServiceTile(service: ServiceCard) -> impl IntoView {
    let slug = service.slug.clone().unwrap_or_else(|| service.id.to_string());
    let href = AppRoute::ServiceDetail { slug }.to_hash();
    let duration = format_duration_long(&service.duration);
    let blurb = if service.tagline.is_empty() {
        service.description
    } else {
        service.tagline
    };

    view! {
        <a href=href class=css::card>
            {(!service.image.is_empty()).then(|| view! {
                <img class=css::card_image src=service.image.clone() alt=service.name.clone() loading="lazy" />
            })}
            <div class=css::card_body>
                <h3>{service.name}</h3>
                <p class=css::muted>{blurb}</p>
                <div class=css::meta>
                    {(!service.price.is_empty()).then(|| view! { <span class=css::accent>{service.price.clone()}</span> })}
                    {(!duration.is_empty()).then(|| view! {
                        <span class=css::meta_item><Icon icon=ic::CLOCK />{duration.clone()}</span>
                    })}
                </div>
            </div>
        </a>
    }
}
