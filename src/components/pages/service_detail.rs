//! Single service page with reviews and related services.

use chrono::NaiveDate;
use fadeline_core::format_duration_long;
use fadeline_core::models::{RelatedService, ServiceDetail};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::common::{Loading, Notice, NoticeKind, SectionHeading, Stars};
use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Detail plus the related strip, loaded together.
type DetailData = Option<(ServiceDetail, Vec<RelatedService>)>;

#[component]
pub fn ServiceDetailPage(slug: String) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let slug = StoredValue::new(slug);
    let detail = LocalResource::new(move || async move {
        let api = ctx.api();
        let slug = slug.get_value();
        let detail = api.service_detail(&slug).await?;
        let related = api
            .related_services(detail.category.as_ref(), &detail.id.to_string())
            .await;
        Some((detail, related))
    });

    view! {
        <Suspense fallback=|| view! { <Loading label="Loading service..." /> }>
            {move || detail.get().map(|data: DetailData| match data {
                Some((detail, related)) => view! { <DetailView detail=detail related=related /> }.into_any(),
                None => view! {
                    <section class=css::section>
                        <Notice kind=NoticeKind::Error message="Service not found." />
                        <button class=css::button_outline on:click=|_| AppRoute::Services.push()>
                            <Icon icon=ic::CHEVRON_LEFT /> "Back to services"
                        </button>
                    </section>
                }
                .into_any(),
            })}
        </Suspense>
    }
}

#[component]
fn DetailView(detail: ServiceDetail, related: Vec<RelatedService>) -> impl IntoView {
    let ServiceDetail {
        name,
        hero_image,
        gallery,
        tagline,
        short_description,
        long_description,
        price,
        duration,
        difficulty,
        category,
        add_ons,
        reviews,
        detailed_description,
        ..
    } = detail;
    let duration = format_duration_long(&duration);
    let summary = if long_description.is_empty() {
        short_description
    } else {
        long_description
    };

    view! {
        <section class=css::detail_hero style=format!("background-image: url('{hero_image}')")>
            <div class=css::hero_overlay>
                <a href=AppRoute::Services.to_hash() class=css::back_link>
                    <Icon icon=ic::CHEVRON_LEFT /> "All services"
                </a>
                {category.map(|c| view! { <span class=css::badge>{c.name}</span> })}
                <h1 class=css::hero_title>{name}</h1>
                <p class=css::hero_subtitle>{tagline}</p>
                <div class=css::meta>
                    {(!price.is_empty()).then(|| view! { <span class=css::accent>{price.clone()}</span> })}
                    {(!duration.is_empty()).then(|| view! {
                        <span class=css::meta_item><Icon icon=ic::CLOCK />{duration.clone()}</span>
                    })}
                    <span class=css::meta_item>{difficulty}</span>
                </div>
                <a href=AppRoute::Booking.to_hash() class=css::button>
                    <Icon icon=ic::CALENDAR /> "Book this service"
                </a>
            </div>
        </section>

        <section class=css::section>
            <div class=css::prose>
                <p>{summary}</p>
                <p>{detailed_description.overview}</p>
            </div>
            <div class=css::card_grid>
                <CheckList title="What's included" items=detailed_description.includes />
                <CheckList title="The experience" items=detailed_description.experience />
                <CheckList title="Benefits" items=detailed_description.benefits />
            </div>
            <div class=css::prose>
                <h3>"What to expect"</h3>
                <p>{detailed_description.expectations}</p>
            </div>
        </section>

        {(!gallery.is_empty()).then(|| view! {
            <section class=css::section_alt>
                <SectionHeading title="Gallery" />
                <div class=css::masonry>
                    {gallery
                        .into_iter()
                        .map(|src| view! { <img class=css::masonry_image src=src loading="lazy" alt="" /> })
                        .collect_view()}
                </div>
            </section>
        })}

        {(!add_ons.is_empty()).then(|| view! {
            <section class=css::section>
                <SectionHeading title="Add-ons" />
                <ul class=css::add_ons>
                    {add_ons
                        .into_iter()
                        .map(|a| view! {
                            <li>
                                <span>{a.name}</span>
                                {a.price.map(|p| view! { <span class=css::accent>{p}</span> })}
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>
        })}

        <section class=css::section_alt>
            <SectionHeading title="Reviews" />
            {if reviews.is_empty() {
                view! { <p class=css::muted>"No reviews yet."</p> }.into_any()
            } else {
                view! {
                    <div class=css::card_grid>
                        {reviews
                            .into_iter()
                            .map(|r| view! {
                                <blockquote class=css::testimonial>
                                    <Stars rating=r.rating />
                                    <p>{r.comment}</p>
                                    <footer class=css::testimonial_author>
                                        {(!r.avatar.is_empty()).then(|| view! {
                                            <img class=css::avatar src=r.avatar.clone() alt=r.name.clone() />
                                        })}
                                        <span>{r.name}</span>
                                        {r.date.as_deref().map(review_date).map(|d| view! { <span class=css::muted>{d}</span> })}
                                    </footer>
                                </blockquote>
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>

        {(!related.is_empty()).then(|| view! {
            <section class=css::section>
                <SectionHeading title="You may also like" />
                <div class=css::card_grid>
                    {related
                        .into_iter()
                        .map(|r| {
                            let slug = r.slug.clone().unwrap_or_else(|| r.id.to_string());
                            let href = AppRoute::ServiceDetail { slug }.to_hash();
                            view! {
                                <a href=href class=css::card>
                                    {(!r.image.is_empty()).then(|| view! {
                                        <img class=css::card_image src=r.image.clone() alt=r.name.clone() loading="lazy" />
                                    })}
                                    <div class=css::card_body>
                                        <h3>{r.name}</h3>
                                        <span class=css::accent>{r.price}</span>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        })}
    }
}

#[component]
fn CheckList(title: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div class=css::card_body>
            <h3 class=css::accent>{title}</h3>
            <ul class=css::check_list>
                {items
                    .into_iter()
                    .map(|item| view! { <li><Icon icon=ic::CHECK />{item}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// "March 4, 2024" from an ISO date or timestamp; other text is shown as-is.
fn review_date(raw: &str) -> String {
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
