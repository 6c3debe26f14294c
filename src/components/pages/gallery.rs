//! Portfolio gallery with category filters and a lightbox.

use fadeline_core::gallery::{self, CategoryFilter, Step};
use fadeline_core::models::{GalleryImage, ItemId};
use fadeline_core::normalize::gallery_image;
use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::common::{Loading, Notice, NoticeKind, SectionHeading};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn GalleryPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let images = LocalResource::new(move || async move {
        ctx.api()
            .load_gallery(false)
            .await
            .map(|item| gallery_image(&item))
    });

    view! {
        <section class=css::section>
            <SectionHeading title="Gallery" subtitle="A look at recent work from our chairs" />
            <Suspense fallback=|| view! { <Loading label="Loading gallery..." /> }>
                {move || images.get().map(|loaded| {
                    if loaded.items.is_empty() {
                        let (kind, message) = if loaded.is_degraded() {
                            (NoticeKind::Error, "Failed to load gallery. Please try again later.")
                        } else {
                            (NoticeKind::Info, "No images yet. Check back soon.")
                        };
                        return view! { <Notice kind=kind message=message /> }.into_any();
                    }
                    view! { <GalleryView images=loaded.items /> }.into_any()
                })}
            </Suspense>
        </section>
    }
}

#[component]
fn GalleryView(images: Vec<GalleryImage>) -> impl IntoView {
    let categories = gallery::categories(&images);
    let images = StoredValue::new(images);
    let filter = RwSignal::new(CategoryFilter::default());
    let open = RwSignal::new(None::<ItemId>);

    let visible = Memo::new(move |_| filter.with(|f| images.with_value(|all| f.apply(all))));

    let move_by = move |direction: Step| {
        let Some(current) = open.get_untracked() else {
            return;
        };
        let next = visible.with_untracked(|list| {
            gallery::step(list, &current, direction).map(|img| img.id.clone())
        });
        open.set(next);
    };

    let keys = window_event_listener(ev::keydown, move |e| {
        if open.get_untracked().is_none() {
            return;
        }
        match e.key().as_str() {
            "Escape" => open.set(None),
            "ArrowRight" => move_by(Step::Next),
            "ArrowLeft" => move_by(Step::Prev),
            _ => {}
        }
    });
    on_cleanup(move || keys.remove());

    let chips = categories
        .into_iter()
        .map(|name| {
            let label = name.clone();
            let class = {
                let name = name.clone();
                move || {
                    if filter.with(|f| f.is_active(&name)) {
                        format!("{} {}", css::chip, css::chip_active)
                    } else {
                        css::chip.to_string()
                    }
                }
            };
            view! {
                <button class=class on:click=move |_| filter.update(|f| f.toggle(&name))>
                    {label}
                </button>
            }
        })
        .collect_view();

    let grid = move || {
        let list = visible.get();
        if filter.with(|f| f.is_all()) {
            gallery::group_by_category(&list)
                .into_iter()
                .map(|(category, items)| view! {
                    <div class=css::group>
                        <h3 class=css::group_title>{category}</h3>
                        <Tiles images=items open=open />
                    </div>
                })
                .collect_view()
                .into_any()
        } else {
            view! { <Tiles images=list open=open /> }.into_any()
        }
    };

    let lightbox = move || {
        let id = open.get()?;
        let image = visible.with(|list| list.iter().find(|img| img.id == id).cloned())?;
        Some(view! {
            <div class=css::lightbox on:click=move |_| open.set(None)>
                <button class=css::lightbox_close aria-label="Close" on:click=move |_| open.set(None)>
                    <Icon icon=ic::CLOSE />
                </button>
                <button
                    class=css::lightbox_prev
                    aria-label="Previous"
                    on:click=move |e| {
                        e.stop_propagation();
                        move_by(Step::Prev);
                    }
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
                <figure class=css::lightbox_figure on:click=|e| e.stop_propagation()>
                    <img src=image.src.clone() alt=image.description.clone() />
                    <figcaption>
                        <strong>{image.artist.clone()}</strong>
                        <span class=css::muted>{image.category.clone()}</span>
                        {image.price.clone().map(|p| view! { <span class=css::accent>{p}</span> })}
                        <p>{image.description.clone()}</p>
                        {(!image.specialties.is_empty()).then(|| view! {
                            <p class=css::muted>{image.specialties.join(", ")}</p>
                        })}
                    </figcaption>
                </figure>
                <button
                    class=css::lightbox_next
                    aria-label="Next"
                    on:click=move |e| {
                        e.stop_propagation();
                        move_by(Step::Next);
                    }
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>
        })
    };

    view! {
        <div class=css::chips>{chips}</div>
        {grid}
        {lightbox}
    }
}

#[component]
fn Tiles(images: Vec<GalleryImage>, open: RwSignal<Option<ItemId>>) -> impl IntoView {
    view! {
        <div class=css::masonry>
            {images
                .into_iter()
                .map(|img| {
                    let id = img.id.clone();
                    view! {
                        <button class=css::tile on:click=move |_| open.set(Some(id.clone()))>
                            <img class=css::masonry_image src=img.src alt=img.description loading="lazy" />
                            <span class=css::tile_caption>{img.artist}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
