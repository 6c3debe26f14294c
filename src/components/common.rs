//! Small widgets shared by several pages.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Centered section title with a gold rule.
#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class=css::section_heading>
            <h2>{title}</h2>
            <div class=css::rule />
            {subtitle.map(|s| view! { <p class=css::section_subtitle>{s}</p> })}
        </div>
    }
}

/// Five stars, the first `rating` (rounded) filled.
#[component]
pub fn Stars(rating: f64) -> impl IntoView {
    let filled = rating.clamp(0.0, 5.0).round() as usize;
    view! {
        <span class=css::stars title=format!("{rating} / 5")>
            {(0..5)
                .map(|i| {
                    let class = if i < filled { css::star_on } else { css::star_off };
                    view! { <span class=class><Icon icon=ic::STAR /></span> }
                })
                .collect_view()}
        </span>
    }
}

/// Kind of inline notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Inline banner for form results and degraded data.
#[component]
pub fn Notice(kind: NoticeKind, #[prop(into)] message: String) -> impl IntoView {
    let (class, icon) = match kind {
        NoticeKind::Success => (css::notice_success, ic::CHECK),
        NoticeKind::Error => (css::notice_error, ic::INFO),
        NoticeKind::Info => (css::notice_info, ic::INFO),
    };
    view! {
        <div class=class role="status">
            <Icon icon=icon />
            <span>{message}</span>
        </div>
    }
}

/// Placeholder while a resource is loading.
#[component]
pub fn Loading(#[prop(into)] label: String) -> impl IntoView {
    view! { <p class=css::loading>{label}</p> }
}
