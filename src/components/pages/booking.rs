//! Appointment request form.
//!
//! The form is validated and resolved against the loaded services and
//! barbers by `fadeline_core::submit_booking`; this component only owns the
//! field signals and the submit status.

use fadeline_core::models::{Barber, Service};
use fadeline_core::{BookingForm, TIME_SLOTS, format_price, submit_booking};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::common::{Loading, Notice, NoticeKind, SectionHeading};
use crate::components::icons as ic;
use crate::config::{PHONE_DISPLAY, PHONE_HREF, SUCCESS_BANNER_MS};
use crate::utils::BrowserClock;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

const BOOKING_SUCCESS: &str =
    "Booking request sent! We'll confirm your appointment by email shortly.";

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// One signal per form field.
#[derive(Clone, Copy)]
struct Fields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    service: RwSignal<String>,
    barber: RwSignal<String>,
    date: RwSignal<String>,
    time: RwSignal<String>,
}

impl Fields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            service: RwSignal::new(String::new()),
            barber: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            time: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> BookingForm {
        BookingForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            service: self.service.get_untracked(),
            barber: self.barber.get_untracked(),
            date: self.date.get_untracked(),
            time: self.time.get_untracked(),
        }
    }

    fn clear(&self) {
        for field in [
            self.name,
            self.email,
            self.phone,
            self.service,
            self.barber,
            self.date,
            self.time,
        ] {
            let _ = field.try_set(String::new());
        }
    }
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let options = LocalResource::new(move || async move { ctx.api().load_booking_options(false).await });

    view! {
        <section class=css::section>
            <SectionHeading title="Book an Appointment" subtitle="Choose your service, barber and time" />
            <Suspense fallback=|| view! { <Loading label="Loading services and barbers..." /> }>
                {move || options.get().map(|(services, barbers)| view! {
                    <BookingFormView services=services barbers=barbers />
                })}
            </Suspense>
            <p class=css::muted>
                "Prefer to call? " <a href=PHONE_HREF class=css::accent>{PHONE_DISPLAY}</a>
            </p>
        </section>
    }
}

#[component]
fn BookingFormView(services: Vec<Service>, barbers: Vec<Barber>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let fields = Fields::new();
    let status = RwSignal::new(Status::Idle);
    let unavailable = services.is_empty() || barbers.is_empty();
    let options = StoredValue::new((services, barbers));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == Status::Sending {
            return;
        }
        status.set(Status::Sending);
        let form = fields.snapshot();
        let relay = ctx.relay();
        let email = ctx.config.with_value(|c| c.email.clone());
        let (services, barbers) = options.get_value();

        spawn_local(async move {
            match submit_booking(&relay, &email, &form, &services, &barbers).await {
                Ok(_) => {
                    fields.clear();
                    let _ = status.try_set(Status::Sent);
                    TimeoutFuture::new(SUCCESS_BANNER_MS).await;
                    if status.try_get_untracked() == Some(Status::Sent) {
                        let _ = status.try_set(Status::Idle);
                    }
                }
                Err(err) => {
                    let _ = status.try_set(Status::Failed(err.to_string()));
                }
            }
        });
    };

    let service_options = options.with_value(|(services, _)| {
        services
            .iter()
            .map(|s| {
                let label = format!("{} - ${} ({})", s.name, format_price(s.price), s.duration);
                view! { <option value=s.id.to_string()>{label}</option> }
            })
            .collect_view()
    });
    let barber_options = options.with_value(|(_, barbers)| {
        barbers
            .iter()
            .map(|b| view! { <option value=b.id.to_string()>{b.name.clone()}</option> })
            .collect_view()
    });
    let time_options = TIME_SLOTS
        .iter()
        .map(|slot| view! { <option value=*slot>{*slot}</option> })
        .collect_view();

    view! {
        {unavailable.then(|| view! {
            <Notice
                kind=NoticeKind::Info
                message="Online booking is temporarily unavailable. Please call us to book."
            />
        })}
        {move || match status.get() {
            Status::Sent => Some(view! { <Notice kind=NoticeKind::Success message=BOOKING_SUCCESS /> }),
            Status::Failed(message) => Some(view! { <Notice kind=NoticeKind::Error message=message /> }),
            Status::Idle | Status::Sending => None,
        }}
        <form class=css::form on:submit=on_submit novalidate=true>
            <div class=css::form_row>
                <TextInput label="Full name" kind="text" value=fields.name />
                <TextInput label="Email" kind="email" value=fields.email />
            </div>
            <div class=css::form_row>
                <TextInput label="Phone" kind="tel" value=fields.phone />
                <label class=css::field>
                    <span>"Service"</span>
                    <select
                        prop:value=move || fields.service.get()
                        on:change=move |ev| fields.service.set(event_target_value(&ev))
                    >
                        <option value="">"Select a service"</option>
                        {service_options}
                    </select>
                </label>
            </div>
            <div class=css::form_row>
                <label class=css::field>
                    <span>"Barber"</span>
                    <select
                        prop:value=move || fields.barber.get()
                        on:change=move |ev| fields.barber.set(event_target_value(&ev))
                    >
                        <option value="">"Select a barber"</option>
                        {barber_options}
                    </select>
                </label>
                <label class=css::field>
                    <span>"Date"</span>
                    <input
                        type="date"
                        min=today()
                        prop:value=move || fields.date.get()
                        on:input=move |ev| fields.date.set(event_target_value(&ev))
                    />
                </label>
                <label class=css::field>
                    <span>"Time"</span>
                    <select
                        prop:value=move || fields.time.get()
                        on:change=move |ev| fields.time.set(event_target_value(&ev))
                    >
                        <option value="">"Select a time"</option>
                        {time_options}
                    </select>
                </label>
            </div>
            <button
                type="submit"
                class=css::button
                disabled=move || unavailable || status.get() == Status::Sending
            >
                <Icon icon=ic::CALENDAR />
                {move || if status.get() == Status::Sending { "Sending..." } else { "Request Appointment" }}
            </button>
        </form>
    }
}

/// Labelled text input bound to a signal.
#[component]
pub(super) fn TextInput(
    label: &'static str,
    kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class=css::field>
            <span>{label}</span>
            <input
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Today's date as `YYYY-MM-DD`, the earliest bookable day.
fn today() -> String {
    use fadeline_core::Clock;

    chrono::DateTime::from_timestamp_millis(BrowserClock.now_millis())
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
