use fadeline_core::contact::CONTACT_SUCCESS;
use fadeline_core::{ContactForm, ContactOutcome, submit_contact};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::booking::TextInput;
use crate::app::AppContext;
use crate::components::common::{Notice, NoticeKind, SectionHeading};
use crate::components::icons as ic;
use crate::config::{
    ADDRESS_LINES, CONTACT_EMAIL, OPENING_HOURS, PHONE_DISPLAY, PHONE_HREF, SUCCESS_BANNER_MS,
    WHATSAPP_HREF,
};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn ContactPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let notice = RwSignal::new(None::<(NoticeKind, String)>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let form = ContactForm {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let relay = ctx.relay();
        let config = ctx.config.with_value(|c| c.email.clone());
        sending.set(true);
        notice.set(None);

        spawn_local(async move {
            let result = submit_contact(&relay, &config, &form).await;
            let _ = sending.try_set(false);
            match result {
                Ok(outcome) => {
                    if outcome == ContactOutcome::Acknowledged {
                        tracing::info!("contact form acknowledged without delivery");
                    }
                    for field in [name, phone, email, message] {
                        let _ = field.try_set(String::new());
                    }
                    let _ = notice.try_set(Some((NoticeKind::Success, CONTACT_SUCCESS.to_string())));
                    TimeoutFuture::new(SUCCESS_BANNER_MS).await;
                    let _ = notice.try_update(|n| {
                        if matches!(n, Some((NoticeKind::Success, _))) {
                            *n = None;
                        }
                    });
                }
                Err(err) => {
                    let _ = notice.try_set(Some((NoticeKind::Error, err.to_string())));
                }
            }
        });
    };

    view! {
        <section class=css::section>
            <SectionHeading title="Contact Us" subtitle="Questions, special requests or group bookings" />
            <div class=css::contact_grid>
                <div class=css::card_body>
                    <h3 class=css::accent>"Visit"</h3>
                    <p class=css::meta_item><Icon icon=ic::LOCATION />{ADDRESS_LINES.join(", ")}</p>
                    <p class=css::meta_item>
                        <Icon icon=ic::PHONE /><a href=PHONE_HREF>{PHONE_DISPLAY}</a>
                    </p>
                    <p class=css::meta_item>
                        <Icon icon=ic::MAIL /><a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    </p>
                    <p class=css::meta_item>
                        <Icon icon=ic::CHAT />
                        <a href=WHATSAPP_HREF target="_blank" rel="noopener noreferrer">"Chat on WhatsApp"</a>
                    </p>
                    <h3 class=css::accent>"Hours"</h3>
                    {OPENING_HOURS.map(|h| view! { <p class=css::muted>{h}</p> }).collect_view()}
                </div>

                <form class=css::form on:submit=on_submit novalidate=true>
                    {move || notice.get().map(|(kind, text)| view! { <Notice kind=kind message=text /> })}
                    <div class=css::form_row>
                        <TextInput label="Name" kind="text" value=name />
                        <TextInput label="Phone (optional)" kind="tel" value=phone />
                    </div>
                    <TextInput label="Email" kind="email" value=email />
                    <label class=css::field>
                        <span>"Message"</span>
                        <textarea
                            rows=5
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class=css::button disabled=move || sending.get()>
                        <Icon icon=ic::MAIL />
                        {move || if sending.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
