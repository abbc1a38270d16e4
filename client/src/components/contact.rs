//! Contact section: info column plus the message form.
//!
//! The form is controlled: every input mirrors a [`ContactForm`] field, and
//! submit walks the status through sending, then sent or failed. Success
//! swaps the form for a dialog; failure keeps the fields so the visitor can
//! retry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use viewstate::section::SectionId;

use crate::content;
use crate::net::contact::{ContactPayload, send_message};
use crate::state::contact::{ContactForm, SubmitStatus};

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactForm>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let ready = contact.with(|f| f.is_complete() && f.status != SubmitStatus::Sending);
        if !ready {
            return;
        }
        let payload = contact.with(ContactPayload::from_form);
        contact.update(ContactForm::begin_send);
        spawn_local(async move {
            match send_message(&payload).await {
                Ok(()) => contact.update(ContactForm::mark_sent),
                Err(err) => {
                    leptos::logging::warn!("contact submit failed: {err}");
                    contact.update(ContactForm::mark_failed);
                }
            }
        });
    };

    view! {
        <section class="contact-me" id=SectionId::Contact.anchor()>
            <div class="contact-me-left">
                <p>
                    "I'm currently on the lookout for new job opportunities! If you have \
                     an opening that you think I'd be a good match for, or if you'd just \
                     like to connect, please don't hesitate to reach out. I'm always \
                     happy to talk about new projects, creative ideas, or how I can help \
                     you achieve your goals. I look forward to hearing from you!"
                </p>
                <div class="contact-info">
                    <div class="personal-info">
                        <div class="info-phone">{content::PHONE}</div>
                        <div class="info-email">{content::EMAIL}</div>
                        <div class="info-location">{content::LOCATION}</div>
                    </div>
                    <div class="social-media">
                        <p>"check out my social space"</p>
                        <div class="social-media-icons">
                            {content::SOCIALS
                                .into_iter()
                                .map(|social| view! { <a href=social.href>{social.label}</a> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>

            <div class="contact-me-right">
                <form on:submit=on_submit>
                    <div class="inputBox">
                        <div class="inputField">
                            <input
                                type="text"
                                placeholder="Full name"
                                id="name"
                                name="name"
                                class="item"
                                autocomplete="off"
                                required
                                prop:value=move || contact.with(|f| f.name.clone())
                                on:input=move |ev| {
                                    contact.update(|f| f.name = event_target_value(&ev));
                                }
                            />
                            <input
                                type="text"
                                placeholder="Email address"
                                id="email"
                                name="email"
                                class="item"
                                autocomplete="off"
                                required
                                prop:value=move || contact.with(|f| f.email.clone())
                                on:input=move |ev| {
                                    contact.update(|f| f.email = event_target_value(&ev));
                                }
                            />
                        </div>
                        <div class="inputField">
                            <input
                                type="text"
                                placeholder="Phone number"
                                id="phone"
                                name="phone"
                                class="item"
                                autocomplete="off"
                                required
                                prop:value=move || contact.with(|f| f.phone.clone())
                                on:input=move |ev| {
                                    contact.update(|f| f.phone = event_target_value(&ev));
                                }
                            />
                            <input
                                type="text"
                                placeholder="Subject"
                                id="subject"
                                name="subject"
                                class="item"
                                autocomplete="off"
                                required
                                prop:value=move || contact.with(|f| f.subject.clone())
                                on:input=move |ev| {
                                    contact.update(|f| f.subject = event_target_value(&ev));
                                }
                            />
                        </div>
                        <div class="message">
                            <textarea
                                placeholder="Your Messages"
                                id="message"
                                name="message"
                                class="item"
                                autocomplete="off"
                                rows="10"
                                required
                                prop:value=move || contact.with(|f| f.message.clone())
                                on:input=move |ev| {
                                    contact.update(|f| f.message = event_target_value(&ev));
                                }
                            ></textarea>
                        </div>
                    </div>
                    <button type="submit" class="btnemail">
                        "Send message"
                    </button>
                    <span class="form-status">
                        {move || contact.with(ContactForm::status_line)}
                    </span>
                </form>
            </div>

            <Show when=move || contact.with(|f| f.status == SubmitStatus::Sent)>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <h3>"Good job!"</h3>
                        <p>"The message has sent!"</p>
                        <button
                            class="dialog-ok"
                            on:click=move |_| contact.update(ContactForm::dismiss_result)
                        >
                            "OK"
                        </button>
                    </div>
                </div>
            </Show>
        </section>
    }
}
