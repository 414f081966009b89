//! Contact form with a simulated submission.

use leptos::prelude::*;

use crate::config::ContactConfig;
use crate::state::contact::{ContactState, Field};

/// Two-way binding between one form field and the contact state.
fn bind(
    contact: RwSignal<ContactState>,
    field: Field,
) -> (impl Fn() -> String + Copy, impl Fn(leptos::ev::Event) + Copy) {
    let value = move || contact.with(|c| c.fields.get(field).to_owned());
    let on_input = move |ev| {
        let next = event_target_value(&ev);
        contact.update(|c| c.fields.set(field, next));
    };
    (value, on_input)
}

#[component]
pub fn ContactForm(config: ContactConfig) -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactState>>();

    #[cfg(feature = "hydrate")]
    let scheduler = {
        use crate::util::schedule::Scheduler;

        let scheduler = StoredValue::new_local(Scheduler::new());
        on_cleanup(move || {
            let _ = scheduler.try_with_value(Scheduler::cancel_all);
        });
        scheduler
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = match contact.try_update(ContactState::begin) {
            Some(Ok(fields)) => fields,
            Some(Err(e)) => {
                leptos::logging::warn!("contact form: {e}");
                return;
            }
            None => return,
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::contact::{SimulatedTransport, Transport};
            use crate::util::schedule::Slot;

            let result = SimulatedTransport::from(config).send(&fields).await;
            if let Err(e) = &result {
                leptos::logging::warn!("contact submission failed: {e}");
            }
            let Some(seq) = contact.try_update(|c| c.finish(result)) else {
                return;
            };
            let _ = scheduler.try_with_value(|s| {
                s.after_in(Slot::MessageHide, config.message_ms, move || {
                    let _ = contact.try_update(|c| c.hide_message(seq));
                })
            });
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (fields, config);
        }
    };

    let (name, on_name) = bind(contact, Field::Name);
    let (email, on_email) = bind(contact, Field::Email);
    let (subject, on_subject) = bind(contact, Field::Subject);
    let (message, on_message) = bind(contact, Field::Message);
    let pending = move || contact.with(ContactState::is_pending);

    view! {
        <form id="contact-form" class="contact-form" on:submit=on_submit>
            <div class="form-group">
                <label class="form-label" for="name">"Name"</label>
                <input id="name" name="name" class="form-control" type="text" required prop:value=name on:input=on_name/>
            </div>
            <div class="form-group">
                <label class="form-label" for="email">"Email"</label>
                <input id="email" name="email" class="form-control" type="email" required prop:value=email on:input=on_email/>
            </div>
            <div class="form-group">
                <label class="form-label" for="subject">"Subject"</label>
                <input
                    id="subject"
                    name="subject"
                    class="form-control"
                    type="text"
                    required
                    prop:value=subject
                    on:input=on_subject
                />
            </div>
            <div class="form-group">
                <label class="form-label" for="message">"Message"</label>
                <textarea
                    id="message"
                    name="message"
                    class="form-control"
                    rows="5"
                    required
                    prop:value=message
                    on:input=on_message
                ></textarea>
            </div>
            <button type="submit" class="btn btn--primary btn--full-width" disabled=pending>
                <Show when=pending>
                    <span class="loading"></span>
                    " "
                </Show>
                {move || contact.with(ContactState::button_label)}
            </button>
            {move || {
                contact
                    .with(|c| c.message.clone())
                    .map(|m| view! { <div id="form-message" class=m.kind.class() role="status">{m.text}</div> })
            }}
        </form>
    }
}
