//! In-chat lead capture form.

use leptos::prelude::*;

use crate::net::api::SharedTransport;
use crate::state::chat::ChatState;
use crate::state::conversation::submit_lead;
use crate::state::lead::{Interest, LeadDraft};
use crate::util::notice::alert;

/// "Get in Touch" form.
///
/// On success the conversation closes the form and appends a confirmation.
/// Validation and transport failures raise a blocking notice and keep the
/// form open with its input intact.
#[component]
pub fn LeadForm() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let transport = StoredValue::new(expect_context::<SharedTransport>());
    let draft = RwSignal::new(LeadDraft::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let lead = draft.get_untracked();
        let transport = transport.get_value();
        leptos::task::spawn_local(async move {
            if let Err(e) = submit_lead(&chat, transport.0.as_ref(), lead).await {
                alert(&e.to_string());
            }
        });
    };

    let on_close = move |_| chat.update(|c| c.set_lead_form_open(false));

    view! {
        <div class="lead-form">
            <div class="lead-form__header">
                <h3 class="lead-form__title">"Get in Touch"</h3>
                <button class="lead-form__close" aria-label="Close form" on:click=on_close>
                    "×"
                </button>
            </div>
            <form class="lead-form__fields" on:submit=on_submit>
                <input
                    class="lead-form__input"
                    type="text"
                    name="name"
                    placeholder="Name *"
                    required=true
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
                <input
                    class="lead-form__input"
                    type="email"
                    name="email"
                    placeholder="Email *"
                    required=true
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                />
                <input
                    class="lead-form__input"
                    type="tel"
                    name="phone"
                    placeholder="Phone"
                    prop:value=move || draft.with(|d| d.phone.clone())
                    on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                />
                <input
                    class="lead-form__input"
                    type="text"
                    name="company"
                    placeholder="Company"
                    prop:value=move || draft.with(|d| d.company.clone())
                    on:input=move |ev| draft.update(|d| d.company = event_target_value(&ev))
                />
                <select
                    class="lead-form__input"
                    name="interest"
                    on:change=move |ev| {
                        draft.update(|d| d.interest = Interest::from_form_value(&event_target_value(&ev)));
                    }
                >
                    {Interest::ALL
                        .into_iter()
                        .map(|interest| {
                            view! {
                                <option
                                    value=interest.as_str()
                                    selected=move || draft.with(|d| d.interest == interest)
                                >
                                    {interest.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <button type="submit" class="btn btn--primary lead-form__submit">
                    "Submit"
                </button>
            </form>
        </div>
    }
}
