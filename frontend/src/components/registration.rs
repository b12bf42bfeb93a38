//! Registration form.
//!
//! Field values live in signals; submission is delegated to
//! [`RegistrationClient`].

use std::rc::Rc;

use leptos::*;
use leptos::ev::SubmitEvent;

use crate::components::LoadingOverlay;
use crate::services::{BrowserTransport, RegistrationClient, RegistrationForm};
use crate::types::RegistrationRequest;

/// Signal-backed form state.
#[derive(Clone, Copy)]
pub struct FormFields {
    full_name: RwSignal<String>,
    email: RwSignal<String>,
    affiliation: RwSignal<String>,
    phone: RwSignal<String>,
    interests: RwSignal<String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self {
            full_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            affiliation: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            interests: create_rw_signal(String::new()),
        }
    }
}

impl Default for FormFields {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm for FormFields {
    fn read(&self) -> RegistrationRequest {
        RegistrationRequest {
            full_name: self.full_name.get_untracked(),
            email: self.email.get_untracked(),
            affiliation: self.affiliation.get_untracked(),
            phone: Some(self.phone.get_untracked()),
            interests: Some(self.interests.get_untracked()),
        }
    }

    fn reset(&self) {
        for field in [self.full_name, self.email, self.affiliation, self.phone, self.interests] {
            field.set(String::new());
        }
    }
}

#[component]
pub fn RegistrationSection(
    client: Rc<RegistrationClient<BrowserTransport>>,
    overlay: LoadingOverlay,
) -> impl IntoView {
    let fields = FormFields::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let client = Rc::clone(&client);
        spawn_local(async move {
            let outcome = client.submit(&fields).await;
            log::debug!("Registration outcome: {:?}", outcome);
        });
    };

    view! {
        <section id="registration" class="registration">
            <h2 class="section-title">"Register for Research Week"</h2>
            <form id="registrationForm" class="registration-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="fullName">"Full Name *"</label>
                    <input
                        type="text"
                        id="fullName"
                        name="fullName"
                        prop:value=move || fields.full_name.get()
                        on:input=move |ev| fields.full_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="email">"Email *"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        prop:value=move || fields.email.get()
                        on:input=move |ev| fields.email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="affiliation">"Affiliation *"</label>
                    <input
                        type="text"
                        id="affiliation"
                        name="affiliation"
                        prop:value=move || fields.affiliation.get()
                        on:input=move |ev| fields.affiliation.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="phone">"Phone"</label>
                    <input
                        type="tel"
                        id="phone"
                        name="phone"
                        prop:value=move || fields.phone.get()
                        on:input=move |ev| fields.phone.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="interests">"Research Interests"</label>
                    <textarea
                        id="interests"
                        name="interests"
                        prop:value=move || fields.interests.get()
                        on:input=move |ev| fields.interests.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || overlay.is_visible()
                >
                    "Register Now"
                </button>
            </form>
        </section>
    }
}
