//! "Check Your Registration" panel.

use std::rc::Rc;

use leptos::*;

use crate::components::SectionLink;
use crate::services::{format_registration_date, BrowserTransport, LookupClient, LookupState, LookupView};

/// Result area state.
#[derive(Clone, Copy)]
pub struct LookupPanel {
    state: RwSignal<LookupState>,
}

impl Default for LookupPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupPanel {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(LookupState::Idle),
        }
    }
}

impl LookupView for LookupPanel {
    fn render(&self, state: LookupState) {
        self.state.set(state);
    }
}

fn render_state(state: LookupState) -> View {
    match state {
        LookupState::Idle => view! { }.into_view(),
        LookupState::MissingEmail => view! {
            <p class="error">"Please enter your email address."</p>
        }
        .into_view(),
        LookupState::Checking => view! {
            <p class="loading">"Checking registration..."</p>
        }
        .into_view(),
        LookupState::Found(record) => {
            let confirmation = if record.email_sent { "✅ Sent" } else { "⏳ Pending" };
            view! {
                <div class="registration-found">
                    <h4>"✅ Registration Found"</h4>
                    <p><strong>"Name:"</strong> " " {record.full_name}</p>
                    <p><strong>"Affiliation:"</strong> " " {record.affiliation}</p>
                    <p><strong>"Registered:"</strong> " " {format_registration_date(&record.registration_date)}</p>
                    <p><strong>"Email Confirmation:"</strong> " " {confirmation}</p>
                </div>
            }
            .into_view()
        }
        LookupState::NotFound => view! {
            <div class="registration-not-found">
                <h4>"❌ Registration Not Found"</h4>
                <p>"No registration found for this email address."</p>
                <p>"Please check your email or " <SectionLink target="registration">"register now"</SectionLink> "."</p>
            </div>
        }
        .into_view(),
    }
}

#[component]
pub fn RegistrationLookup(
    client: Rc<LookupClient<BrowserTransport>>,
    panel: LookupPanel,
) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());

    let on_check = move |_| {
        let client = Rc::clone(&client);
        let email = email.get_untracked();
        spawn_local(async move {
            client.lookup(&email).await;
        });
    };

    view! {
        <div id="lookup" class="registration-lookup">
            <div class="lookup-container">
                <h3>"Check Your Registration"</h3>
                <div class="lookup-form">
                    <input
                        type="email"
                        id="lookup-email"
                        placeholder="Enter your email address"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button type="button" on:click=on_check>"Check Status"</button>
                </div>
                <div id="lookup-result" class="lookup-result">
                    {move || render_state(panel.state.get())}
                </div>
            </div>
        </div>
    }
}
