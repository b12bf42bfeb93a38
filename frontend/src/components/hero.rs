//! Hero section with the event countdown.

use leptos::*;

use crate::components::{CountdownTimer, SectionLink};
use crate::{EVENT_NAME, EVENT_VENUE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">{EVENT_NAME}</h1>
                <p class="hero-subtitle">
                    "Advancing health sciences through research, collaboration and innovation."
                </p>
                <p class="hero-venue">"📍 " {EVENT_VENUE}</p>
                <CountdownTimer/>
                <div class="hero-buttons">
                    <SectionLink target="registration" class="btn btn-primary">"Register Now"</SectionLink>
                    <SectionLink target="lookup" class="btn btn-secondary">"Check Registration"</SectionLink>
                </div>
            </div>
        </section>
    }
}
