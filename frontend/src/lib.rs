//! Research Week - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the Research Week conference site:
//! registration, registration lookup, live counters and the event
//! countdown.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation, mobile menu)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, CountdownTimer)                            │
//! │  ├── RegistrationStats                                       │
//! │  ├── RegistrationSection ──▶ RegistrationClient ──▶ /api     │
//! │  └── RegistrationLookup  ──▶ LookupClient       ──▶ /api     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! │  NotificationStack, LoadingIndicator, ScrollIndicators       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - API wire types and UI enums
//! - [`error`] - Validation, transport and application errors
//! - [`services`] - Workflow clients behind presenter traits
//! - [`components`] - Leptos components implementing those traits

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Requests
    RegistrationRequest,
    // API
    LookupResponse, RegisterResponse, RegistrationRecord, RegistrationResult, StatsResponse,
    StatsSnapshot,
    // UI
    NotificationKind,
};

// Errors
pub use error::{AppError, AppResult, TransportError, ValidationError};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Research Week - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=EVENT_NAME/>
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Page-level presenters
    let notifications = NotificationCenter::new();
    let overlay = LoadingOverlay::new();
    let stats_display = StatsDisplay::new();
    let lookup_panel = LookupPanel::new();
    let menu = NavMenu::new();

    // Workflow clients, wired to their presenters
    let transport = Rc::new(BrowserTransport::default());
    let stats = StatsClient::new(
        Rc::clone(&transport),
        Some(Rc::new(stats_display) as Rc<dyn StatsView>),
    );
    let registration = Rc::new(RegistrationClient::new(
        Rc::clone(&transport),
        Rc::new(notifications),
        Rc::new(overlay),
        stats.clone(),
    ));
    let lookup = Rc::new(LookupClient::new(transport, Rc::new(lookup_panel)));

    spawn_local(async move { stats.refresh().await });

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            menu.close();
            overlay.hide();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Header menu=menu/>

        <main class="container">
            <Hero/>
            <RegistrationStats display=stats_display/>
            <RegistrationSection client=registration overlay=overlay/>
            <RegistrationLookup client=lookup panel=lookup_panel/>
        </main>

        <Footer/>

        <NotificationStack center=notifications/>
        <LoadingIndicator overlay=overlay/>
        <ScrollIndicators/>
    }
}
