//! Full-screen loading overlay shown while a registration is in flight.

use leptos::*;

use crate::services::Overlay;

/// Boolean-gated overlay; showing twice never stacks.
#[derive(Clone, Copy)]
pub struct LoadingOverlay {
    visible: RwSignal<bool>,
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingOverlay {
    pub fn new() -> Self {
        Self {
            visible: create_rw_signal(false),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl Overlay for LoadingOverlay {
    fn show(&self) {
        if !self.visible.get_untracked() {
            self.visible.set(true);
        }
    }

    fn hide(&self) {
        if self.visible.get_untracked() {
            self.visible.set(false);
        }
    }
}

#[component]
pub fn LoadingIndicator(overlay: LoadingOverlay) -> impl IntoView {
    view! {
        <Show
            when=move || overlay.is_visible()
            fallback=|| view! { }
        >
            <div id="loading" class="loading-overlay">
                <div class="loading-spinner">
                    <div class="spinner"></div>
                    <p>"Processing registration..."</p>
                </div>
            </div>
        </Show>
    }
}
