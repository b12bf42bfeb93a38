//! Page scroll helpers: progress bar, scroll-to-top button, smooth
//! scrolling to anchors.

use leptos::ev::MouseEvent;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::{NAV_ANCHOR_OFFSET, SCROLL_TOP_THRESHOLD};

/// How far down the page is, in percent.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, inner_height: f64) -> f64 {
    let scrollable = scroll_height - inner_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn show_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Current vertical scroll offset, 0 outside a browser.
pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Document offset of the element with `id`.
pub fn element_offset_top(id: &str) -> Option<f64> {
    let element = gloo_utils::document().get_element_by_id(id)?;
    let element = element.dyn_into::<HtmlElement>().ok()?;
    Some(element.offset_top() as f64)
}

/// Window offset that puts a section at `offset_top` just below the
/// fixed navbar.
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - NAV_ANCHOR_OFFSET
}

/// Smooth-scroll to the section with `id`. `false` if it does not exist.
pub fn scroll_to_section(id: &str) -> bool {
    match element_offset_top(id) {
        Some(top) => {
            smooth_scroll_to(anchor_scroll_top(top));
            true
        }
        None => false,
    }
}

/// In-page link to `#target` that scrolls smoothly below the navbar.
#[component]
pub fn SectionLink(
    target: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        scroll_to_section(target);
    };

    view! {
        <a href=format!("#{}", target) class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[component]
pub fn ScrollIndicators() -> impl IntoView {
    let (scroll_y, set_scroll_y) = create_signal(current_scroll_y());
    let (progress, set_progress) = create_signal(0.0_f64);

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = current_scroll_y();
        set_scroll_y.set(y);

        let window = gloo_utils::window();
        let inner = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = gloo_utils::document()
            .document_element()
            .map(|e| e.scroll_height() as f64)
            .unwrap_or(0.0);
        set_progress.set(scroll_progress(y, height, inner));
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="scroll-indicator" style:width=move || format!("{:.2}%", progress.get())></div>
        <button
            class="scroll-to-top"
            class:visible=move || show_scroll_top(scroll_y.get())
            on:click=move |_| smooth_scroll_to(0.0)
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
