//! Navigation bar: hamburger menu, anchor links, scroll-linked styling.

use leptos::*;
use leptos::ev::MouseEvent;

use crate::components::scroll::{current_scroll_y, scroll_to_section};
use crate::{NAVBAR_HIDE_OFFSET, NAVBAR_SCROLLED_OFFSET};

/// Section anchors shown in the menu, as (id, label).
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("registration", "Register"),
    ("lookup", "Check Status"),
    ("contact", "Contact"),
];

/// Navbar styling derived from scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavbarState {
    /// Past the top of the page; solid background
    pub scrolled: bool,
    /// Scrolling down far enough to slide the bar away
    pub hidden: bool,
    last_scroll_top: f64,
}

impl NavbarState {
    pub fn on_scroll(&mut self, scroll_top: f64) {
        self.scrolled = scroll_top > NAVBAR_SCROLLED_OFFSET;
        self.hidden = scroll_top > self.last_scroll_top && scroll_top > NAVBAR_HIDE_OFFSET;
        self.last_scroll_top = scroll_top;
    }
}

/// Mobile menu open/closed, shared with the page-level Escape handler.
#[derive(Clone, Copy)]
pub struct NavMenu {
    open: RwSignal<bool>,
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl NavMenu {
    pub fn new() -> Self {
        Self {
            open: create_rw_signal(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.open.set(false);
    }
}

#[component]
pub fn Header(menu: NavMenu) -> impl IntoView {
    let navbar = create_rw_signal(NavbarState::default());
    let (active, set_active) = create_signal(None::<&'static str>);

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = current_scroll_y();
        navbar.update(|state| state.on_scroll(y));
    });
    on_cleanup(move || handle.remove());

    let on_link_click = move |ev: MouseEvent, id: &'static str| {
        ev.prevent_default();
        menu.close();
        if scroll_to_section(id) {
            set_active.set(Some(id));
        }
    };

    view! {
        <nav
            class="navbar"
            class:scrolled=move || navbar.with(|s| s.scrolled)
            class:nav-hidden=move || navbar.with(|s| s.hidden)
        >
            <div class="nav-container">
                <a href="#home" class="nav-logo" on:click=move |ev| on_link_click(ev, "home")>
                    "Research Week 2025"
                </a>
                <ul id="nav-menu" class="nav-menu" class:active=move || menu.is_open()>
                    {NAV_LINKS
                        .iter()
                        .map(|&(id, label)| view! {
                            <li class="nav-item">
                                <a
                                    href=format!("#{}", id)
                                    class="nav-link"
                                    class:active=move || active.get() == Some(id)
                                    on:click=move |ev| on_link_click(ev, id)
                                >
                                    {label}
                                </a>
                            </li>
                        })
                        .collect_view()}
                </ul>
                <div
                    id="hamburger"
                    class="hamburger"
                    class:active=move || menu.is_open()
                    on:click=move |_| menu.toggle()
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_after_offset() {
        let mut state = NavbarState::default();
        state.on_scroll(100.0);
        assert!(!state.scrolled);
        state.on_scroll(101.0);
        assert!(state.scrolled);
        state.on_scroll(0.0);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_hidden_only_when_scrolling_down_past_offset() {
        let mut state = NavbarState::default();

        state.on_scroll(150.0);
        assert!(!state.hidden, "moving down but above hide offset");

        state.on_scroll(250.0);
        assert!(state.hidden);

        state.on_scroll(400.0);
        assert!(state.hidden);

        state.on_scroll(350.0);
        assert!(!state.hidden, "scrolling up shows the bar");

        state.on_scroll(350.0);
        assert!(!state.hidden, "no movement keeps it shown");
    }
}
