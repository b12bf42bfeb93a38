//! Stacked, dismissible notification banners.
//!
//! Each notification lives until it is closed or its timeout fires, then
//! plays an exit transition before it is removed.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::services::Notify;
use crate::types::NotificationKind;
use crate::{NOTIFICATION_EXIT_MS, NOTIFICATION_TIMEOUT_MS};

/// A single banner.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    /// Exit transition running
    pub leaving: bool,
}

/// Banners currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    /// Add a banner and return its id.
    pub fn push(&mut self, message: &str, kind: NotificationKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.to_string(),
            kind,
            leaving: false,
        });
        id
    }

    /// Start the exit transition. `false` if the banner is gone or
    /// already leaving.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.leaving => {
                n.leaving = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn is_leaving(&self, id: u64) -> bool {
        self.items.iter().any(|n| n.id == id && n.leaving)
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Reactive notification presenter.
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    queue: RwSignal<NotificationQueue>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(NotificationQueue::default()),
        }
    }

    pub fn items(&self) -> Vec<Notification> {
        self.queue.with(|q| q.items().to_vec())
    }

    pub fn is_leaving(&self, id: u64) -> bool {
        self.queue.with(|q| q.is_leaving(id))
    }

    /// Animate the banner out, then drop it.
    pub fn dismiss(&self, id: u64) {
        let started = self.queue.try_update(|q| q.begin_dismiss(id)).unwrap_or(false);
        if !started {
            return;
        }

        let queue = self.queue;
        Timeout::new(NOTIFICATION_EXIT_MS, move || {
            queue.try_update(|q| q.remove(id));
        })
        .forget();
    }
}

impl Notify for NotificationCenter {
    fn notify(&self, message: &str, kind: NotificationKind) {
        let Some(id) = self.queue.try_update(|q| q.push(message, kind)) else {
            return;
        };

        let center = *self;
        Timeout::new(NOTIFICATION_TIMEOUT_MS, move || center.dismiss(id)).forget();
    }
}

#[component]
pub fn NotificationStack(center: NotificationCenter) -> impl IntoView {
    view! {
        <div class="notification-stack">
            <For
                each=move || center.items()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.css_class() class:leaving=move || center.is_leaving(id)>
                            <i class=n.kind.icon()></i>
                            <span>{n.message}</span>
                            <button
                                class="notification-close"
                                on:click=move |_| center.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_stack_in_order() {
        let mut queue = NotificationQueue::default();
        let a = queue.push("first", NotificationKind::Success);
        let b = queue.push("second", NotificationKind::Error);

        assert_ne!(a, b);
        let messages: Vec<_> = queue.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_dismiss_animates_before_removal() {
        let mut queue = NotificationQueue::default();
        let id = queue.push("bye", NotificationKind::Success);

        assert!(queue.begin_dismiss(id));
        assert!(queue.is_leaving(id));
        assert_eq!(queue.items().len(), 1);

        // Close button and timeout racing each other.
        assert!(!queue.begin_dismiss(id));

        queue.remove(id);
        assert!(queue.items().is_empty());
        assert!(!queue.begin_dismiss(id));
    }

    #[test]
    fn test_dismiss_is_independent_per_banner() {
        let mut queue = NotificationQueue::default();
        let a = queue.push("a", NotificationKind::Error);
        let b = queue.push("b", NotificationKind::Error);

        queue.begin_dismiss(a);
        queue.remove(a);

        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
        assert!(!queue.is_leaving(b));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut queue = NotificationQueue::default();
        let a = queue.push("a", NotificationKind::Success);
        queue.remove(a);
        let b = queue.push("b", NotificationKind::Success);
        assert_ne!(a, b);
    }
}
