//! Presenter seams between the workflow clients and the page.
//!
//! Components implement these over Leptos signals; tests implement them
//! with recorders.

use std::cell::Cell;

use crate::types::{NotificationKind, RegistrationRecord, RegistrationRequest, StatsSnapshot};

/// Transient banner sink.
pub trait Notify {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Full-screen blocking indicator. Both calls are idempotent.
pub trait Overlay {
    fn show(&self);
    fn hide(&self);
}

/// The registration form as seen by the client.
pub trait RegistrationForm {
    /// Current field values.
    fn read(&self) -> RegistrationRequest;
    /// Clear every field.
    fn reset(&self);
}

/// Optional stats display region.
pub trait StatsView {
    fn render(&self, stats: StatsSnapshot);
}

/// What the lookup result area shows.
#[derive(Clone, Debug, PartialEq)]
pub enum LookupState {
    Idle,
    /// Lookup attempted with an empty email.
    MissingEmail,
    /// Request in flight.
    Checking,
    Found(RegistrationRecord),
    /// Not registered, server error and network error all land here.
    NotFound,
}

/// Lookup result area.
pub trait LookupView {
    fn render(&self, state: LookupState);
}

/// Shows the overlay for as long as it lives.
pub struct OverlayGuard<'a> {
    overlay: &'a dyn Overlay,
}

impl<'a> OverlayGuard<'a> {
    pub fn show(overlay: &'a dyn Overlay) -> Self {
        overlay.show();
        Self { overlay }
    }
}

impl Drop for OverlayGuard<'_> {
    fn drop(&mut self) {
        self.overlay.hide();
    }
}

/// Holds a busy flag for as long as it lives.
pub struct InFlight<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> InFlight<'a> {
    /// `None` if the flag is already held.
    pub fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self { flag })
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<&'static str>>);

    impl Overlay for Recorder {
        fn show(&self) {
            self.0.borrow_mut().push("show");
        }
        fn hide(&self) {
            self.0.borrow_mut().push("hide");
        }
    }

    #[test]
    fn test_overlay_guard_pairs_calls() {
        let recorder = Recorder::default();
        {
            let _guard = OverlayGuard::show(&recorder);
            assert_eq!(*recorder.0.borrow(), vec!["show"]);
        }
        assert_eq!(*recorder.0.borrow(), vec!["show", "hide"]);
    }

    #[test]
    fn test_in_flight_is_exclusive() {
        let flag = Cell::new(false);
        let first = InFlight::acquire(&flag);
        assert!(first.is_some());
        assert!(InFlight::acquire(&flag).is_none());
        drop(first);
        assert!(!flag.get());
        assert!(InFlight::acquire(&flag).is_some());
    }
}
