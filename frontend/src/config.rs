//! Application configuration.
//!
//! Centralized configuration for the Research Week frontend.
//! These are compile-time constants; the site is served from the same
//! origin as the registration API.

/// Registration API base URL.
///
/// Empty means same-origin relative paths (`/api/...`).
pub const API_BASE_URL: &str = "";

/// Upper bound for a single API request, in milliseconds.
///
/// A request that has not completed by then is reported as a
/// network failure.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// How long a notification banner stays up before it dismisses itself.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;

/// Exit transition length for a dismissed notification.
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// Event start, local time (ISO-8601 without offset).
pub const EVENT_START: &str = "2025-11-10T09:00:00";

/// Event display name.
pub const EVENT_NAME: &str = "DLSMHSI Research Week 2025";

/// Event venue.
pub const EVENT_VENUE: &str = "Villarosa Hall, DLSMHSI Angelo King Medical Center";

/// Organizer, shown in the footer.
pub const ORGANIZATION: &str = "De La Salle Medical and Health Sciences Institute";

/// Scroll offset after which the navbar gets the `scrolled` class.
pub const NAVBAR_SCROLLED_OFFSET: f64 = 100.0;

/// Scroll offset after which scrolling down hides the navbar.
pub const NAVBAR_HIDE_OFFSET: f64 = 200.0;

/// Scroll offset after which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

/// Height of the fixed navbar, subtracted from anchor targets.
pub const NAV_ANCHOR_OFFSET: f64 = 80.0;
