//! UI Components for the Research Week site.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with mobile menu
//! - [`Hero`] - Title, venue and [`CountdownTimer`]
//! - [`ScrollIndicators`] - Scroll progress bar and scroll-to-top button
//! - [`SectionLink`] - In-page anchor with smooth scrolling
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`RegistrationSection`] - Registration form
//! - [`RegistrationStats`] - Registration counters
//! - [`RegistrationLookup`] - Registration status by email
//! - [`NotificationStack`] - Transient banners
//! - [`LoadingIndicator`] - Blocking overlay during submission

mod countdown;
mod footer;
mod header;
mod hero;
mod loading;
mod lookup;
mod notification;
mod registration;
pub mod scroll;
mod stats;

pub use countdown::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use loading::*;
pub use lookup::*;
pub use notification::*;
pub use registration::*;
pub use scroll::{ScrollIndicators, SectionLink};
pub use stats::*;
