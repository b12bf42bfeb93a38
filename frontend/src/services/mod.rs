//! Registration API services.
//!
//! This module holds the workflow logic behind the page, independent of
//! Leptos so it can be tested natively:
//!
//! # Services
//!
//! - [`api`] - JSON transport seam and the browser `fetch` implementation
//! - [`validation`] - Local registration form checks
//! - [`registration`] - Form submission workflow
//! - [`stats`] - Best-effort registration counts
//! - [`lookup`] - Registration status by email
//! - [`ui`] - Presenter traits the components implement

pub mod api;
pub mod lookup;
pub mod registration;
pub mod stats;
pub mod ui;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use api::*;
pub use lookup::*;
pub use registration::*;
pub use stats::*;
pub use ui::*;
pub use validation::*;
