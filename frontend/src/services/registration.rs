//! Registration submission workflow.
//!
//! Validates the form locally, posts it, and turns the answer into a
//! notification. The loading overlay is shown around the request only,
//! and a second submit while one is running is ignored.

use std::cell::Cell;
use std::rc::Rc;

use super::api::{HttpTransport, REGISTER_PATH};
use super::stats::StatsClient;
use super::ui::{InFlight, Notify, Overlay, OverlayGuard, RegistrationForm};
use super::validation::validate_registration;
use crate::error::{AppError, ValidationError, REGISTRATION_FAILED_MESSAGE};
use crate::types::{NotificationKind, RegisterResponse, RegistrationResult};

/// Which branch a submission took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Failed local validation, nothing was sent.
    Invalid(ValidationError),
    /// Another submission was still running.
    Busy,
    Registered,
    /// Server answered `success:false`.
    Rejected,
    /// Network or decode failure.
    Failed,
}

/// Success banner text: server message plus the email delivery note.
pub fn success_message(message: &str, email_sent: bool) -> String {
    let suffix = if email_sent {
        " Confirmation email sent!"
    } else {
        " (Email delivery may be delayed)"
    };
    format!("{}{}", message, suffix)
}

pub struct RegistrationClient<T> {
    transport: Rc<T>,
    notifier: Rc<dyn Notify>,
    overlay: Rc<dyn Overlay>,
    stats: StatsClient<T>,
    in_flight: Cell<bool>,
}

impl<T: HttpTransport> RegistrationClient<T> {
    pub fn new(
        transport: Rc<T>,
        notifier: Rc<dyn Notify>,
        overlay: Rc<dyn Overlay>,
        stats: StatsClient<T>,
    ) -> Self {
        Self {
            transport,
            notifier,
            overlay,
            stats,
            in_flight: Cell::new(false),
        }
    }

    fn notify_error(&self, err: &AppError) {
        self.notifier.notify(&err.user_message(), NotificationKind::Error);
    }

    /// `true` while a submission is waiting on the server.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    /// Submit the form's current values.
    pub async fn submit(&self, form: &dyn RegistrationForm) -> SubmitOutcome {
        let Some(busy) = InFlight::acquire(&self.in_flight) else {
            log::debug!("Registration already in flight, ignoring submit");
            return SubmitOutcome::Busy;
        };

        let request = form.read();
        if let Err(e) = validate_registration(&request) {
            log::debug!("Registration form invalid: {}", e);
            self.notify_error(&e.into());
            return SubmitOutcome::Invalid(e);
        }
        let request = request.normalized();

        log::info!("📤 Submitting registration for {}", request.email);
        let response = {
            let _overlay = OverlayGuard::show(&*self.overlay);
            self.transport
                .post_json::<_, RegisterResponse>(REGISTER_PATH, &request)
                .await
        };

        match response.map(RegistrationResult::from) {
            Ok(RegistrationResult::Registered { message, email_sent }) => {
                log::info!("✅ Registration accepted (email sent: {})", email_sent);
                self.notifier
                    .notify(&success_message(&message, email_sent), NotificationKind::Success);
                form.reset();

                drop(busy);
                self.stats.refresh().await;
                SubmitOutcome::Registered
            }
            Ok(RegistrationResult::Rejected { error }) => {
                log::warn!("Registration rejected: {:?}", error);
                let reason = error.unwrap_or_else(|| REGISTRATION_FAILED_MESSAGE.to_string());
                self.notify_error(&AppError::Rejected(reason));
                SubmitOutcome::Rejected
            }
            Err(e) => {
                log::error!("Registration error: {}", e);
                self.notify_error(&e.into());
                SubmitOutcome::Failed
            }
        }
    }
}
