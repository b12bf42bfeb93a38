//! Registration status lookup by email.
//!
//! Every failure (unknown email, server error, network error) renders
//! the same not-found block.

use std::fmt::Display;
use std::rc::Rc;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use super::api::{HttpTransport, REGISTRATION_PATH};
use super::ui::{LookupState, LookupView};
use crate::error::{AppError, AppResult};
use crate::types::{LookupResponse, RegistrationRecord};

/// `/api/registration/{email}` with the email percent-encoded.
pub fn lookup_path(email: &str) -> String {
    format!("{}/{}", REGISTRATION_PATH, urlencoding::encode(email))
}

/// Render a server timestamp as `MM/DD/YYYY`.
///
/// Timestamps with an offset are shown as the viewer's local calendar
/// date; timestamps without one are taken as already local. Unparseable
/// input is returned unchanged.
pub fn format_registration_date(raw: &str) -> String {
    format_date_in(raw, &Local)
}

fn format_date_in<Tz>(raw: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    const OUT: &str = "%m/%d/%Y";
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(zone).format(OUT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.date().format(OUT).to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(OUT).to_string();
    }

    raw.to_string()
}

pub struct LookupClient<T> {
    transport: Rc<T>,
    view: Rc<dyn LookupView>,
}

impl<T: HttpTransport> LookupClient<T> {
    pub fn new(transport: Rc<T>, view: Rc<dyn LookupView>) -> Self {
        Self { transport, view }
    }

    async fn fetch(&self, email: &str) -> AppResult<RegistrationRecord> {
        let response: LookupResponse = self.transport.get_json(&lookup_path(email)).await?;

        match (response.success, response.registration) {
            (true, Some(record)) => Ok(record),
            _ => Err(AppError::Rejected(
                response.error.unwrap_or_else(|| "Registration not found".into()),
            )),
        }
    }

    /// Look up `email` and render the result. Returns the final state.
    pub async fn lookup(&self, email: &str) -> LookupState {
        let email = email.trim();
        if email.is_empty() {
            self.view.render(LookupState::MissingEmail);
            return LookupState::MissingEmail;
        }

        self.view.render(LookupState::Checking);

        let state = match self.fetch(email).await {
            Ok(record) => {
                log::info!("🔍 Registration found for {}", email);
                LookupState::Found(record)
            }
            Err(e) => {
                log::info!("🔍 No registration for {}: {}", email, e);
                LookupState::NotFound
            }
        };

        self.view.render(state.clone());
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::services::testing::{Call, FakeTransport, Recorder, UiEvent};
    use chrono::{FixedOffset, Utc};
    use futures::executor::block_on;
    use serde_json::json;

    fn setup() -> (Rc<FakeTransport>, Rc<Recorder>, LookupClient<FakeTransport>) {
        let transport = Rc::new(FakeTransport::default());
        let recorder = Rc::new(Recorder::default());
        let client = LookupClient::new(Rc::clone(&transport), recorder.clone() as Rc<dyn LookupView>);
        (transport, recorder, client)
    }

    #[test]
    fn test_lookup_path_escapes_email() {
        assert_eq!(lookup_path("ada@example.org"), "/api/registration/ada%40example.org");
        assert_eq!(lookup_path("a+b c/d@x.io"), "/api/registration/a%2Bb%20c%2Fd%40x.io");
    }

    #[test]
    fn test_empty_email_makes_no_request() {
        let (transport, recorder, client) = setup();

        for email in ["", "   "] {
            assert_eq!(block_on(client.lookup(email)), LookupState::MissingEmail);
        }

        assert!(transport.calls().is_empty());
        assert_eq!(
            recorder.events(),
            vec![UiEvent::Lookup(LookupState::MissingEmail), UiEvent::Lookup(LookupState::MissingEmail)]
        );
    }

    #[test]
    fn test_found_renders_record() {
        let (transport, recorder, client) = setup();
        let path = lookup_path("ada@example.org");
        transport.respond(
            &path,
            Ok(json!({
                "success": true,
                "registration": {
                    "fullName": "Ada Lovelace",
                    "affiliation": "DLSMHSI",
                    "registrationDate": "2025-10-01T08:30:00Z",
                    "emailSent": true
                }
            })),
        );

        let state = block_on(client.lookup(" ada@example.org "));

        let record = RegistrationRecord {
            full_name: "Ada Lovelace".into(),
            affiliation: "DLSMHSI".into(),
            registration_date: "2025-10-01T08:30:00Z".into(),
            email_sent: true,
        };
        assert_eq!(state, LookupState::Found(record.clone()));
        assert_eq!(transport.calls(), vec![Call::Get(path)]);
        assert_eq!(
            recorder.events(),
            vec![UiEvent::Lookup(LookupState::Checking), UiEvent::Lookup(LookupState::Found(record))]
        );
    }

    #[test]
    fn test_every_failure_is_not_found() {
        let (transport, recorder, client) = setup();
        let path = lookup_path("ghost@example.org");
        transport
            .respond(&path, Ok(json!({"success": false, "error": "Registration not found"})))
            .respond(&path, Ok(json!({"success": true})))
            .respond(&path, Ok(json!({"unexpected": "shape"})))
            .respond(&path, Err(TransportError::Status(500)))
            .respond(&path, Err(TransportError::Request("offline".into())));

        for _ in 0..5 {
            assert_eq!(block_on(client.lookup("ghost@example.org")), LookupState::NotFound);
        }

        let finals: Vec<_> = recorder
            .events()
            .into_iter()
            .filter(|e| *e != UiEvent::Lookup(LookupState::Checking))
            .collect();
        assert_eq!(finals, vec![UiEvent::Lookup(LookupState::NotFound); 5]);
    }

    fn viewer_date(utc: &str) -> String {
        DateTime::parse_from_rfc3339(utc)
            .unwrap()
            .with_timezone(&Local)
            .format("%m/%d/%Y")
            .to_string()
    }

    #[test]
    fn test_offset_timestamps_use_viewer_calendar_date() {
        for raw in [
            "2025-10-01T20:00:00.000Z",
            "2025-10-01T08:30:00.123+08:00",
            "2025-10-01T23:30:00-05:00",
        ] {
            assert_eq!(format_registration_date(raw), viewer_date(raw), "{}", raw);
        }

        let same_instant = format_registration_date("2025-10-02T04:00:00+08:00");
        assert_eq!(format_registration_date("2025-10-01T20:00:00Z"), same_instant);
    }

    #[test]
    fn test_utc_evening_is_next_day_in_manila() {
        let manila = FixedOffset::east_opt(8 * 3600).unwrap();
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(format_date_in("2025-10-01T20:00:00.000Z", &manila), "10/02/2025");
        assert_eq!(format_date_in("2025-10-01T20:00:00.000Z", &Utc), "10/01/2025");
        assert_eq!(format_date_in("2025-10-01T02:00:00Z", &new_york), "09/30/2025");
        assert_eq!(format_date_in("2025-10-01T23:30:00-05:00", &manila), "10/02/2025");
        // No offset: shown as written, whatever the zone.
        assert_eq!(format_date_in("2025-03-07T23:05:09", &manila), "03/07/2025");
    }

    #[test]
    fn test_format_registration_date() {
        assert_eq!(format_registration_date("2025-03-07 14:05:09"), "03/07/2025");
        assert_eq!(format_registration_date("2025-03-07T14:05:09.5"), "03/07/2025");
        assert_eq!(format_registration_date("2025-03-07"), "03/07/2025");
        assert_eq!(format_registration_date("last Tuesday"), "last Tuesday");
    }
}
