//! In-memory transport and recording presenters for workflow tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use futures::channel::oneshot;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::api::HttpTransport;
use super::ui::{LookupState, LookupView, Notify, Overlay, RegistrationForm, StatsView};
use crate::error::TransportError;
use crate::types::{NotificationKind, RegistrationRequest, StatsSnapshot};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Get(String),
    Post(String, Value),
}

/// Canned responses per path, consumed in order.
#[derive(Default)]
pub struct FakeTransport {
    routes: RefCell<HashMap<String, VecDeque<Result<Value, TransportError>>>>,
    calls: RefCell<Vec<Call>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeTransport {
    pub fn respond(&self, path: &str, response: Result<Value, TransportError>) -> &Self {
        self.routes
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// The next request waits until the returned sender fires.
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    async fn answer<R: DeserializeOwned>(&self, path: &str) -> Result<R, TransportError> {
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let next = self
            .routes
            .borrow_mut()
            .get_mut(path)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(TransportError::Request(format!("no route for {path}"))));

        Ok(serde_json::from_value(next?)?)
    }
}

impl HttpTransport for FakeTransport {
    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, TransportError> {
        self.calls.borrow_mut().push(Call::Get(path.to_string()));
        self.answer(path).await
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, TransportError> {
        let body = serde_json::to_value(body)?;
        self.calls.borrow_mut().push(Call::Post(path.to_string(), body));
        self.answer(path).await
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    Notify(String, NotificationKind),
    Show,
    Hide,
    Reset,
    Stats(StatsSnapshot),
    Lookup(LookupState),
}

/// Records every presenter call in order.
#[derive(Default)]
pub struct Recorder {
    pub form: RefCell<RegistrationRequest>,
    events: RefCell<Vec<UiEvent>>,
}

impl Recorder {
    pub fn with_form(form: RegistrationRequest) -> Self {
        Self {
            form: RefCell::new(form),
            events: RefCell::default(),
        }
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.events.borrow().clone()
    }

    pub fn notifications(&self) -> Vec<(String, NotificationKind)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::Notify(message, kind) => Some((message, kind)),
                _ => None,
            })
            .collect()
    }

    pub fn overlay_calls(&self) -> Vec<UiEvent> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, UiEvent::Show | UiEvent::Hide))
            .collect()
    }

    fn push(&self, event: UiEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Notify for Recorder {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.push(UiEvent::Notify(message.to_string(), kind));
    }
}

impl Overlay for Recorder {
    fn show(&self) {
        self.push(UiEvent::Show);
    }

    fn hide(&self) {
        self.push(UiEvent::Hide);
    }
}

impl RegistrationForm for Recorder {
    fn read(&self) -> RegistrationRequest {
        self.form.borrow().clone()
    }

    fn reset(&self) {
        *self.form.borrow_mut() = RegistrationRequest::default();
        self.push(UiEvent::Reset);
    }
}

impl StatsView for Recorder {
    fn render(&self, stats: StatsSnapshot) {
        self.push(UiEvent::Stats(stats));
    }
}

impl LookupView for Recorder {
    fn render(&self, state: LookupState) {
        self.push(UiEvent::Lookup(state));
    }
}
