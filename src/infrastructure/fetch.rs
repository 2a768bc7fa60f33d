//! Fetch slot with last-started-wins ordering.
//!
//! Every request is tagged with the slot generation current when it started.
//! A completion is applied only if its generation is still current, so a slow
//! response for an old window can never overwrite fresher data. Requests are
//! not aborted at the transport level; their results are simply dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use derive_more::Display;
use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::http::window_url;
use crate::domain::{
    errors::DashboardError,
    logging::LogComponent,
    telemetry::{DashboardPayload, PayloadSource, TimeWindow},
};
use crate::{log_debug, log_warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum FetchStatus {
    #[default]
    #[display(fmt = "idle")]
    Idle,
    #[display(fmt = "loading")]
    Loading,
    #[display(fmt = "success")]
    Success,
    #[display(fmt = "error")]
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub status: FetchStatus,
    /// Last successfully loaded payload; kept when a later fetch fails.
    pub payload: Option<T>,
    pub error_message: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { status: FetchStatus::Idle, payload: None, error_message: None }
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}

/// Identity of one started request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub window: TimeWindow,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer request started (or the slot was invalidated) before this one settled.
    Discarded,
}

#[derive(Debug)]
pub struct FetchSlot<T> {
    state: FetchState<T>,
    generation: u64,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self { state: FetchState::default(), generation: 0 }
    }
}

impl<T> FetchSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Start a new request; every earlier ticket becomes stale.
    pub fn begin(&mut self, window: TimeWindow) -> FetchTicket {
        self.generation += 1;
        self.state.status = FetchStatus::Loading;
        FetchTicket { generation: self.generation, window }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn complete(&mut self, ticket: FetchTicket, result: Result<T, DashboardError>) -> FetchOutcome {
        if !self.is_current(&ticket) {
            return FetchOutcome::Discarded;
        }
        match result {
            Ok(payload) => {
                self.state.status = FetchStatus::Success;
                self.state.payload = Some(payload);
                self.state.error_message = None;
            }
            Err(err) => {
                self.state.status = FetchStatus::Error;
                self.state.error_message = Some(err.to_string());
            }
        }
        FetchOutcome::Applied
    }

    /// Make every outstanding ticket stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }
}

/// Handle returned by [`FetchController::start`]; disposing drops that request's result.
#[derive(Debug)]
pub struct FetchDisposer<T = DashboardPayload> {
    slot: Weak<RefCell<FetchSlot<T>>>,
    ticket: FetchTicket,
}

impl<T> FetchDisposer<T> {
    /// No effect if a newer request has already superseded this one.
    pub fn dispose(self) {
        if let Some(slot) = self.slot.upgrade() {
            let mut slot = slot.borrow_mut();
            if slot.is_current(&self.ticket) {
                slot.invalidate();
            }
        }
    }
}

/// Fetch adapter owned by a single dashboard instance.
pub struct FetchController<S> {
    source: S,
    base_url: String,
    slot: Rc<RefCell<FetchSlot<DashboardPayload>>>,
}

impl<S: PayloadSource> FetchController<S> {
    pub fn new(source: S, base_url: impl Into<String>) -> Self {
        Self { source, base_url: base_url.into(), slot: Rc::new(RefCell::new(FetchSlot::new())) }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn state(&self) -> FetchState<DashboardPayload> {
        self.slot.borrow().state().clone()
    }

    /// Begin a request for `window`; it goes on the wire once the returned future is first polled.
    ///
    /// The returned future applies the result to the slot when driven to
    /// completion; it reports whether the result was still current.
    pub fn start(&self, window: TimeWindow) -> (FetchDisposer, LocalBoxFuture<'static, FetchOutcome>) {
        let url = window_url(&self.base_url, window);
        let ticket = self.slot.borrow_mut().begin(window);
        log_debug!(
            LogComponent::Infrastructure("Fetch"),
            "📡 #{} {}",
            ticket.generation(),
            url
        );

        let request = self.source.fetch_payload(&url);
        let slot = Rc::clone(&self.slot);
        let task = async move {
            let result = request.await;
            if let Err(err) = &result {
                log_warn!(LogComponent::Infrastructure("Fetch"), "#{} failed: {}", ticket.generation(), err);
            }
            let outcome = slot.borrow_mut().complete(ticket, result);
            if outcome == FetchOutcome::Discarded {
                log_debug!(
                    LogComponent::Infrastructure("Fetch"),
                    "🗑️ #{} ({}) superseded, result dropped",
                    ticket.generation(),
                    ticket.window
                );
            }
            outcome
        }
        .boxed_local();

        (FetchDisposer { slot: Rc::downgrade(&self.slot), ticket }, task)
    }

    /// Drop whatever is still in flight, e.g. on unmount.
    pub fn invalidate(&self) {
        self.slot.borrow_mut().invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_ticket_is_discarded() {
        let mut slot: FetchSlot<u32> = FetchSlot::new();
        let first = slot.begin(TimeWindow::OneHour);
        let second = slot.begin(TimeWindow::SevenDays);

        assert_eq!(slot.complete(second, Ok(2)), FetchOutcome::Applied);
        assert_eq!(slot.complete(first, Ok(1)), FetchOutcome::Discarded);
        assert_eq!(slot.state().payload, Some(2));
        assert_eq!(slot.state().status, FetchStatus::Success);
    }

    #[test]
    fn error_keeps_previous_payload() {
        let mut slot: FetchSlot<u32> = FetchSlot::new();
        let ok = slot.begin(TimeWindow::OneHour);
        slot.complete(ok, Ok(7));

        let failing = slot.begin(TimeWindow::OneHour);
        assert!(slot.state().is_loading());
        slot.complete(failing, Err(DashboardError::http(500, "Internal Server Error")));

        assert_eq!(slot.state().status, FetchStatus::Error);
        assert_eq!(slot.state().payload, Some(7));
        assert_eq!(slot.state().error_message.as_deref(), Some("HTTP error: 500"));
    }

    #[test]
    fn success_clears_error_message() {
        let mut slot: FetchSlot<u32> = FetchSlot::new();
        let failing = slot.begin(TimeWindow::OneHour);
        slot.complete(failing, Err(DashboardError::Network("offline".into())));
        let ok = slot.begin(TimeWindow::OneHour);
        slot.complete(ok, Ok(1));
        assert_eq!(slot.state().error_message, None);
    }
}
