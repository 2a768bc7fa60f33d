use std::cell::RefCell;
use std::rc::Rc;

use api_usage_chart_wasm::domain::errors::DashboardError;
use api_usage_chart_wasm::domain::telemetry::{DashboardPayload, PayloadSource, TimeWindow};
use api_usage_chart_wasm::infrastructure::{FetchController, FetchOutcome, FetchStatus};
use futures::FutureExt;
use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::LocalBoxFuture;

type Reply = Result<DashboardPayload, DashboardError>;

/// Hands out one pending future per request; the test decides when each resolves.
#[derive(Default)]
struct ScriptedSource {
    requests: RefCell<Vec<(String, Option<oneshot::Sender<Reply>>)>>,
}

impl ScriptedSource {
    fn urls(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|(url, _)| url.clone()).collect()
    }

    fn respond(&self, index: usize, reply: Reply) {
        let sender = self.requests.borrow_mut()[index].1.take().expect("answered twice");
        sender.send(reply).expect("receiver dropped");
    }
}

impl PayloadSource for ScriptedSource {
    fn fetch_payload(&self, url: &str) -> LocalBoxFuture<'static, Reply> {
        let (tx, rx) = oneshot::channel();
        self.requests.borrow_mut().push((url.to_string(), Some(tx)));
        async move { rx.await.unwrap_or_else(|_| Err(DashboardError::Network("cancelled".into()))) }
            .boxed_local()
    }
}

fn payload(tag: &str) -> DashboardPayload {
    DashboardPayload { alert: Some(tag.to_string()), ..DashboardPayload::default() }
}

fn setup() -> (Rc<ScriptedSource>, FetchController<Rc<ScriptedSource>>) {
    let source = Rc::new(ScriptedSource::default());
    let controller = FetchController::new(Rc::clone(&source), "https://api.test/usage");
    (source, controller)
}

#[test]
fn late_stale_response_never_wins() {
    let (source, controller) = setup();
    let (_a, task_a) = controller.start(TimeWindow::OneHour);
    let (_b, task_b) = controller.start(TimeWindow::SevenDays);

    source.respond(1, Ok(payload("B")));
    assert_eq!(block_on(task_b), FetchOutcome::Applied);

    source.respond(0, Ok(payload("A")));
    assert_eq!(block_on(task_a), FetchOutcome::Discarded);

    let state = controller.state();
    assert_eq!(state.status, FetchStatus::Success);
    assert_eq!(state.payload, Some(payload("B")));
}

#[test]
fn stale_failure_is_not_surfaced() {
    let (source, controller) = setup();
    let (_a, task_a) = controller.start(TimeWindow::OneHour);
    let (_b, task_b) = controller.start(TimeWindow::SixHours);

    source.respond(1, Ok(payload("B")));
    block_on(task_b);
    source.respond(0, Err(DashboardError::http(500, "Internal Server Error")));
    block_on(task_a);

    let state = controller.state();
    assert_eq!(state.status, FetchStatus::Success);
    assert_eq!(state.error_message, None);
}

#[test]
fn request_urls_carry_the_window() {
    let (source, controller) = setup();
    let _ = controller.start(TimeWindow::OneHour);
    let _ = controller.start(TimeWindow::ThirtyDays);
    assert_eq!(
        source.urls(),
        ["https://api.test/usage?window=1h", "https://api.test/usage?window=30d"]
    );
}

#[test]
fn failure_keeps_last_good_payload() {
    let (source, controller) = setup();
    let (_first, task) = controller.start(TimeWindow::TwentyFourHours);
    source.respond(0, Ok(payload("good")));
    block_on(task);

    let (_second, task) = controller.start(TimeWindow::TwentyFourHours);
    assert!(controller.state().is_loading());
    source.respond(1, Err(DashboardError::http(503, "Service Unavailable")));
    assert_eq!(block_on(task), FetchOutcome::Applied);

    let state = controller.state();
    assert_eq!(state.status, FetchStatus::Error);
    assert_eq!(state.error_message.as_deref(), Some("HTTP error: 503"));
    assert_eq!(state.payload, Some(payload("good")));

    let (_third, task) = controller.start(TimeWindow::TwentyFourHours);
    source.respond(2, Ok(payload("fresh")));
    block_on(task);
    assert_eq!(controller.state().error_message, None);
}

#[test]
fn disposed_request_is_ignored() {
    let (source, controller) = setup();
    let (disposer, task) = controller.start(TimeWindow::OneHour);
    disposer.dispose();

    source.respond(0, Ok(payload("late")));
    assert_eq!(block_on(task), FetchOutcome::Discarded);
    assert_eq!(controller.state().payload, None);
}

#[test]
fn disposing_a_superseded_request_spares_the_current_one() {
    let (source, controller) = setup();
    let (old, _old_task) = controller.start(TimeWindow::OneHour);
    let (_current, task) = controller.start(TimeWindow::SixHours);
    old.dispose();

    source.respond(1, Ok(payload("current")));
    assert_eq!(block_on(task), FetchOutcome::Applied);
}

#[test]
fn invalidate_drops_everything_in_flight() {
    let (source, controller) = setup();
    let (_a, task) = controller.start(TimeWindow::OneHour);
    controller.invalidate();

    source.respond(0, Ok(payload("unmounted")));
    assert_eq!(block_on(task), FetchOutcome::Discarded);
}

/// Records a request only when its future runs, like an `async fn` over gloo-net.
#[derive(Default)]
struct LazySource {
    sent: Rc<RefCell<Vec<String>>>,
}

impl PayloadSource for LazySource {
    fn fetch_payload(&self, url: &str) -> LocalBoxFuture<'static, Reply> {
        let sent = Rc::clone(&self.sent);
        let url = url.to_string();
        async move {
            sent.borrow_mut().push(url);
            Ok(payload("lazy"))
        }
        .boxed_local()
    }
}

#[test]
fn request_is_sent_when_task_is_polled() {
    let source = LazySource::default();
    let sent = Rc::clone(&source.sent);
    let controller = FetchController::new(source, "https://api.test/usage");

    let (_disposer, task) = controller.start(TimeWindow::OneHour);
    assert!(sent.borrow().is_empty());
    assert_eq!(controller.state().status, FetchStatus::Loading);

    assert_eq!(block_on(task), FetchOutcome::Applied);
    assert_eq!(*sent.borrow(), ["https://api.test/usage?window=1h"]);
}
