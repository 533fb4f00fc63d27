//! Scripted transport and harness helpers shared by the net tests.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::RwSignal;

use crate::net::http::{ApiClient, HttpRequest, HttpResponse, Transport, TransportError};
use crate::net::session::Session;
use crate::state::auth::AuthState;
use crate::state::toast::Toasts;

type Responder = Rc<dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError>>;

/// Transport that records every request and answers from a scripted
/// responder. Each send yields once before responding so concurrent
/// requests genuinely interleave under `futures::join!`.
#[derive(Clone)]
pub(crate) struct MockTransport {
    calls: Rc<RefCell<Vec<HttpRequest>>>,
    responder: Responder,
}

impl MockTransport {
    pub(crate) fn new(
        responder: impl Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + 'static,
    ) -> Self {
        Self { calls: Rc::new(RefCell::new(Vec::new())), responder: Rc::new(responder) }
    }

    pub(crate) fn calls(&self) -> Vec<HttpRequest> {
        self.calls.borrow().clone()
    }

    /// Number of recorded requests whose URL ends with `path`.
    pub(crate) fn count(&self, path: &str) -> usize {
        self.calls.borrow().iter().filter(|req| req.url.ends_with(path)).count()
    }
}

impl Transport for MockTransport {
    async fn send(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.borrow_mut().push(req.clone());
        yield_once().await;
        (self.responder)(req)
    }
}

/// A future that returns `Pending` exactly once before completing.
pub(crate) fn yield_once() -> impl Future<Output = ()> {
    let mut yielded = false;
    std::future::poll_fn(move |cx| {
        if yielded {
            std::task::Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            std::task::Poll::Pending
        }
    })
}

pub(crate) fn resp(status: u16, body: &str) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse { status, body: body.to_owned() })
}

/// Fresh client + transport pair with empty base URL, so request URLs equal
/// their paths.
pub(crate) fn harness(
    responder: impl Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + 'static,
) -> (ApiClient<MockTransport>, MockTransport) {
    let transport = MockTransport::new(responder);
    let api = ApiClient::new(
        transport.clone(),
        Session::new(),
        RwSignal::new(AuthState::default()),
        Toasts::new(),
    )
    .with_base_url("");
    (api, transport)
}
