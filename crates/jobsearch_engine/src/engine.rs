use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use jobsearch_logging::{
    clear_current_request, jobsearch_debug, jobsearch_warn, set_current_request,
};
use tokio::sync::mpsc;

use crate::{
    BackendError, EngineEvent, FailureKind, JobRecord, RequestToken, SearchBackend, SearchRequest,
};

/// Runs searches as independent tasks and reports completions in arrival order.
///
/// Completions are tagged with the token given at enqueue time; deciding which
/// of them still matter is up to the receiver.
pub struct EngineHandle {
    backend: Arc<dyn SearchBackend>,
    event_tx: mpsc::UnboundedSender<EngineEvent>,
    event_rx: mpsc::UnboundedReceiver<EngineEvent>,
    in_flight: Arc<AtomicUsize>,
}

impl EngineHandle {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            backend,
            event_tx,
            event_rx,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Starts a search on the current tokio runtime. Must be called from within one.
    pub fn enqueue(&self, token: RequestToken, request: SearchRequest) {
        let backend = self.backend.clone();
        let event_tx = self.event_tx.clone();
        let in_flight = self.in_flight.clone();
        in_flight.fetch_add(1, Ordering::SeqCst);

        tokio::spawn(async move {
            let mut completion = Completion {
                token,
                event_tx: Some(event_tx),
                in_flight,
            };
            set_current_request(token);
            jobsearch_debug!("dispatching search for {:?}", request.title);
            clear_current_request();
            let result = backend.search(&request).await;
            completion.send(result);
        });
    }

    /// Number of searches whose completion has not been queued yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub async fn recv(&mut self) -> Option<EngineEvent> {
        self.event_rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

/// Reports exactly one completion per enqueued search, even if the task unwinds
/// or is cancelled before the backend returns.
struct Completion {
    token: RequestToken,
    event_tx: Option<mpsc::UnboundedSender<EngineEvent>>,
    in_flight: Arc<AtomicUsize>,
}

impl Completion {
    fn send(&mut self, result: Result<Vec<JobRecord>, BackendError>) {
        if let Some(event_tx) = self.event_tx.take() {
            let _ = event_tx.send(EngineEvent::SearchCompleted {
                token: self.token,
                result,
            });
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if self.event_tx.is_some() {
            set_current_request(self.token);
            jobsearch_warn!("search task ended without a result");
            clear_current_request();
            self.send(Err(BackendError::new(FailureKind::Aborted)));
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
