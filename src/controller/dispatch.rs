use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use tracing::{debug, error};

use super::state::{Controller, Ticket, Trigger};
use crate::retrieval::{FetchOutcome, RetrievalService};

/// A retrieval that finished on a worker thread
#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub outcome: FetchOutcome,
}

/// Runs retrievals off the UI thread and hands their outcomes back in
/// completion order. Tickets are never cancelled; stale ones are filtered out
/// by [`Controller::complete`] when drained.
pub struct RetrievalDispatcher {
    service: Arc<RetrievalService>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl RetrievalDispatcher {
    pub fn new(service: Arc<RetrievalService>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { service, tx, rx }
    }

    pub fn dispatch(&self, ticket: Ticket) {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        let seq = ticket.seq();
        debug!(seq, trigger = ?ticket.trigger(), "dispatching retrieval");

        // The closure owns the only ticket copy; keep one to report spawn failures
        let fallback = ticket.clone();
        let spawned = thread::Builder::new().name(format!("retrieval-{}", seq)).spawn(move || {
            let outcome = match ticket.trigger() {
                Trigger::Category(category) => service.fetch_by_category(category),
                Trigger::Query(query) => service.fetch_by_query(query),
            };
            // Receiver gone means the app is shutting down
            let _ = tx.send(Completion { ticket, outcome });
        });

        if let Err(e) = spawned {
            error!(seq, error = %e, "could not start retrieval thread");
            let _ = self.tx.send(Completion {
                ticket: fallback,
                outcome: FetchOutcome::Failed(format!("could not start retrieval: {}", e)),
            });
        }
    }

    /// Apply every completion that has arrived so far. Returns how many changed state.
    pub fn drain(&self, controller: &mut Controller) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.rx.try_recv() {
            if controller.complete(&completion.ticket, completion.outcome) {
                applied += 1;
            }
        }
        applied
    }

    /// Block until the next completion arrives, then apply it.
    ///
    /// Returns `None` on timeout, otherwise whether the completion changed state.
    pub fn wait_next(&self, controller: &mut Controller, timeout: Duration) -> Option<bool> {
        match self.rx.recv_timeout(timeout) {
            Ok(completion) => Some(controller.complete(&completion.ticket, completion.outcome)),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}
