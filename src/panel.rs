//! Explanation panel state and background fetching
//!
//! Only one request is in flight per panel. Every request carries a
//! ticket; dismissing the panel or moving to another card invalidates
//! outstanding tickets so late answers are dropped instead of being
//! shown against the wrong card.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use tracing::{debug, info};

use crate::catalog::Example;
use crate::explain::{ExplainError, Explainer, TextGenerator};

/// Identifies one explanation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    card_id: String,
}

impl Ticket {
    pub fn card_id(&self) -> &str {
        &self.card_id
    }
}

/// What the panel shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Hidden,
    Loading,
    Ready(String),
    Failed(String),
}

/// Panel state machine
#[derive(Debug)]
pub struct ExplanationPanel {
    state: PanelState,
    generation: u64,
    pending: Option<Ticket>,
}

impl ExplanationPanel {
    pub fn new() -> Self {
        Self {
            state: PanelState::Hidden,
            generation: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == PanelState::Loading
    }

    pub fn is_visible(&self) -> bool {
        self.state != PanelState::Hidden
    }

    /// Start a request for a card.
    ///
    /// Returns `None` while another request is loading.
    pub fn begin(&mut self, card_id: &str) -> Option<Ticket> {
        if self.is_loading() {
            return None;
        }
        self.generation += 1;
        let ticket = Ticket {
            generation: self.generation,
            card_id: card_id.to_string(),
        };
        self.pending = Some(ticket.clone());
        self.state = PanelState::Loading;
        Some(ticket)
    }

    /// Close the panel and forget any outstanding request
    pub fn dismiss(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.state = PanelState::Hidden;
    }

    /// The selected card changed; the panel belongs to the old card
    pub fn card_changed(&mut self) {
        self.dismiss();
    }

    /// Show an error without issuing a request
    pub fn fail(&mut self, err: &ExplainError) {
        self.generation += 1;
        self.pending = None;
        self.state = PanelState::Failed(err.to_string());
    }

    /// Apply a finished request. Returns false when the answer is stale.
    pub fn complete(&mut self, ticket: &Ticket, result: Result<String, ExplainError>) -> bool {
        if self.pending.as_ref() != Some(ticket) {
            debug!(card = %ticket.card_id, "discarding stale explanation");
            return false;
        }
        self.pending = None;
        self.state = match result {
            Ok(text) => PanelState::Ready(text),
            Err(err) => PanelState::Failed(err.to_string()),
        };
        true
    }
}

impl Default for ExplanationPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// A finished request
#[derive(Debug)]
pub struct Outcome {
    pub ticket: Ticket,
    pub result: Result<String, ExplainError>,
}

/// Runs blocking explanation requests on background threads
pub struct ExplanationWorker<G> {
    explainer: Arc<Explainer<G>>,
    tx: Sender<Outcome>,
    rx: Receiver<Outcome>,
}

impl<G> ExplanationWorker<G>
where
    G: TextGenerator + Send + Sync + 'static,
{
    pub fn new(explainer: Explainer<G>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            explainer: Arc::new(explainer),
            tx,
            rx,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.explainer.has_credential()
    }

    /// Fetch an explanation in the background
    pub fn request(&self, ticket: Ticket, example: Example) {
        info!(card = %ticket.card_id, "fetching explanation");
        let explainer = Arc::clone(&self.explainer);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = explainer.explain(&example);
            // The receiver is gone only when the app is shutting down
            let _ = tx.send(Outcome { ticket, result });
        });
    }

    /// Collect a finished request, if any
    pub fn try_recv(&self) -> Option<Outcome> {
        self.rx.try_recv().ok()
    }

    #[cfg(test)]
    fn recv_timeout(&self, timeout: std::time::Duration) -> Option<Outcome> {
        self.rx.recv_timeout(timeout).ok()
    }
}
