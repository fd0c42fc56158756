//! Viewer state and main loop

use std::time::Duration;

use rand::rngs::ThreadRng;
use tracing::{debug, info};

use crate::deck::Deck;
use crate::display::Display;
use crate::error::Result;
use crate::explain::{ExplainError, TextGenerator};
use crate::input::{translate_key, Action};
use crate::panel::{ExplanationPanel, ExplanationWorker};
use crate::syntax::LanguageProfile;
use crate::terminal::{TermEvent, Terminal};

/// How long to wait for input before checking for finished requests
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main viewer state
pub struct App<G> {
    /// Cards and current position
    pub deck: Deck,
    /// Highlighting profile for every snippet in the deck
    pub profile: LanguageProfile,
    /// Terminal interface
    pub terminal: Terminal,
    /// Display state
    pub display: Display,
    /// Explanation panel
    pub panel: ExplanationPanel,
    /// Background explanation requests
    pub worker: ExplanationWorker<G>,
    /// Whether the viewer is running
    pub running: bool,
    rng: ThreadRng,
}

impl<G> App<G>
where
    G: TextGenerator + Send + Sync + 'static,
{
    pub fn new(
        deck: Deck,
        profile: LanguageProfile,
        terminal: Terminal,
        display: Display,
        worker: ExplanationWorker<G>,
    ) -> Self {
        Self {
            deck,
            profile,
            terminal,
            display,
            panel: ExplanationPanel::new(),
            worker,
            running: true,
            rng: rand::thread_rng(),
        }
    }

    /// Run the main loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        info!(cards = self.deck.len(), language = %self.profile.name, "viewer started");
        self.display.force_redraw();
        let mut dirty = true;

        while self.running {
            if self.collect_finished() {
                dirty = true;
            }

            if dirty {
                self.display.render(
                    &mut self.terminal,
                    self.deck.current(),
                    (self.deck.index(), self.deck.len()),
                    &self.profile,
                    self.panel.state(),
                )?;
                dirty = false;
            }

            match self.terminal.poll_event(POLL_INTERVAL)? {
                Some(TermEvent::Key(key_event)) => {
                    if let Some(action) = translate_key(key_event) {
                        self.handle_action(action);
                        dirty = true;
                    }
                }
                Some(TermEvent::Resize) => {
                    self.display.force_redraw();
                    dirty = true;
                }
                None => {}
            }
        }

        info!("viewer stopped");
        Ok(())
    }

    /// Apply finished requests. Returns true if the panel changed.
    fn collect_finished(&mut self) -> bool {
        let mut changed = false;
        while let Some(outcome) = self.worker.try_recv() {
            if self.panel.complete(&outcome.ticket, outcome.result) {
                info!(card = %outcome.ticket.card_id(), "explanation ready");
                changed = true;
            }
        }
        changed
    }

    /// Handle a key action
    fn handle_action(&mut self, action: Action) {
        self.display.clear_message();

        match action {
            Action::NextCard => {
                if self.deck.advance(&mut self.rng) {
                    debug!(index = self.deck.index(), card = %self.deck.current().id, "next card");
                    self.panel.card_changed();
                    self.display.reset_scroll();
                } else {
                    self.display.set_message("This deck has only one card");
                }
            }
            Action::Explain => self.explain_current(),
            Action::ClosePanel => {
                self.panel.dismiss();
                self.display.force_redraw();
            }
            Action::ToggleLineNumbers => self.display.toggle_line_numbers(),
            Action::ScrollUp => self.display.scroll_up(),
            Action::ScrollDown => self.display.scroll_down(),
            Action::Quit => self.running = false,
        }
    }

    /// Start an explanation for the current card
    fn explain_current(&mut self) {
        if !self.worker.has_credential() {
            self.panel.fail(&ExplainError::MissingCredential);
            return;
        }

        let card = self.deck.current().clone();
        match self.panel.begin(&card.id) {
            Some(ticket) => self.worker.request(ticket, card),
            None => self.display.set_message("Explanation already loading..."),
        }
    }
}
