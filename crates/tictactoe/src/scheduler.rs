//! Deferred AI moves.
//!
//! The AI answers after a short delay so its move is visible as a separate
//! step. The timer runs as a tokio task and reports back to the UI loop over
//! a channel; the loop hands the ticket to
//! [`Session::ai_turn`](crate::Session::ai_turn), which drops it if the board
//! has moved on.

use crate::session::AiTicket;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, instrument};

/// Messages delivered to the UI loop from background tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The AI's delay elapsed.
    AiTurn(AiTicket),
}

/// Spawns one-shot timers for AI moves.
#[derive(Debug, Clone)]
pub struct AiScheduler {
    tx: mpsc::UnboundedSender<AppEvent>,
    delay: Duration,
}

impl AiScheduler {
    /// Creates a scheduler and the receiver the UI loop drains.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, delay }, rx)
    }

    /// Fires `AppEvent::AiTurn(ticket)` after the delay.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&self, ticket: AiTicket) {
        let tx = self.tx.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            sleep(delay).await;
            if tx.send(AppEvent::AiTurn(ticket)).is_err() {
                debug!("UI loop gone, dropping AI turn");
            }
        });
    }
}
